use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::{Result, StorageError, storage::Storage, validate_key};

/// Storage backed by a directory, one `<key>.json` file per slot.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the slot file, so a reader sees either the old blob or the new one.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens a data directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| StorageError::io(&dir, e))?;
        tracing::debug!(dir = %dir.display(), "opened file storage");
        Ok(Self { dir })
    }

    /// Returns the data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file that holds a slot.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.slot_path(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(path, e)),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.slot_path(key)?;

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| StorageError::io(&self.dir, e))?;
        tmp.write_all(value)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| StorageError::io(tmp.path(), e))?;
        tmp.persist(&path)
            .map_err(|e| StorageError::io(&path, e.error))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("nested").join("data");
        let storage = FileStorage::open(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(storage.dir(), dir);
    }

    #[test]
    fn test_missing_slot_reads_as_none() {
        let root = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(root.path()).unwrap();
        assert_eq!(storage.get("orders").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let root = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(root.path()).unwrap();

        storage.set("orders", b"[1]").unwrap();
        storage.set("orders", b"[2,1]").unwrap();

        assert_eq!(storage.get("orders").unwrap(), Some(b"[2,1]".to_vec()));
        assert!(root.path().join("orders.json").is_file());
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let root = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(root.path()).unwrap();
        storage.set("orders", b"[]").unwrap();

        let entries: Vec<_> = std::fs::read_dir(root.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, ["orders.json"]);
    }

    #[test]
    fn test_path_like_keys_are_rejected() {
        let root = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(root.path()).unwrap();
        assert!(matches!(
            storage.set("../escape", b"x"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
