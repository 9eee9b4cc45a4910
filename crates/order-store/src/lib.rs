//! Local order history.
//!
//! Orders are kept as a single JSON array under one storage slot. The slot is
//! reached through the [`Storage`] capability so the same [`OrderStore`] runs
//! against memory in tests and against a data directory in the app.

pub mod error;
pub mod file;
pub mod memory;
pub mod orders;
pub mod storage;

pub use error::{Result, StorageError};
pub use file::FileStorage;
pub use memory::InMemoryStorage;
pub use orders::{DEFAULT_ORDERS_KEY, OrderStore};
pub use storage::{Storage, validate_key};
