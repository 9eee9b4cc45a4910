//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use order_store::DEFAULT_ORDERS_KEY;

/// Storefront configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `STOREFRONT_DATA_DIR`: directory holding the order history (default: `".storefront"`)
/// - `STOREFRONT_ORDERS_KEY`: storage slot for the order history (default: `"autodinar_orders"`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub orders_key: String,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_dir: lookup("STOREFRONT_DATA_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            orders_key: lookup("STOREFRONT_ORDERS_KEY")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.orders_key),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    /// Overrides the data directory, e.g. from a command-line flag.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".storefront"),
            orders_key: DEFAULT_ORDERS_KEY.to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from(".storefront"));
        assert_eq!(config.orders_key, "autodinar_orders");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("STOREFRONT_DATA_DIR", "/var/lib/storefront"),
            ("STOREFRONT_ORDERS_KEY", "orders_test"),
            ("RUST_LOG", "debug"),
        ]
        .into();
        let config = Config::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/storefront"));
        assert_eq!(config.orders_key, "orders_test");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = Config::from_lookup(|_| Some(String::new()));
        assert_eq!(config.data_dir, PathBuf::from(".storefront"));
        assert_eq!(config.orders_key, "autodinar_orders");
    }

    #[test]
    fn test_with_data_dir() {
        let config = Config::default().with_data_dir("/tmp/orders");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/orders"));
    }
}
