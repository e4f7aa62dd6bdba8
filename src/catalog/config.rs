//! Catalog configuration.

use std::path::PathBuf;

/// Catalog configuration options.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Directory that holds one subdirectory per database.
    pub root: PathBuf,
    /// Create the root directory if it doesn't exist.
    pub create_root_if_missing: bool,
    /// Also remove the primary-key index sidecar when a table is dropped.
    pub remove_index_on_drop: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("database"),
            create_root_if_missing: true,
            remove_index_on_drop: false,
        }
    }
}

impl CatalogConfig {
    /// Create a new configuration with the given storage root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Set create_root_if_missing flag.
    pub fn create_root_if_missing(mut self, value: bool) -> Self {
        self.create_root_if_missing = value;
        self
    }

    /// Set remove_index_on_drop flag.
    pub fn remove_index_on_drop(mut self, value: bool) -> Self {
        self.remove_index_on_drop = value;
        self
    }
}
