//! Catalog operation results.

use std::fmt;
use std::path::PathBuf;

use super::schema::TableSchema;

/// Result of a successful structural change.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogOutcome {
    /// The database directory exists (newly created or already there).
    DatabaseCreated {
        name: String,
        path: PathBuf,
        newly_created: bool,
    },
    /// A table header was written.
    TableCreated {
        database: String,
        table: String,
        path: PathBuf,
        /// Sidecar path when the table has a primary key.
        index: Option<PathBuf>,
        schema: TableSchema,
    },
    /// A table file was removed.
    TableDropped {
        database: String,
        table: String,
        path: PathBuf,
        index_removed: bool,
    },
    /// A database directory and its contents were removed.
    DatabaseDropped { name: String, path: PathBuf },
}

impl CatalogOutcome {
    /// The path the outcome is about.
    pub fn path(&self) -> &PathBuf {
        match self {
            CatalogOutcome::DatabaseCreated { path, .. }
            | CatalogOutcome::TableCreated { path, .. }
            | CatalogOutcome::TableDropped { path, .. }
            | CatalogOutcome::DatabaseDropped { path, .. } => path,
        }
    }
}

impl fmt::Display for CatalogOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogOutcome::DatabaseCreated { name, path, .. } => {
                write!(f, "database '{}' created successfully at {}", name, path.display())
            }
            CatalogOutcome::TableCreated { table, path, .. } => {
                write!(f, "table '{}' created successfully at {}", table, path.display())
            }
            CatalogOutcome::TableDropped { table, path, .. } => {
                write!(f, "table '{}' deleted successfully at {}", table, path.display())
            }
            CatalogOutcome::DatabaseDropped { name, .. } => {
                write!(f, "database '{}' and all its contents have been deleted", name)
            }
        }
    }
}
