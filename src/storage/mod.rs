//! storage layer for flatdb
//!
//! this module is the filesystem abstraction the catalog sits on. The upper
//! layer (the catalog manager) decides *whether* something may be created
//! or removed; this layer decides *where* it lives and does the I/O.
//!
//! # Layout
//!
//! ```text
//! <root>/
//!   <db>/                     one directory per database
//!     <table>.csv             header row: name:type[,name:type:pk...]
//!     <table>_map.json        primary-key index sidecar, `{}` when created
//! ```
//!
//! All names are validated alphanumeric and lowercased before they become
//! path components.

mod disk;
mod error;
mod index;
mod types;

// Re-export public API
pub use disk::{DiskStore, HEADER_TERMINATOR};
pub use error::{StorageError, StorageResult};
pub use index::PrimaryKeyIndex;
pub use types::{validate_alphanumeric, DatabaseName, InvalidNameError, TableName};
