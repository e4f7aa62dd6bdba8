//! Catalog module for schema management.
//!
//! The catalog validates and performs every structural change under the
//! storage root: creating and dropping databases and tables, checking column
//! names and types, and declaring primary keys. Row data is not its concern.

mod config;
mod confirm;
mod error;
mod header;
mod locks;
mod manager;
mod outcome;
mod schema;
mod types;

pub use config::CatalogConfig;
pub use confirm::{Confirm, Prompt};
pub use error::{CatalogError, CatalogResult, ErrorKind};
pub use header::HeaderError;
pub use manager::Catalog;
pub use outcome::CatalogOutcome;
pub use schema::{SchemaBuilder, TableSchema};
pub use types::{ColumnDef, ColumnType, EntityKind};
