//! Catalog error types.

use std::path::PathBuf;

use thiserror::Error;

use super::header::HeaderError;
use super::types::EntityKind;
use crate::storage::{InvalidNameError, StorageError};

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Coarse classification of a [`CatalogError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidName,
    InvalidType,
    NotFound,
    AlreadyExists,
    ConfirmationMismatch,
    IoFailure,
    Corrupt,
}

/// Errors returned by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid {entity} name '{name}': {reason}")]
    InvalidName {
        entity: EntityKind,
        name: String,
        reason: InvalidNameError,
    },

    /// The type is not even a word (digits, punctuation, empty).
    #[error("invalid column type name '{type_name}' for '{column}': must be one of {valid:?}")]
    InvalidTypeName {
        column: String,
        type_name: String,
        valid: &'static [&'static str],
    },

    /// The type is a word but not one we know.
    #[error("invalid column type '{type_name}' for '{column}': must be one of {valid:?}")]
    UnknownType {
        column: String,
        type_name: String,
        valid: &'static [&'static str],
    },

    #[error("database '{name}' does not exist")]
    DatabaseNotFound { name: String, path: PathBuf },

    #[error("table '{table}' does not exist in database '{database}' at {}", .path.display())]
    TableNotFound {
        database: String,
        table: String,
        path: PathBuf,
    },

    #[error("primary key '{primary_key}' not found among columns {columns:?}")]
    PrimaryKeyNotFound {
        primary_key: String,
        columns: Vec<String>,
    },

    #[error("table '{table}' already exists in database '{database}'")]
    TableAlreadyExists {
        database: String,
        table: String,
        path: PathBuf,
    },

    #[error("deletion of database '{name}' aborted: confirmation does not match")]
    ConfirmationMismatch { name: String },

    #[error("corrupted table header in {}: {source}", .path.display())]
    CorruptHeader {
        path: PathBuf,
        #[source]
        source: HeaderError,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CatalogError {
    pub(crate) fn invalid_name(entity: EntityKind, name: &str, reason: InvalidNameError) -> Self {
        CatalogError::InvalidName {
            entity,
            name: name.to_string(),
            reason,
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::InvalidName { .. } => ErrorKind::InvalidName,
            CatalogError::InvalidTypeName { .. } | CatalogError::UnknownType { .. } => {
                ErrorKind::InvalidType
            }
            CatalogError::DatabaseNotFound { .. }
            | CatalogError::TableNotFound { .. }
            | CatalogError::PrimaryKeyNotFound { .. } => ErrorKind::NotFound,
            CatalogError::TableAlreadyExists { .. } => ErrorKind::AlreadyExists,
            CatalogError::ConfirmationMismatch { .. } => ErrorKind::ConfirmationMismatch,
            CatalogError::CorruptHeader { .. } => ErrorKind::Corrupt,
            CatalogError::Storage(StorageError::CorruptedData { .. }) => ErrorKind::Corrupt,
            CatalogError::Storage(StorageError::AlreadyExists(_)) => ErrorKind::AlreadyExists,
            CatalogError::Storage(StorageError::RootNotFound(_)) => ErrorKind::NotFound,
            CatalogError::Storage(StorageError::Io { .. }) => ErrorKind::IoFailure,
        }
    }

    /// check if this error indicates the resource doesn't exist
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// check if this error came from validating caller input rather than
    /// from the state of the disk
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidName | ErrorKind::InvalidType)
    }
}
