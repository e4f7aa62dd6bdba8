//! Storage layer error types
//!
//! Every filesystem failure carries the path it happened on and what we were
//! trying to do, so callers can report it without re-deriving the layout.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// the main error type for storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    /// an I/O call failed (permissions, disk errors, ...)
    #[error("io error: failed to {op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// exclusive create found the file already there
    #[error("file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// the storage root is missing and we were told not to create it
    #[error("storage root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// a file we own does not hold what we wrote into it
    #[error("corrupted data at {}: {reason}", .path.display())]
    CorruptedData { path: PathBuf, reason: String },
}

impl StorageError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        StorageError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// check if this error indicates the resource doesn't exist
    pub fn is_not_found(&self) -> bool {
        match self {
            StorageError::RootNotFound(_) => true,
            StorageError::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// check if this error is a conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, StorageError::AlreadyExists(_))
    }
}

/// result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
