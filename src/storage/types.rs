//! Validated names for the entities the storage layer maps onto the filesystem.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Check that a name is non-empty ASCII alphanumeric.
///
/// Every on-disk name passes through here before a path is built from it,
/// which keeps separators, dots and other traversal tricks out of the tree.
pub fn validate_alphanumeric(name: &str) -> Result<(), InvalidNameError> {
    if name.is_empty() {
        return Err(InvalidNameError::Empty);
    }

    for (i, c) in name.chars().enumerate() {
        if !c.is_ascii_alphanumeric() {
            return Err(InvalidNameError::InvalidCharacter { char: c, position: i });
        }
    }

    Ok(())
}

/// A validated database name.
///
/// Keeps the name exactly as the caller gave it (deletion confirmation is
/// compared against it) next to the lowercased form that identifies the
/// database on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatabaseName {
    given: String,
    key: String,
}

impl DatabaseName {
    /// create a new DatabaseName, validating the input
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidNameError> {
        let given = name.into();
        validate_alphanumeric(&given)?;
        let key = given.to_ascii_lowercase();
        Ok(Self { given, key })
    }

    /// the name as supplied by the caller
    pub fn as_str(&self) -> &str {
        &self.given
    }

    /// the lowercased name used for the directory
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for DatabaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.given)
    }
}

impl AsRef<str> for DatabaseName {
    fn as_ref(&self) -> &str {
        &self.given
    }
}

impl TryFrom<String> for DatabaseName {
    type Error = InvalidNameError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<DatabaseName> for String {
    fn from(name: DatabaseName) -> Self {
        name.given
    }
}

/// A validated table name, unique (case-insensitively) within its database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableName {
    given: String,
    key: String,
}

impl TableName {
    /// file extension of a table's header file
    pub const EXTENSION: &'static str = "csv";

    /// suffix appended to the table key for the primary-key index sidecar
    pub const INDEX_SUFFIX: &'static str = "_map.json";

    /// create a new TableName, validating the input
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidNameError> {
        let given = name.into();
        validate_alphanumeric(&given)?;
        let key = given.to_ascii_lowercase();
        Ok(Self { given, key })
    }

    /// the name as supplied by the caller
    pub fn as_str(&self) -> &str {
        &self.given
    }

    /// the lowercased name used for the file
    pub fn key(&self) -> &str {
        &self.key
    }

    /// `<key>.csv`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.key, Self::EXTENSION)
    }

    /// `<key>_map.json`
    pub fn index_file_name(&self) -> String {
        format!("{}{}", self.key, Self::INDEX_SUFFIX)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.given)
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.given
    }
}

impl TryFrom<String> for TableName {
    type Error = InvalidNameError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<TableName> for String {
    fn from(name: TableName) -> Self {
        name.given
    }
}

/// error type for invalid names (databases, tables, columns)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidNameError {
    Empty,
    InvalidCharacter { char: char, position: usize },
}

impl fmt::Display for InvalidNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "name cannot be empty"),
            Self::InvalidCharacter { char, position } => write!(
                f,
                "must be alphanumeric, found '{}' at position {}",
                char, position
            ),
        }
    }
}

impl std::error::Error for InvalidNameError {}
