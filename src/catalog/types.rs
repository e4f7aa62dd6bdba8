//! Column types and definitions for table schemas.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of column types a table may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int,
    Float,
    Complex,
    Str,
    Bool,
    Bytes,
    List,
    /// Calendar date. Replaces the older `datetime` tag, which is rejected.
    Date,
}

impl ColumnType {
    /// Every type, in the order they are listed in error messages.
    pub const ALL: [ColumnType; 8] = [
        ColumnType::Int,
        ColumnType::Float,
        ColumnType::Complex,
        ColumnType::Str,
        ColumnType::Bool,
        ColumnType::Bytes,
        ColumnType::List,
        ColumnType::Date,
    ];

    /// Type tags as written in table headers.
    pub const NAMES: &'static [&'static str] =
        &["int", "float", "complex", "str", "bool", "bytes", "list", "date"];

    /// Get the tag written to the header for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::Float => "float",
            ColumnType::Complex => "complex",
            ColumnType::Str => "str",
            ColumnType::Bool => "bool",
            ColumnType::Bytes => "bytes",
            ColumnType::List => "list",
            ColumnType::Date => "date",
        }
    }

    /// Look up a type by its tag. Tags are matched exactly; callers lowercase
    /// user input first.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.as_str() == tag)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single column of a table schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Lowercased column name.
    pub name: String,
    pub column_type: ColumnType,
    /// Whether this column is the table's primary key.
    #[serde(default)]
    pub primary_key: bool,
}

impl ColumnDef {
    /// Marker appended to the primary-key column's header field.
    pub const PK_MARKER: &'static str = "pk";

    /// Create a new column definition.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            primary_key: false,
        }
    }

    /// Mark this column as the primary key.
    pub fn with_primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// The header field for this column: `name:type` or `name:type:pk`.
    pub fn header_field(&self) -> String {
        if self.primary_key {
            format!("{}:{}:{}", self.name, self.column_type, Self::PK_MARKER)
        } else {
            format!("{}:{}", self.name, self.column_type)
        }
    }
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.column_type)?;
        if self.primary_key {
            write!(f, " PRIMARY KEY")?;
        }
        Ok(())
    }
}

/// What kind of catalog entity a name belongs to, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Database,
    Table,
    Column,
    PrimaryKey,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Database => "database",
            EntityKind::Table => "table",
            EntityKind::Column => "column",
            EntityKind::PrimaryKey => "primary key",
        };
        write!(f, "{}", label)
    }
}
