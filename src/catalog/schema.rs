//! Table schema definitions and validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{CatalogError, CatalogResult};
use super::header::{self, HeaderError};
use super::types::{ColumnDef, ColumnType, EntityKind};
use crate::storage::{validate_alphanumeric, TableName};

/// Table schema: the ordered columns of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Lowercased table name.
    pub name: String,
    /// Column definitions, in declaration order.
    pub columns: Vec<ColumnDef>,
}

impl TableSchema {
    /// Decode a schema from a table's header row.
    pub fn from_header(name: impl Into<String>, line: &str) -> Result<Self, HeaderError> {
        Ok(Self {
            name: name.into(),
            columns: header::decode(line)?,
        })
    }

    /// Encode this schema as a header row, without line terminator.
    pub fn to_header(&self) -> String {
        header::encode(&self.columns)
    }

    /// Get a column definition by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// The primary-key column, if the table declares one.
    pub fn primary_key(&self) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.primary_key)
    }
}

impl fmt::Display for TableSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for column in &self.columns {
            writeln!(f, "  {}", column)?;
        }
        Ok(())
    }
}

/// Builder for creating table schemas from untrusted input.
///
/// Names and types are accepted in any case. `build` lowercases them and
/// validates column by column, stopping at the first bad one.
pub struct SchemaBuilder {
    name: String,
    columns: Vec<(String, String)>,
    primary_key: Option<String>,
}

impl SchemaBuilder {
    /// Start building a new schema.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            primary_key: None,
        }
    }

    /// Add a column by name and type tag.
    ///
    /// A name that repeats an earlier one (ignoring case) replaces that
    /// column's type but keeps its position.
    pub fn column(mut self, name: impl AsRef<str>, type_name: impl AsRef<str>) -> Self {
        let name = name.as_ref().to_lowercase();
        let type_name = type_name.as_ref().to_lowercase();
        match self.columns.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = type_name,
            None => self.columns.push((name, type_name)),
        }
        self
    }

    /// Add several columns in iteration order.
    pub fn columns<I, K, V>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        columns
            .into_iter()
            .fold(self, |builder, (name, type_name)| builder.column(name, type_name))
    }

    /// Set the primary key.
    pub fn primary_key(mut self, column_name: impl Into<String>) -> Self {
        self.primary_key = Some(column_name.into());
        self
    }

    /// Validate and build the schema.
    pub fn build(self) -> CatalogResult<TableSchema> {
        let table = TableName::new(self.name.as_str())
            .map_err(|e| CatalogError::invalid_name(EntityKind::Table, &self.name, e))?;

        let mut columns = Vec::with_capacity(self.columns.len());
        for (name, type_name) in &self.columns {
            columns.push(validate_column(name, type_name)?);
        }

        if let Some(pk) = &self.primary_key {
            validate_alphanumeric(pk)
                .map_err(|e| CatalogError::invalid_name(EntityKind::PrimaryKey, pk, e))?;
            let wanted = pk.to_lowercase();
            let column = columns
                .iter_mut()
                .find(|c| c.name == wanted)
                .ok_or_else(|| CatalogError::PrimaryKeyNotFound {
                    primary_key: pk.clone(),
                    columns: self.columns.iter().map(|(name, _)| name.clone()).collect(),
                })?;
            column.primary_key = true;
        }

        Ok(TableSchema {
            name: table.key().to_string(),
            columns,
        })
    }
}

fn validate_column(name: &str, type_name: &str) -> CatalogResult<ColumnDef> {
    validate_alphanumeric(name)
        .map_err(|e| CatalogError::invalid_name(EntityKind::Column, name, e))?;

    if type_name.is_empty() || !type_name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CatalogError::InvalidTypeName {
            column: name.to_string(),
            type_name: type_name.to_string(),
            valid: ColumnType::NAMES,
        });
    }

    let column_type = ColumnType::from_tag(type_name).ok_or_else(|| CatalogError::UnknownType {
        column: name.to_string(),
        type_name: type_name.to_string(),
        valid: ColumnType::NAMES,
    })?;

    Ok(ColumnDef::new(name, column_type))
}
