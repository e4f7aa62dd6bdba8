//! Table header row codec.
//!
//! A table file starts with one comma-separated row describing its columns:
//!
//! ```text
//! id:int:pk,name:str,joined:date
//! ```
//!
//! Names are alphanumeric and types alphabetic, so no field ever needs CSV
//! quoting.

use std::collections::HashSet;

use thiserror::Error;

use super::types::{ColumnDef, ColumnType};
use crate::storage::validate_alphanumeric;

const FIELD_SEPARATOR: char = ',';
const PART_SEPARATOR: char = ':';

/// A header row that does not decode into a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("field {position} is malformed: '{field}'")]
    MalformedField { position: usize, field: String },

    #[error("field {position} has an invalid column name: '{name}'")]
    InvalidColumnName { position: usize, name: String },

    #[error("field {position} has an unknown type: '{type_name}'")]
    UnknownType { position: usize, type_name: String },

    #[error("field {position} has an unknown marker: '{marker}'")]
    UnknownMarker { position: usize, marker: String },

    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("more than one primary key: '{first}' and '{second}'")]
    MultiplePrimaryKeys { first: String, second: String },
}

/// Encode columns as a header row, without line terminator.
pub fn encode(columns: &[ColumnDef]) -> String {
    columns
        .iter()
        .map(ColumnDef::header_field)
        .collect::<Vec<_>>()
        .join(&FIELD_SEPARATOR.to_string())
}

/// Decode a header row (line terminator already stripped).
///
/// An empty row decodes to a table without columns.
pub fn decode(line: &str) -> Result<Vec<ColumnDef>, HeaderError> {
    if line.is_empty() {
        return Ok(Vec::new());
    }

    let mut columns = Vec::new();
    let mut seen = HashSet::new();
    let mut primary: Option<String> = None;

    for (position, field) in line.split(FIELD_SEPARATOR).enumerate() {
        let parts: Vec<&str> = field.split(PART_SEPARATOR).collect();
        let (name, type_name, marker) = match parts.as_slice() {
            [name, type_name] => (*name, *type_name, None),
            [name, type_name, marker] => (*name, *type_name, Some(*marker)),
            _ => {
                return Err(HeaderError::MalformedField {
                    position,
                    field: field.to_string(),
                })
            }
        };

        if validate_alphanumeric(name).is_err() || name.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(HeaderError::InvalidColumnName {
                position,
                name: name.to_string(),
            });
        }

        let column_type = ColumnType::from_tag(type_name).ok_or_else(|| HeaderError::UnknownType {
            position,
            type_name: type_name.to_string(),
        })?;

        let mut column = ColumnDef::new(name, column_type);
        match marker {
            None => {}
            Some(ColumnDef::PK_MARKER) => {
                if let Some(first) = &primary {
                    return Err(HeaderError::MultiplePrimaryKeys {
                        first: first.clone(),
                        second: name.to_string(),
                    });
                }
                primary = Some(name.to_string());
                column = column.with_primary_key();
            }
            Some(other) => {
                return Err(HeaderError::UnknownMarker {
                    position,
                    marker: other.to_string(),
                })
            }
        }

        if !seen.insert(name.to_string()) {
            return Err(HeaderError::DuplicateColumn(name.to_string()));
        }
        columns.push(column);
    }

    Ok(columns)
}
