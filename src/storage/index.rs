//! Primary-key index sidecar.
//!
//! A table that declares a primary key gets a `<table>_map.json` file next
//! to its header. It maps primary-key values to row offsets in the table
//! file. Nothing populates it yet; it is created as an empty JSON object so
//! a row layer can pick it up.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Contents of the `<table>_map.json` sidecar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrimaryKeyIndex(BTreeMap<String, u64>);

impl PrimaryKeyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
