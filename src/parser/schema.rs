//! Data shapes read from, and written for, the analytics response.

use serde::{Deserialize, Serialize};

/// Value of the `status` field of a response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Ok,
    UpstreamError,
}

/// One extracted entity, concept or keyword
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    /// Display name, used as the aggregation key
    pub text: String,

    /// Occurrences in the document (entities only); number or decimal string
    #[serde(default)]
    pub count: Option<serde_json::Value>,
}

/// One row of the ranked output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedEntry {
    pub name: String,
    pub value: u64,
}

impl AggregatedEntry {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
