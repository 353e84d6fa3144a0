//! Response parsing and schema definitions.
//!
//! This module handles:
//! - Classifying the response envelope (OK vs upstream ERROR)
//! - Extracting documents and their item records
//! - Defining the output entry schema

pub mod response;
pub mod schema;

// Re-export main types
pub use response::{classify_response, extract_documents, extract_items, parse_count};
pub use schema::{AggregatedEntry, ItemRecord, ResponseStatus};
