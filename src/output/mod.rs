//! Output writers for ranked insights.
//!
//! - JSON files (pretty)
//! - Text summaries

pub mod json;
pub mod summary;

// Re-export main functions
pub use json::{insights_to_string, read_insights, write_insights};
pub use summary::format_summary;
