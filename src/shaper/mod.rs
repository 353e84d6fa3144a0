//! Request shaping for the analytics service.
//!
//! This module turns client query parameters into what the analytics
//! service needs:
//! - The validated analysis type
//! - The field paths to populate per document
//! - A validated time window

pub mod analysis_type;
pub mod fields;
pub mod window;

// Re-export main types
pub use analysis_type::AnalysisType;
pub use fields::{shape_fields, FieldSpec};
pub use window::{TimeExpr, TimeWindow};
