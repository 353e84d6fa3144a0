//! Aggregation of news responses into ranked name/value entries.
//!
//! This module transforms the nested per-document response into:
//! - Name-keyed frequency totals
//! - A filtered, ranked list ready for charting
//! - Run statistics for logging

pub mod aggregate;
pub mod collapse;
pub mod ranking;

// Re-export main types and functions
pub use aggregate::{aggregate, aggregate_with_stats};
pub use collapse::{collapse_items, CollapsedCounts};
pub use ranking::{rank_entries, AggregationStats};
