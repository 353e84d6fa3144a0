//! Response-to-ranking pipeline.

use super::collapse::collapse_items;
use super::ranking::{rank_entries, AggregationStats};
use crate::parser::{extract_documents, AggregatedEntry};
use crate::shaper::AnalysisType;
use crate::utils::error::ShapeError;
use log::debug;
use serde_json::Value;

/// Aggregate a successful news response into ranked name/value entries
///
/// **Public** - used by the server and the query command
///
/// # Arguments
/// * `response` - Raw response body with status OK
/// * `kind` - Which item list to aggregate
/// * `min_value` - Exclusive threshold (default 2)
///
/// # Errors
/// * `ShapeError` - the body does not have the expected nested structure
pub fn aggregate(
    response: &Value,
    kind: AnalysisType,
    min_value: u64,
) -> Result<Vec<AggregatedEntry>, ShapeError> {
    aggregate_with_stats(response, kind, min_value).map(|(entries, _)| entries)
}

/// Same as [`aggregate`], also returning run statistics
pub fn aggregate_with_stats(
    response: &Value,
    kind: AnalysisType,
    min_value: u64,
) -> Result<(Vec<AggregatedEntry>, AggregationStats), ShapeError> {
    let docs = extract_documents(response)?;
    let counts = collapse_items(docs, kind)?;
    let entries = rank_entries(&counts, min_value);

    let stats = AggregationStats::from_counts(&counts, entries.len());
    debug!("Aggregation for {}: {}", kind, stats.summary());

    Ok((entries, stats))
}
