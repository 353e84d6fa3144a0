//! Fold per-document item records into name-keyed totals.
//!
//! Example: two documents listing concepts `["ai", "ai"]` and `["ai"]`
//! collapse to `{"ai": 3}`.

use crate::parser::extract_items;
use crate::shaper::AnalysisType;
use crate::utils::error::ShapeError;
use log::debug;
use serde_json::Value;
use std::collections::HashMap;

/// Totals produced by a single fold
#[derive(Debug, Clone, Default)]
pub struct CollapsedCounts {
    /// name -> summed occurrences
    pub totals: HashMap<String, u64>,

    /// Number of documents walked
    pub documents: usize,

    /// Number of item records seen across all documents
    pub items: usize,
}

/// Collapse all documents into one frequency map
///
/// **Public** - main entry point for counting
///
/// # Algorithm
/// 1. Read `source.enriched.url[kind]` of every document
/// 2. Normalize a single record into a one-element list
/// 3. Add each record's occurrences to the total for its `text`
///
/// # Errors
/// Any document that does not have the expected shape aborts the fold.
pub fn collapse_items(docs: &[Value], kind: AnalysisType) -> Result<CollapsedCounts, ShapeError> {
    debug!("Collapsing {} documents for {}", docs.len(), kind);

    let mut counts = CollapsedCounts {
        documents: docs.len(),
        ..Default::default()
    };

    for (index, doc) in docs.iter().enumerate() {
        for item in extract_items(doc, index, kind)? {
            let amount = item.occurrences(kind, index)?;
            counts.items += 1;
            let total = counts.totals.entry(item.text).or_insert(0);
            *total = total.checked_add(amount).ok_or_else(|| ShapeError::InvalidCount {
                doc: index,
                reason: "total overflows a 64-bit counter".to_string(),
            })?;
        }
    }

    debug!(
        "Collapsed {} items into {} unique names",
        counts.items,
        counts.totals.len()
    );

    Ok(counts)
}
