//! Threshold filtering and ranking of collapsed totals.
//!
//! Only names seen often enough are worth charting; the rest is noise.

use super::collapse::CollapsedCounts;
use crate::parser::AggregatedEntry;
use log::debug;

/// Filter and rank collapsed totals
///
/// **Public** - main entry point for ranking
///
/// # Arguments
/// * `counts` - Totals from collapse_items
/// * `min_value` - Exclusive lower bound; an entry must have `value > min_value`
///
/// # Returns
/// Entries sorted by value (descending), ties broken by name (ascending)
pub fn rank_entries(counts: &CollapsedCounts, min_value: u64) -> Vec<AggregatedEntry> {
    let mut entries: Vec<AggregatedEntry> = counts
        .totals
        .iter()
        .filter(|(_, value)| **value > min_value)
        .map(|(name, value)| AggregatedEntry::new(name.clone(), *value))
        .collect();

    entries.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));

    debug!(
        "Kept {} of {} names above {}",
        entries.len(),
        counts.totals.len(),
        min_value
    );

    entries
}

/// Summary of one aggregation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationStats {
    /// Documents in the response
    pub documents: usize,

    /// Item records across all documents
    pub items: usize,

    /// Distinct names before filtering
    pub unique_names: usize,

    /// Entries that passed the threshold
    pub kept: usize,
}

impl AggregationStats {
    pub fn from_counts(counts: &CollapsedCounts, kept: usize) -> Self {
        Self {
            documents: counts.documents,
            items: counts.items,
            unique_names: counts.totals.len(),
            kept,
        }
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Docs: {} | Items: {} | Unique: {} | Kept: {}",
            self.documents, self.items, self.unique_names, self.kept
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn counts(pairs: &[(&str, u64)]) -> CollapsedCounts {
        CollapsedCounts {
            totals: pairs
                .iter()
                .map(|(name, value)| (name.to_string(), *value))
                .collect::<HashMap<_, _>>(),
            documents: 1,
            items: pairs.len(),
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let ranked = rank_entries(&counts(&[("a", 2), ("b", 3), ("c", 1)]), 2);
        assert_eq!(ranked, vec![AggregatedEntry::new("b", 3)]);
    }

    #[test]
    fn test_ranked_descending_then_by_name() {
        let ranked = rank_entries(&counts(&[("zeta", 5), ("alpha", 5), ("mid", 9)]), 2);
        let names: Vec<&str> = ranked.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["mid", "alpha", "zeta"]);
    }

    #[test]
    fn test_zero_threshold_keeps_positive() {
        let ranked = rank_entries(&counts(&[("a", 0), ("b", 1)]), 0);
        assert_eq!(ranked, vec![AggregatedEntry::new("b", 1)]);
    }

    #[test]
    fn test_stats_summary() {
        let stats = AggregationStats::from_counts(&counts(&[("a", 4), ("b", 1)]), 1);
        assert_eq!(stats.unique_names, 2);
        assert_eq!(stats.summary(), "Docs: 1 | Items: 2 | Unique: 2 | Kept: 1");
    }
}
