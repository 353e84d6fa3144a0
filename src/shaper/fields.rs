//! Field paths requested from the analytics service.
//!
//! The service only populates the nested attributes named in the
//! `return` parameter, so the field list decides what each document
//! will carry.

use super::analysis_type::AnalysisType;
use log::debug;

const ENTITY_FIELDS: &[&str] = &[
    "enriched.url.entities.entity.text",
    "enriched.url.entities.entity.type",
    "enriched.url.entities.entity.sentiment",
    "enriched.url.entities.entity.count",
];

const CONCEPT_FIELDS: &[&str] = &["enriched.url.concepts.concept.text"];

const KEYWORD_FIELDS: &[&str] = &[
    "enriched.url.keywords.keyword.text",
    "enriched.url.keywords.keyword.sentiment",
];

/// Ordered set of dotted field paths for one analysis type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    paths: Vec<&'static str>,
}

impl FieldSpec {
    /// Build the field list for a recognized analysis type
    pub fn for_type(kind: AnalysisType) -> Self {
        let paths = match kind {
            AnalysisType::Entities => ENTITY_FIELDS,
            AnalysisType::Concepts => CONCEPT_FIELDS,
            AnalysisType::Keywords => KEYWORD_FIELDS,
        };

        Self {
            paths: paths.to_vec(),
        }
    }

    pub fn paths(&self) -> &[&'static str] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Comma-separated form sent as the `return` parameter
    pub fn to_return_param(&self) -> String {
        self.paths.join(",")
    }
}

/// Shape the field list from a raw type string
///
/// Returns `None` for anything other than the three recognized types.
/// That is a distinct state from an empty list: callers must reject it
/// instead of sending a request that asks for nothing.
pub fn shape_fields(kind: &str) -> Option<FieldSpec> {
    match kind.parse::<AnalysisType>() {
        Ok(kind) => Some(FieldSpec::for_type(kind)),
        Err(e) => {
            debug!("No fields for request: {}", e);
            None
        }
    }
}
