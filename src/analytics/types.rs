//! Request types for the news analytics service.

use crate::shaper::{AnalysisType, FieldSpec};
use crate::utils::config::DEFAULT_MAX_RESULTS;

/// Parameters of a single news query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    /// Window start (time expression, forwarded unchanged)
    pub start: String,

    /// Window end (time expression, forwarded unchanged)
    pub end: String,

    /// Maximum number of documents to return
    pub max_results: u32,

    /// Field paths to populate per document
    pub fields: FieldSpec,
}

impl NewsQuery {
    /// Create a query for an analysis type with the default document limit
    pub fn new(start: impl Into<String>, end: impl Into<String>, kind: AnalysisType) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            max_results: DEFAULT_MAX_RESULTS,
            fields: FieldSpec::for_type(kind),
        }
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Query string pairs for the news endpoint
    pub fn to_query_pairs(&self, api_key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("apikey", api_key.to_string()),
            ("outputMode", "json".to_string()),
            ("start", self.start.clone()),
            ("end", self.end.clone()),
            ("maxResults", self.max_results.to_string()),
            ("return", self.fields.to_return_param()),
        ]
    }
}

/// Raw response from the news endpoint (inspected by the parser)
pub type RawNewsResponse = serde_json::Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs() {
        let query = NewsQuery::new("now-1d", "now", AnalysisType::Keywords);
        let pairs = query.to_query_pairs("secret");

        assert_eq!(pairs[0], ("apikey", "secret".to_string()));
        assert_eq!(pairs[1], ("outputMode", "json".to_string()));
        assert_eq!(pairs[4], ("maxResults", "100".to_string()));
        assert_eq!(
            pairs[5],
            (
                "return",
                "enriched.url.keywords.keyword.text,enriched.url.keywords.keyword.sentiment"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_with_max_results() {
        let query = NewsQuery::new("now-7d", "now", AnalysisType::Concepts).with_max_results(25);
        assert_eq!(query.max_results, 25);
    }
}
