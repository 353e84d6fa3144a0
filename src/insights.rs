//! The news insights pipeline: shape a request, make one upstream call,
//! aggregate the answer.

use crate::aggregator::aggregate_with_stats;
use crate::analytics::{AnalyticsSource, NewsQuery};
use crate::parser::{classify_response, AggregatedEntry, ResponseStatus};
use crate::shaper::{AnalysisType, TimeWindow};
use crate::utils::config::{
    InsightsSettings, DEFAULT_ANALYSIS_TYPE, DEFAULT_END, DEFAULT_START,
};
use crate::utils::error::{AnalyticsError, InputError, ShapeError};
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

/// Client query parameters, all optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryParams {
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Query parameters with defaults applied and validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightsRequest {
    pub window: TimeWindow,
    pub kind: AnalysisType,
}

impl InsightsRequest {
    /// Apply defaults and validate
    ///
    /// Missing or empty parameters take the defaults `now-1d`, `now` and
    /// `concepts`. The analysis type is checked before anything else.
    pub fn from_params(params: &QueryParams) -> Result<Self, InputError> {
        let kind = or_default(&params.kind, DEFAULT_ANALYSIS_TYPE).parse::<AnalysisType>()?;
        let window = TimeWindow::new(
            or_default(&params.start, DEFAULT_START),
            or_default(&params.end, DEFAULT_END),
        )?;

        Ok(Self { window, kind })
    }

    /// Build the upstream query
    pub fn to_news_query(&self, settings: &InsightsSettings) -> NewsQuery {
        NewsQuery::new(&self.window.start, &self.window.end, self.kind)
            .with_max_results(settings.max_results)
    }
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

/// Everything that can stop the pipeline
#[derive(Error, Debug)]
pub enum InsightsError {
    #[error(transparent)]
    Input(#[from] InputError),

    /// The service reported `status: ERROR`; the payload is kept verbatim
    #[error("Analytics service reported an error")]
    Upstream(serde_json::Value),

    #[error(transparent)]
    DataShape(#[from] ShapeError),

    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
}

/// Run the whole pipeline for one request
///
/// **Public** - shared by the HTTP handler and the query command
///
/// Makes exactly one call to `source`. The aggregator only runs when the
/// service answered with status OK.
pub async fn run_insights(
    source: &dyn AnalyticsSource,
    request: &InsightsRequest,
    settings: &InsightsSettings,
) -> Result<Vec<AggregatedEntry>, InsightsError> {
    let query = request.to_news_query(settings);
    let response = source.news(&query).await?;

    match classify_response(&response)? {
        ResponseStatus::UpstreamError => {
            warn!("Analytics service returned ERROR for {} query", request.kind);
            Err(InsightsError::Upstream(response))
        }
        ResponseStatus::Ok => {
            let (entries, stats) =
                aggregate_with_stats(&response, request.kind, settings.min_value)?;
            info!("Aggregated {}: {}", request.kind, stats.summary());
            Ok(entries)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaper::FieldSpec;

    fn params(start: Option<&str>, end: Option<&str>, kind: Option<&str>) -> QueryParams {
        QueryParams {
            start: start.map(String::from),
            end: end.map(String::from),
            kind: kind.map(String::from),
        }
    }

    #[test]
    fn test_defaults_applied() {
        let request = InsightsRequest::from_params(&QueryParams::default()).unwrap();
        assert_eq!(request.kind, AnalysisType::Concepts);
        assert_eq!(request.window.start, "now-1d");
        assert_eq!(request.window.end, "now");
    }

    #[test]
    fn test_empty_strings_use_defaults() {
        let request = InsightsRequest::from_params(&params(Some(""), Some(""), Some(""))).unwrap();
        assert_eq!(request.kind, AnalysisType::Concepts);
        assert_eq!(request.window.start, "now-1d");
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = InsightsRequest::from_params(&params(None, None, Some("people"))).unwrap_err();
        assert_eq!(err, InputError::UnknownAnalysisType("people".to_string()));
    }

    #[test]
    fn test_news_query_uses_settings() {
        let request = InsightsRequest::from_params(&params(Some("now-7d"), None, Some("entities")))
            .unwrap();
        let settings = InsightsSettings { max_results: 50, min_value: 2 };
        let query = request.to_news_query(&settings);

        assert_eq!(query.start, "now-7d");
        assert_eq!(query.max_results, 50);
        assert_eq!(query.fields, FieldSpec::for_type(AnalysisType::Entities));
    }
}
