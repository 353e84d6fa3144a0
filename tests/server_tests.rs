//! HTTP-level tests for the news insights endpoint.
//!
//! The analytics service is replaced by a canned source that records the
//! queries it receives.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use news_insights::analytics::{AnalyticsSource, NewsQuery, RawNewsResponse};
use news_insights::server::{build_router, AppState};
use news_insights::utils::config::InsightsSettings;
use news_insights::utils::error::AnalyticsError;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

struct CannedSource {
    response: Value,
    calls: Mutex<Vec<NewsQuery>>,
}

impl CannedSource {
    fn new(response: Value) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<NewsQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalyticsSource for CannedSource {
    async fn news(&self, query: &NewsQuery) -> Result<RawNewsResponse, AnalyticsError> {
        self.calls.lock().unwrap().push(query.clone());
        Ok(self.response.clone())
    }
}

struct FailingSource;

#[async_trait]
impl AnalyticsSource for FailingSource {
    async fn news(&self, _query: &NewsQuery) -> Result<RawNewsResponse, AnalyticsError> {
        Err(AnalyticsError::InvalidResponse("HTTP 503: body is not JSON".to_string()))
    }
}

struct TimeoutSource;

#[async_trait]
impl AnalyticsSource for TimeoutSource {
    async fn news(&self, _query: &NewsQuery) -> Result<RawNewsResponse, AnalyticsError> {
        Err(AnalyticsError::Timeout("operation timed out after 30s".to_string()))
    }
}

async fn get(source: Arc<dyn AnalyticsSource>, uri: &str) -> (StatusCode, Value) {
    let app = build_router(AppState::new(source, InsightsSettings::default()));

    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

fn concepts_response() -> Value {
    json!({
        "status": "OK",
        "result": {
            "docs": [
                { "source": { "enriched": { "url": { "concepts": [{ "text": "ai" }, { "text": "ai" }] } } } },
                { "source": { "enriched": { "url": { "concepts": { "text": "ai" } } } } }
            ]
        }
    })
}

#[tokio::test]
async fn test_success_returns_ranked_entries() {
    let source = CannedSource::new(concepts_response());

    let (status, body) = get(source.clone(), "/newsinsights?type=concepts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "name": "ai", "value": 3 }]));
    assert_eq!(source.calls().len(), 1);
}

#[tokio::test]
async fn test_defaults_sent_upstream() {
    let source = CannedSource::new(concepts_response());

    let (status, _) = get(source.clone(), "/newsinsights").await;

    assert_eq!(status, StatusCode::OK);
    let calls = source.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].start, "now-1d");
    assert_eq!(calls[0].end, "now");
    assert_eq!(calls[0].max_results, 100);
    assert_eq!(
        calls[0].fields.to_return_param(),
        "enriched.url.concepts.concept.text"
    );
}

#[tokio::test]
async fn test_upstream_error_forwarded_verbatim() {
    let payload = json!({
        "status": "ERROR",
        "statusInfo": "daily-transaction-limit-exceeded",
        "usage": "By accessing AlchemyAPI or using information generated by AlchemyAPI, you are agreeing to be bound by the AlchemyAPI Terms of Use"
    });
    let source = CannedSource::new(payload.clone());

    let (status, body) = get(source.clone(), "/newsinsights?type=entities").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_unknown_type_rejected_before_upstream_call() {
    let source = CannedSource::new(concepts_response());

    let (status, body) = get(source.clone(), "/newsinsights?type=people").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid_input");
    assert!(source.calls().is_empty());
}

#[tokio::test]
async fn test_invalid_window_rejected_before_upstream_call() {
    let source = CannedSource::new(concepts_response());

    let (status, body) = get(source.clone(), "/newsinsights?start=now&end=now-3d").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid_input");
    assert!(source.calls().is_empty());
}

#[tokio::test]
async fn test_malformed_response_is_structured_error() {
    let source = CannedSource::new(json!({
        "status": "OK",
        "result": { "docs": [{ "source": { "enriched": {} } }] }
    }));

    let (status, body) = get(source, "/newsinsights").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["kind"], "data_shape");
}

#[tokio::test]
async fn test_transport_failure_is_bad_gateway() {
    let (status, body) = get(Arc::new(FailingSource), "/newsinsights").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["kind"], "analytics_unavailable");
}

#[tokio::test]
async fn test_timeout_is_gateway_timeout() {
    let (status, body) = get(Arc::new(TimeoutSource), "/newsinsights?type=keywords").await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["kind"], "analytics_unavailable");
}

#[tokio::test]
async fn test_entities_summed_by_count() {
    let source = CannedSource::new(json!({
        "status": "OK",
        "result": {
            "docs": [
                { "source": { "enriched": { "url": { "entities": [
                    { "text": "IBM", "type": "Company", "count": 2 },
                    { "text": "Paris", "type": "City", "count": "1" }
                ] } } } },
                { "source": { "enriched": { "url": { "entities": { "text": "IBM", "count": "4" } } } } }
            ]
        }
    }));

    let (status, body) = get(source.clone(), "/newsinsights?type=entities").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "name": "IBM", "value": 6 }]));
    let calls = source.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].fields.to_return_param(),
        "enriched.url.entities.entity.text,\
         enriched.url.entities.entity.type,\
         enriched.url.entities.entity.sentiment,\
         enriched.url.entities.entity.count"
    );
}

#[tokio::test]
async fn test_empty_docs_returns_empty_list() {
    let source = CannedSource::new(json!({ "status": "OK", "result": { "docs": [] } }));

    let (status, body) = get(source, "/newsinsights?type=keywords").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_index_page() {
    let app = build_router(AppState::new(
        CannedSource::new(concepts_response()),
        InsightsSettings::default(),
    ));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("/newsinsights"));
}
