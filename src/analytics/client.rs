//! HTTP client for the news analytics service.

use super::types::{NewsQuery, RawNewsResponse};
use crate::utils::config::{DEFAULT_REQUEST_TIMEOUT, NEWS_ENDPOINT_PATH};
use crate::utils::error::AnalyticsError;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use std::time::Duration;

/// Anything that can answer a news query
///
/// The server depends on this trait rather than on the HTTP client, so a
/// single outbound call per request is the whole contract.
#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    /// Run one news query and return the parsed JSON body
    async fn news(&self, query: &NewsQuery) -> Result<RawNewsResponse, AnalyticsError>;
}

/// Client for the AlchemyData News endpoint
pub struct AlchemyClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AlchemyClient {
    /// Create a new client
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, AnalyticsError> {
        Self::with_timeout(base_url, api_key, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a client with custom timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AnalyticsError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AnalyticsError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> String {
        news_endpoint(&self.base_url)
    }
}

#[async_trait]
impl AnalyticsSource for AlchemyClient {
    async fn news(&self, query: &NewsQuery) -> Result<RawNewsResponse, AnalyticsError> {
        let url = self.endpoint();

        info!(
            "Querying news analytics: start={}, end={}, maxResults={}",
            query.start, query.end, query.max_results
        );
        debug!("Requested fields: {}", query.fields.to_return_param());

        let response = self
            .client
            .get(&url)
            .query(&query.to_query_pairs(&self.api_key))
            .send()
            .await
            .map_err(AnalyticsError::from_request)?;

        let status = response.status();
        let body = response.text().await.map_err(AnalyticsError::from_request)?;

        // Error payloads from the service are JSON too, and carry their own
        // status field; only a non-JSON body is a transport-level failure.
        match serde_json::from_str::<RawNewsResponse>(&body) {
            Ok(value) => {
                debug!("Analytics responded with HTTP {}", status);
                Ok(value)
            }
            Err(e) => Err(AnalyticsError::InvalidResponse(format!(
                "HTTP {}: body is not JSON ({}): {}",
                status,
                e,
                truncate(&body, 200)
            ))),
        }
    }
}

/// Join the base URL and the news endpoint path
fn news_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), NEWS_ENDPOINT_PATH)
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
