//! Configuration and constants for the service.

use std::time::Duration;

/// Default timeout for analytics requests
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default analytics service base URL
pub const DEFAULT_ANALYTICS_URL: &str = "https://gateway-a.watsonplatform.net";

/// Path of the news query endpoint, relative to the base URL
pub const NEWS_ENDPOINT_PATH: &str = "/calls/data/GetNews";

/// Default HTTP bind address
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

// Query defaults applied when a parameter is omitted
pub const DEFAULT_START: &str = "now-1d";
pub const DEFAULT_END: &str = "now";
pub const DEFAULT_ANALYSIS_TYPE: &str = "concepts";

/// Number of documents requested per query
pub const DEFAULT_MAX_RESULTS: u32 = 100;
pub const MAX_RESULTS_LIMIT: u32 = 1000;

/// Entries must be strictly above this value to be reported
pub const DEFAULT_MIN_VALUE: u64 = 2;

/// Settings shared by every request, read-only once the server is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightsSettings {
    /// Documents requested from the analytics service
    pub max_results: u32,

    /// Exclusive lower bound for aggregated values
    pub min_value: u64,
}

impl Default for InsightsSettings {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_value: DEFAULT_MIN_VALUE,
        }
    }
}

impl InsightsSettings {
    /// Check the settings are usable
    pub fn validate(&self) -> Result<(), String> {
        if self.max_results == 0 {
            return Err("max_results must be greater than 0".to_string());
        }
        if self.max_results > MAX_RESULTS_LIMIT {
            return Err(format!(
                "max_results is too large (max {})",
                MAX_RESULTS_LIMIT
            ));
        }
        Ok(())
    }
}
