//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while talking to the analytics service
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Analytics request timed out: {0}")]
    Timeout(String),

    #[error("Invalid analytics response: {0}")]
    InvalidResponse(String),
}

impl AnalyticsError {
    /// Classify a reqwest failure, keeping timeouts apart
    pub fn from_request(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AnalyticsError::Timeout(err.to_string())
        } else {
            AnalyticsError::RequestFailed(err)
        }
    }

    /// True when the request ran out of time
    pub fn is_timeout(&self) -> bool {
        match self {
            AnalyticsError::Timeout(_) => true,
            AnalyticsError::RequestFailed(e) => e.is_timeout(),
            AnalyticsError::InvalidResponse(_) => false,
        }
    }
}

/// The analytics response does not have the expected nested structure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Invalid response envelope: {0}")]
    InvalidEnvelope(String),

    #[error("Document {doc} has no value at {path}")]
    MissingPath { doc: usize, path: String },

    #[error("Document {doc} contains a malformed item: {reason}")]
    InvalidItem { doc: usize, reason: String },

    #[error("Document {doc} has an item without '{field}'")]
    MissingField { doc: usize, field: &'static str },

    #[error("Document {doc} has an invalid count: {reason}")]
    InvalidCount { doc: usize, reason: String },
}

/// Client input rejected before any upstream call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown analysis type '{0}' (expected entities, concepts or keywords)")]
    UnknownAnalysisType(String),

    #[error("Invalid time expression '{0}'")]
    InvalidTimeExpression(String),

    #[error("Time window is empty: start '{start}' is after end '{end}'")]
    EmptyWindow { start: String, end: String },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
