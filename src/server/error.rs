//! Mapping of pipeline failures to HTTP responses.

use crate::insights::InsightsError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Structured body for errors raised by this service
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
}

/// Handler error, rendered as an HTTP response
#[derive(Debug)]
pub struct ApiError(pub InsightsError);

impl From<InsightsError> for ApiError {
    fn from(err: InsightsError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            InsightsError::Input(_) => StatusCode::BAD_REQUEST,
            InsightsError::Upstream(_) => StatusCode::BAD_REQUEST,
            InsightsError::DataShape(_) => StatusCode::BAD_GATEWAY,
            InsightsError::Analytics(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            InsightsError::Analytics(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn kind(&self) -> &'static str {
        match &self.0 {
            InsightsError::Input(_) => "invalid_input",
            InsightsError::Upstream(_) => "upstream_error",
            InsightsError::DataShape(_) => "data_shape",
            InsightsError::Analytics(_) => "analytics_unavailable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let kind = self.kind();

        match self.0 {
            // Upstream payloads are forwarded unchanged
            InsightsError::Upstream(payload) => (status, Json(payload)).into_response(),
            other => (
                status,
                Json(ErrorResponse {
                    error: other.to_string(),
                    kind,
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{AnalyticsError, InputError, ShapeError};

    #[test]
    fn test_status_codes() {
        let input = ApiError(InsightsError::Input(InputError::UnknownAnalysisType("x".into())));
        assert_eq!(input.status_code(), StatusCode::BAD_REQUEST);

        let upstream = ApiError(InsightsError::Upstream(serde_json::json!({"status": "ERROR"})));
        assert_eq!(upstream.status_code(), StatusCode::BAD_REQUEST);

        let shape = ApiError(InsightsError::DataShape(ShapeError::InvalidEnvelope("x".into())));
        assert_eq!(shape.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_analytics_timeout_is_gateway_timeout() {
        let timeout = ApiError(InsightsError::Analytics(AnalyticsError::Timeout("30s".into())));
        assert_eq!(timeout.status_code(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(timeout.kind(), "analytics_unavailable");

        let invalid = ApiError(InsightsError::Analytics(AnalyticsError::InvalidResponse("x".into())));
        assert_eq!(invalid.status_code(), StatusCode::BAD_GATEWAY);
    }
}
