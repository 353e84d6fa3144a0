//! HTTP boundary for the news insights pipeline.
//!
//! ## Routes
//! - `GET /` - landing page
//! - `GET /newsinsights?start&end&type` - ranked name/value list
//!
//! Each request is independent: one upstream call, no shared mutable state.

pub mod error;
pub mod handlers;

use crate::analytics::AnalyticsSource;
use crate::utils::config::InsightsSettings;
use axum::routing::get;
use axum::Router;
use handlers::{handle_index, handle_news_insights};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;

pub use error::{ApiError, ErrorResponse};

/// Process-wide state, read-only at request time
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn AnalyticsSource>,
    pub settings: InsightsSettings,
}

impl AppState {
    pub fn new(source: Arc<dyn AnalyticsSource>, settings: InsightsSettings) -> Self {
        Self { source, settings }
    }
}

/// Create the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/newsinsights", get(handle_news_insights))
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await
}
