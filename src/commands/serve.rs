//! Serve command implementation.
//!
//! Builds the analytics client and runs the HTTP server until stopped.

use super::validate_connection;
use crate::analytics::AlchemyClient;
use crate::server::{serve, AppState};
use crate::utils::config::InsightsSettings;
use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;

/// Arguments for the serve command
#[derive(Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind the HTTP server to
    pub bind: String,

    /// Analytics service base URL
    pub analytics_url: String,

    /// Analytics service API key
    pub api_key: String,

    /// Per-request settings
    pub settings: InsightsSettings,
}

/// Validate serve arguments
///
/// **Public** - can be called before execute_serve for early validation
pub fn validate_args(args: &ServeArgs) -> Result<SocketAddr> {
    validate_connection(&args.analytics_url, &args.api_key)?;

    args.settings
        .validate()
        .map_err(|e| anyhow::anyhow!(e))?;

    args.bind
        .parse::<SocketAddr>()
        .with_context(|| format!("Invalid bind address '{}'", args.bind))
}

/// Execute the serve command
pub async fn execute_serve(args: ServeArgs) -> Result<()> {
    let addr = validate_args(&args)?;

    let client = AlchemyClient::new(&args.analytics_url, &args.api_key)
        .context("Failed to create analytics client")?;
    info!("Analytics endpoint: {}", client.endpoint());
    info!(
        "Settings: maxResults={}, min value > {}",
        args.settings.max_results, args.settings.min_value
    );

    let state = AppState::new(Arc::new(client), args.settings);

    serve(addr, state)
        .await
        .with_context(|| format!("HTTP server on {} failed", addr))
}
