//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod query;
pub mod serve;
pub mod show;

// Re-export main command functions
pub use query::{execute_query, QueryArgs};
pub use serve::{execute_serve, ServeArgs};
pub use show::execute_show;

/// Check the analytics connection settings shared by every command
pub fn validate_connection(analytics_url: &str, api_key: &str) -> anyhow::Result<()> {
    if api_key.trim().is_empty() {
        anyhow::bail!("Analytics API key cannot be empty");
    }

    if !analytics_url.starts_with("http://") && !analytics_url.starts_with("https://") {
        anyhow::bail!("Analytics URL must start with http:// or https://");
    }

    Ok(())
}
