//! Query command implementation.
//!
//! The query command runs the same pipeline as the HTTP endpoint once:
//! 1. Validates the parameters
//! 2. Queries the analytics service
//! 3. Aggregates and ranks the response
//! 4. Prints or writes the result

use super::validate_connection;
use crate::analytics::AlchemyClient;
use crate::insights::{run_insights, InsightsError, InsightsRequest, QueryParams};
use crate::output::{format_summary, insights_to_string, write_insights};
use crate::utils::config::InsightsSettings;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the query command
#[derive(Debug, Clone)]
pub struct QueryArgs {
    /// Analytics service base URL
    pub analytics_url: String,

    /// Analytics service API key
    pub api_key: String,

    /// Raw query parameters (defaults applied during validation)
    pub params: QueryParams,

    /// Per-request settings
    pub settings: InsightsSettings,

    /// Write JSON here instead of stdout
    pub output: Option<PathBuf>,

    /// Print a ranked text table
    pub print_summary: bool,

    /// Rows in the text table
    pub top: usize,
}

/// Execute the query command
pub async fn execute_query(args: QueryArgs) -> Result<()> {
    let start_time = Instant::now();

    validate_connection(&args.analytics_url, &args.api_key)?;
    args.settings.validate().map_err(|e| anyhow::anyhow!(e))?;

    let request = InsightsRequest::from_params(&args.params).context("Invalid query parameters")?;
    info!(
        "Querying {} from {} to {}",
        request.kind, request.window.start, request.window.end
    );

    let client = AlchemyClient::new(&args.analytics_url, &args.api_key)
        .context("Failed to create analytics client")?;

    let entries = match run_insights(&client, &request, &args.settings).await {
        Ok(entries) => entries,
        Err(InsightsError::Upstream(payload)) => {
            anyhow::bail!(
                "Analytics service returned an error: {}",
                serde_json::to_string(&payload).unwrap_or_default()
            );
        }
        Err(e) => return Err(e).context("News insights query failed"),
    };

    debug!("Top entries: {:?}", entries.iter().take(3).collect::<Vec<_>>());

    match &args.output {
        Some(path) => {
            write_insights(&entries, path).context("Failed to write insights JSON")?;
            info!("✓ Insights written to: {}", path.display());
        }
        None if !args.print_summary => {
            println!("{}", insights_to_string(&entries)?);
        }
        None => {}
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("NEWS INSIGHTS: {}", request.kind.as_str().to_uppercase());
        println!("{}", "=".repeat(60));
        println!("Window: {} .. {}", request.window.start, request.window.end);
        println!("\n{}", format_summary(&entries, args.top));
        println!("{}", "=".repeat(60));
    }

    info!("Query completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}
