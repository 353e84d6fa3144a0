//! News Insights CLI
//!
//! Serves frequency-ranked entities, concepts and keywords from a news
//! analytics service, or runs a single query from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use news_insights::commands::{execute_query, execute_serve, execute_show, QueryArgs, ServeArgs};
use news_insights::insights::QueryParams;
use news_insights::shaper::shape_fields;
use news_insights::utils::config::{
    InsightsSettings, DEFAULT_ANALYSIS_TYPE, DEFAULT_ANALYTICS_URL, DEFAULT_BIND, DEFAULT_END,
    DEFAULT_MAX_RESULTS, DEFAULT_MIN_VALUE, DEFAULT_START,
};

/// News Insights - ranked named items from recent news
#[derive(Parser, Debug)]
#[command(name = "news-insights")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Connection to the analytics service
#[derive(clap::Args, Debug)]
struct AnalyticsOpts {
    /// Analytics service API key
    #[arg(long, env = "ALCHEMY_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Analytics service base URL
    #[arg(long, env = "ALCHEMY_URL", default_value = DEFAULT_ANALYTICS_URL)]
    url: String,

    /// Documents requested per query
    #[arg(long, env = "NEWS_INSIGHTS_MAX_RESULTS", default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: u32,

    /// Only report entries whose value is greater than this
    #[arg(long, env = "NEWS_INSIGHTS_MIN_VALUE", default_value_t = DEFAULT_MIN_VALUE)]
    min_value: u64,
}

impl AnalyticsOpts {
    fn settings(&self) -> InsightsSettings {
        InsightsSettings {
            max_results: self.max_results,
            min_value: self.min_value,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "NEWS_INSIGHTS_BIND", default_value = DEFAULT_BIND)]
        bind: String,

        #[command(flatten)]
        analytics: AnalyticsOpts,
    },

    /// Run a single query and print the ranked result
    Query {
        /// Window start (e.g. now-1d, now-12h, or a Unix timestamp)
        #[arg(short, long, default_value = DEFAULT_START)]
        start: String,

        /// Window end
        #[arg(short, long, default_value = DEFAULT_END)]
        end: String,

        /// One of entities, concepts, keywords
        #[arg(short = 't', long = "type", default_value = DEFAULT_ANALYSIS_TYPE)]
        kind: String,

        /// Write JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Rows in the text summary
        #[arg(long, default_value = "20")]
        top: usize,

        #[command(flatten)]
        analytics: AnalyticsOpts,
    },

    /// Print a summary of a saved insights JSON file
    Show {
        /// Path to insights JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Rows in the text summary
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Show the field paths requested for an analysis type
    Fields {
        /// One of entities, concepts, keywords
        #[arg(short = 't', long = "type", default_value = DEFAULT_ANALYSIS_TYPE)]
        kind: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Serve { bind, analytics } => {
            let args = ServeArgs {
                bind,
                settings: analytics.settings(),
                analytics_url: analytics.url,
                api_key: analytics.api_key,
            };

            execute_serve(args).await?;
        }

        Commands::Query {
            start,
            end,
            kind,
            output,
            summary,
            top,
            analytics,
        } => {
            let args = QueryArgs {
                settings: analytics.settings(),
                analytics_url: analytics.url,
                api_key: analytics.api_key,
                params: QueryParams {
                    start: Some(start),
                    end: Some(end),
                    kind: Some(kind),
                },
                output,
                print_summary: summary,
                top,
            };

            execute_query(args).await?;
        }

        Commands::Show { file, top } => {
            execute_show(&file, top)?;
        }

        Commands::Fields { kind } => {
            display_fields(&kind)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Print the field paths for an analysis type
///
/// **Private** - internal command implementation
fn display_fields(kind: &str) -> Result<()> {
    let Some(fields) = shape_fields(kind) else {
        anyhow::bail!(
            "Unknown analysis type '{}' (expected entities, concepts or keywords)",
            kind
        );
    };

    println!("Fields requested for {}:", kind);
    for path in fields.paths() {
        println!("  {}", path);
    }
    println!();
    println!("return={}", fields.to_return_param());

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("News Insights v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Ranked entities, concepts and keywords from a news analytics service.");
}
