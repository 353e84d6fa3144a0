//! News Insights
//!
//! Queries a news analytics service for documents published in a time
//! window and turns the nested per-document annotations into a
//! frequency-ranked list of entities, concepts or keywords.
//!
//! ## Pipeline
//!
//! 1. [`shaper`] validates the analysis type and time window and picks the
//!    field paths to request.
//! 2. [`analytics`] makes the single upstream call.
//! 3. [`parser`] classifies the response and walks its documents.
//! 4. [`aggregator`] folds item records into totals, filters and ranks them.
//!
//! [`insights`] wires the steps together; [`server`] exposes them over HTTP
//! and [`commands`] from the CLI.

pub mod aggregator;
pub mod analytics;
pub mod commands;
pub mod insights;
pub mod output;
pub mod parser;
pub mod server;
pub mod shaper;
pub mod utils;
