//! Access to the external news analytics service.

pub mod client;
pub mod types;

pub use client::{AlchemyClient, AnalyticsSource};
pub use types::{NewsQuery, RawNewsResponse};
