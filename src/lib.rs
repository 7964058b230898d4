//! # Review Lag
//!
//! Measures how long newly submitted Modrinth mods wait for approval.
//!
//! A pass samples the newest mods, looks up their full records, and reports
//! the average delay between submission (`queued`) and approval
//! (`approved`) along with the per-project delays.
//!
//! ## Modules
//!
//! - [`modrinth`]: HTTP client for the Modrinth API
//! - [`sample`]: Sample collection and approval delay aggregation
//! - [`format`]: Human-readable durations
//! - [`render`]: Themed text, JSON and HTML output
//! - [`report`]: Runs a pass and handles its failure
//! - [`server`]: Report page server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use review_lag::{ModrinthClient, ModrinthConfig, SampleAggregator, SampleSize};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(ModrinthClient::new(ModrinthConfig::default())?);
//!     let aggregator = SampleAggregator::new(client);
//!
//!     let projects = aggregator.collect(SampleSize::DEFAULT).await?;
//!     let average = review_lag::average_delay(&projects);
//!
//!     println!("Average review time: {}", review_lag::format_duration(average));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod format;
pub mod modrinth;
pub mod render;
pub mod report;
pub mod sample;
pub mod server;

pub use config::{Config, ConfigError, LoggingConfig};
pub use format::format_duration;
pub use modrinth::{ModrinthClient, ModrinthConfig, ModrinthError, ModrinthResult, Transport};
pub use render::{OutputFormat, Presenter, ReportView, Theme};
pub use report::run_pass;
pub use sample::{average_delay, EnrichedProject, SampleAggregator, SampleSize};
pub use server::{build_router, serve, AppState};
