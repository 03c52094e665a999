//! NBA Player Stats Fetcher Library
//!
//! Pulls season-level player statistics from a paginated stats API, one team
//! at a time, and exports them as a CSV table.
//!
//! ## Features
//!
//! - **Paginated Retrieval**: Pages through each team until an empty or short page
//! - **Failure Tracking**: Failed pages are recorded per team and page; the run keeps going
//! - **Rate Limiting**: A fixed delay between every request
//! - **Tabular Export**: Union of all record fields written as `{api_name}_{season}.csv`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_stats_fetch::{
//!     stats::{Fetcher, HttpStatsClient, TracingObserver},
//!     FetchConfig, Season,
//! };
//!
//! # async fn example() -> nba_stats_fetch::Result<()> {
//! let config = FetchConfig::builder("stats", "https://api.example.com/players")
//!     .season(Season::new(2025))
//!     .build()?;
//!
//! let mut fetcher = Fetcher::new(config, HttpStatsClient::new()?, TracingObserver);
//! fetcher.fetch_all().await;
//! fetcher.report_failures();
//! fetcher.export_table()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the endpoint to avoid passing it in every command:
//! ```bash
//! export NBA_STATS_API_URL=https://api.example.com/players
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{Season, SortOrder, TeamCode};
pub use error::{Result, StatsError};
pub use stats::types::{FailureEntry, FetchConfig, Record};

pub const API_URL_ENV_VAR: &str = "NBA_STATS_API_URL";
