//! CLI argument definitions and parsing structures.

use super::types::{ids::TeamCode, sort::SortOrder, time::Season};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Endpoint and paging arguments shared between commands
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Stats endpoint URL (or set `NBA_STATS_API_URL` env var).
    #[clap(long, short)]
    pub url: Option<String>,

    /// Display name of the API, used in log lines and the export file name.
    #[clap(long, short = 'n', default_value = "stats")]
    pub api_name: String,

    /// Season year (e.g. 2025).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Field to sort players by.
    #[clap(long, default_value = "PlayerName")]
    pub sort_by: String,

    /// Sort direction.
    #[clap(long, value_enum, default_value_t = SortOrder::Asc)]
    pub order: SortOrder,

    /// Records requested per page.
    #[clap(long, default_value_t = 50)]
    pub page_size: u32,

    /// Delay between requests, in milliseconds.
    #[clap(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Only fetch these teams (repeatable): `-t BOS -t LAL`.
    #[clap(long = "team", short = 't')]
    pub teams: Option<Vec<TeamCode>>,
}

#[derive(Debug, Parser)]
#[clap(name = "nba-stats", about = "Paginated NBA player stats fetcher")]
pub struct NbaStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch every team and write `{api_name}_{season}.csv`.
    Export {
        #[clap(flatten)]
        fetch: FetchArgs,

        /// Directory to write the CSV into (defaults to the working directory).
        #[clap(long)]
        out_dir: Option<PathBuf>,
    },

    /// Fetch every team and print the collected table.
    Show {
        #[clap(flatten)]
        fetch: FetchArgs,

        /// Output the table as JSON instead of a summary.
        #[clap(long)]
        json: bool,
    },

    /// List the team codes fetched by default.
    Teams,
}
