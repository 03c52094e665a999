//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nba_stats_fetch::{
    cli::{Commands, NbaStats},
    commands::{export::handle_export, show::handle_show, teams::handle_teams},
    core::initialize_logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = NbaStats::parse();
    initialize_logging().context("failed to initialize logging")?;

    match app.command {
        Commands::Export { fetch, out_dir } => handle_export(fetch, out_dir)
            .await
            .context("export failed")?,

        Commands::Show { fetch, json } => handle_show(fetch, json)
            .await
            .context("show failed")?,

        Commands::Teams => handle_teams(),
    }

    Ok(())
}
