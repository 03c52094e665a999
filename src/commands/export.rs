//! Export command implementation

use std::path::{Path, PathBuf};

use crate::{
    cli::FetchArgs,
    stats::{Fetcher, HttpStatsClient, Observer, StatsClient, TracingObserver},
    Result,
};

use super::build_config;

/// Handle the export command
pub async fn handle_export(fetch: FetchArgs, out_dir: Option<PathBuf>) -> Result<()> {
    let config = build_config(fetch)?;
    let mut fetcher = Fetcher::new(config, HttpStatsClient::new()?, TracingObserver);

    match run_export(&mut fetcher, out_dir.as_deref()).await? {
        Some(path) => println!(
            "✓ {} records written to {}",
            fetcher.records().len(),
            path.display()
        ),
        None => println!("No records fetched; nothing written"),
    }

    if !fetcher.failures().is_empty() {
        println!("⚠ {} page request(s) failed", fetcher.failures().len());
    }

    Ok(())
}

/// Fetch every team, report failures, then write the CSV.
///
/// Writes into `out_dir` when given, otherwise the working directory.
pub async fn run_export<C: StatsClient, O: Observer>(
    fetcher: &mut Fetcher<C, O>,
    out_dir: Option<&Path>,
) -> Result<Option<PathBuf>> {
    fetcher.fetch_all().await;
    fetcher.report_failures();

    match out_dir {
        Some(dir) => fetcher.export_table_to(dir),
        None => fetcher.export_table(),
    }
}
