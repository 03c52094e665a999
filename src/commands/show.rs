//! Show command implementation

use crate::{
    cli::FetchArgs,
    stats::{Fetcher, HttpStatsClient, Table, TracingObserver},
    Result,
};

use super::build_config;

/// Handle the show command
pub async fn handle_show(fetch: FetchArgs, as_json: bool) -> Result<()> {
    let config = build_config(fetch)?;
    let mut fetcher = Fetcher::new(config, HttpStatsClient::new()?, TracingObserver);

    let table = fetcher.as_table().await;
    println!("{}", render_table(&table, as_json)?);

    Ok(())
}

/// Pretty JSON rows, or a short summary of the table shape.
pub fn render_table(table: &Table, as_json: bool) -> Result<String> {
    if as_json {
        return Ok(serde_json::to_string_pretty(&table.to_json())?);
    }

    let mut out = format!(
        "{} records, {} columns",
        table.len(),
        table.columns().len()
    );
    if !table.columns().is_empty() {
        out.push_str("\nColumns: ");
        out.push_str(&table.columns().join(", "));
    }
    Ok(out)
}
