//! Paginated, team-by-team player stats retrieval.
//!
//! [`Fetcher`] walks the configured team list in order and pages through each
//! team until it sees an empty or short page. A failed page is recorded as a
//! [`FailureEntry`] and ends that team only; the run always continues with the
//! next team.
//!
//! Requests are strictly sequential. The configured delay is awaited after
//! every full page and after every team.

use std::fs::File;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::sleep;

use crate::cli::types::TeamCode;
use crate::stats::{
    http::StatsClient,
    observer::Observer,
    table::Table,
    types::{parse_page, FailureEntry, FetchConfig, Record},
};
use crate::Result;


/// Records and failures accumulated by one fetch run.
#[derive(Debug, Clone, Default)]
pub struct FetchSession {
    records: Vec<Record>,
    failures: Vec<FailureEntry>,
    fetched: bool,
}

impl FetchSession {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn failures(&self) -> &[FailureEntry] {
        &self.failures
    }

    /// True once a full `fetch_all` has completed, even if it found nothing.
    pub fn has_fetched(&self) -> bool {
        self.fetched
    }

    fn reset(&mut self) {
        self.records.clear();
        self.failures.clear();
        self.fetched = false;
    }
}

pub struct Fetcher<C, O> {
    config: FetchConfig,
    client: C,
    observer: O,
    session: FetchSession,
}

impl<C: StatsClient, O: Observer> Fetcher<C, O> {
    pub fn new(config: FetchConfig, client: C, observer: O) -> Self {
        Self {
            config,
            client,
            observer,
            session: FetchSession::default(),
        }
    }

    pub fn records(&self) -> &[Record] {
        self.session.records()
    }

    pub fn failures(&self) -> &[FailureEntry] {
        self.session.failures()
    }

    pub fn has_fetched(&self) -> bool {
        self.session.has_fetched()
    }

    /// Page through one team until an empty or short page.
    ///
    /// A failed page is appended to the session's failures and ends the team;
    /// the records from earlier pages are still returned.
    pub async fn fetch_team(&mut self, team: &TeamCode) -> Vec<Record> {
        let page_size = self.config.page_size() as usize;
        let mut team_records = Vec::new();
        let mut page = 1;

        loop {
            let params = self.config.page_params(team, page);

            let fetched_page = match self
                .client
                .fetch_page(self.config.api_url(), &params)
                .await
                .and_then(parse_page)
            {
                Ok(fetched_page) => fetched_page,
                Err(e) => {
                    let error = e.to_string();
                    self.observer.error(&format!(
                        "Failed to fetch data for {}, page {}: {}",
                        team, page, error
                    ));
                    self.session.failures.push(FailureEntry {
                        team: team.clone(),
                        page,
                        error,
                    });
                    break;
                }
            };

            if fetched_page.is_empty() {
                break;
            }
            if fetched_page.skipped > 0 {
                self.observer.warning(&format!(
                    "Skipped {} non-object entries for {}, page {}",
                    fetched_page.skipped, team, page
                ));
            }

            let short_page = fetched_page.size < page_size;
            team_records.extend(fetched_page.records);
            if short_page {
                break;
            }

            page += 1;
            sleep(self.config.delay()).await;
        }

        team_records
    }

    /// Fetch every configured team in order into a fresh session.
    pub async fn fetch_all(&mut self) {
        self.observer.info(&format!(
            "Fetching player stats from {}...",
            self.config.api_name()
        ));
        self.session.reset();

        let teams = self.config.teams().to_vec();
        let total = teams.len();
        let progress = team_progress_bar(total);
        for (i, team) in teams.iter().enumerate() {
            progress.set_message(team.to_string());
            let team_records = self.fetch_team(team).await;
            progress.suspend(|| {
                if team_records.is_empty() {
                    self.observer
                        .warning(&format!("No data returned for team: {}", team));
                }
                self.observer.info(&format!(
                    "[{}/{}] {}: {} records",
                    i + 1,
                    total,
                    team,
                    team_records.len()
                ));
            });
            progress.inc(1);
            self.session.records.extend(team_records);
            sleep(self.config.delay()).await;
        }
        progress.finish_and_clear();

        self.session.fetched = true;
    }

    /// Write the session to `{api_name}_{season}.csv` in the working directory.
    pub fn export_table(&self) -> Result<Option<PathBuf>> {
        self.export_table_to(Path::new("."))
    }

    /// Write the session to `{api_name}_{season}.csv` under `dir`.
    ///
    /// Returns `Ok(None)` without touching the filesystem when there is
    /// nothing to write. An existing file is overwritten.
    pub fn export_table_to(&self, dir: &Path) -> Result<Option<PathBuf>> {
        if self.session.records.is_empty() {
            self.observer.warning("No data to save.");
            return Ok(None);
        }

        let path = dir.join(self.config.export_file_name());
        let file = File::create(&path)?;
        Table::from_records(&self.session.records).write_csv(file)?;

        self.observer
            .info(&format!("Data saved to {}", path.display()));
        Ok(Some(path))
    }

    /// Materialize the session, running `fetch_all` first if it never ran.
    pub async fn as_table(&mut self) -> Table {
        if self.session.fetched {
            self.observer
                .info(&format!("Data fetched for {}.", self.config.api_name()));
        } else {
            self.fetch_all().await;
        }

        self.report_failures();
        Table::from_records(&self.session.records)
    }

    /// Emit one line per recorded failure, or a note that there were none.
    pub fn report_failures(&self) {
        if self.session.failures.is_empty() {
            self.observer.info("No failed requests.");
            return;
        }

        self.observer.error("Failed Requests Summary:");
        for failure in &self.session.failures {
            self.observer.error(&format!(
                " - Team: {}, Page: {}, Error: {}",
                failure.team, failure.page, failure.error
            ));
        }
    }
}

/// Bar over the team list, drawn on stderr only when it is a terminal.
fn team_progress_bar(total: usize) -> ProgressBar {
    let style =
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
    let progress = ProgressBar::new(total as u64);
    progress.set_style(style);
    progress
}
