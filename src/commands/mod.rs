//! Command implementations for the NBA stats CLI

pub mod export;
pub mod show;
pub mod teams;

use std::time::Duration;

use crate::{
    cli::{types::TeamCode, FetchArgs},
    FetchConfig, Result, StatsError, API_URL_ENV_VAR,
};

/// Resolve the API URL from option or environment variable
pub fn resolve_api_url(url: Option<String>) -> Result<String> {
    url.or_else(|| {
        std::env::var(API_URL_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
    })
    .ok_or_else(|| StatsError::MissingApiUrl {
        env_var: API_URL_ENV_VAR.to_string(),
    })
}

/// Turn parsed CLI arguments into a validated [`FetchConfig`].
pub fn build_config(args: FetchArgs) -> Result<FetchConfig> {
    let url = resolve_api_url(args.url)?;
    let teams = args.teams.unwrap_or_else(TeamCode::all);

    FetchConfig::builder(args.api_name, url)
        .season(args.season)
        .sort_by(args.sort_by)
        .order(args.order)
        .page_size(args.page_size)
        .delay(Duration::from_millis(args.delay_ms))
        .teams(teams)
        .build()
}
