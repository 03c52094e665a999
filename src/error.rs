//! Error types for the NBA stats fetcher

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("API URL not provided and {env_var} environment variable not set")]
    MissingApiUrl { env_var: String },

    #[error("Page size must be a positive integer")]
    InvalidPageSize,

    #[error("No teams configured")]
    NoTeams,

    #[error("Invalid team code: {code}")]
    InvalidTeamCode { code: String },

    #[error("Invalid season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("Unexpected payload: {reason}")]
    InvalidPayload { reason: String },
}
