//! Team code type and the default league team list.

use crate::error::{Result, StatsError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Codes of every team in the league, in the order teams are fetched.
pub const DEFAULT_TEAMS: [&str; 30] = [
    "ATL", "BOS", "BRK", "CHI", "CHO", "CLE", "DAL", "DEN", "DET", "GSW", "HOU", "IND", "LAC",
    "LAL", "MEM", "MIA", "MIL", "MIN", "NOP", "NYK", "OKC", "ORL", "PHI", "PHO", "POR", "SAC",
    "SAS", "TOR", "UTA", "WAS",
];

/// Type-safe wrapper for a three or four letter team code.
///
/// Codes are normalized to uppercase on parse.
///
/// # Examples
///
/// ```rust
/// use nba_stats_fetch::TeamCode;
///
/// let team: TeamCode = "bos".parse().unwrap();
/// assert_eq!(team.as_str(), "BOS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TeamCode(String);

impl TeamCode {
    /// Get the underlying code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The full league team list, in fetch order.
    pub fn all() -> Vec<TeamCode> {
        DEFAULT_TEAMS
            .iter()
            .map(|code| TeamCode(code.to_string()))
            .collect()
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamCode {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        let valid_len = (3..=4).contains(&code.len());
        if !valid_len || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(StatsError::InvalidTeamCode {
                code: s.to_string(),
            });
        }
        Ok(Self(code.to_ascii_uppercase()))
    }
}
