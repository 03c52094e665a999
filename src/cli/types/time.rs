//! Season type for stats queries.

use crate::error::{Result, StatsError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years.
///
/// The remote API identifies a season by the calendar year it ends in,
/// e.g. `2025` for the 2024-25 season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
