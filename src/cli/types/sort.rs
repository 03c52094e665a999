//! Sort direction for paginated stats queries.

use std::fmt;

/// Sort direction passed to the API as the `ascending` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortOrder {
    /// Smallest values first
    #[default]
    Asc,
    /// Largest values first
    Desc,
}

impl SortOrder {
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortOrder::Asc)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        };
        write!(f, "{}", s)
    }
}
