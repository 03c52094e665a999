//! Type-safe wrappers and enums for stats queries.

pub mod ids;
pub mod sort;
pub mod time;

pub use ids::{TeamCode, DEFAULT_TEAMS};
pub use sort::SortOrder;
pub use time::Season;
