//! HTTP utilities for stats API communication

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

/// User agent sent with every stats request.
pub const USER_AGENT: &str = concat!("nba-stats-fetch/", env!("CARGO_PKG_VERSION"));

/// Headers attached to every page request.
pub fn default_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}
