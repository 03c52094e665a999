//! Core utilities for the NBA stats fetcher
//!
//! This module consolidates plumbing used across the application:
//! - `http`: default request headers and user agent
//! - `logging`: tracing subscriber setup

pub mod http;
pub mod logging;

// Re-export commonly used items for convenience
pub use http::{default_header_map, USER_AGENT};
pub use logging::initialize_logging;
