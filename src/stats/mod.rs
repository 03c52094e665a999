//! Player stats retrieval: request types, HTTP client, fetch loop and export.

pub mod fetcher;
pub mod http;
pub mod observer;
pub mod table;
pub mod types;

pub use fetcher::{FetchSession, Fetcher};
pub use http::{HttpStatsClient, StatsClient};
pub use observer::{MemoryObserver, Observer, Signal, SignalLevel, TracingObserver};
pub use table::Table;
pub use types::{FailureEntry, FetchConfig, FieldValue, Page, PageParams, Record};
