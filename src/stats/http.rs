use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::core::{default_header_map, USER_AGENT};
use crate::stats::types::PageParams;
use crate::Result;

/// Per-request timeout for the reqwest client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Performs one page request against the stats endpoint.
///
/// Any transport error or non-2xx status comes back as `Err`; the fetcher
/// records it and moves on to the next team.
pub trait StatsClient {
    fn fetch_page(
        &self,
        url: &Url,
        params: &PageParams,
    ) -> impl Future<Output = Result<Value>> + Send;
}

impl<T: StatsClient + ?Sized> StatsClient for &T {
    fn fetch_page(
        &self,
        url: &Url,
        params: &PageParams,
    ) -> impl Future<Output = Result<Value>> + Send {
        (**self).fetch_page(url, params)
    }
}

/// reqwest-backed [`StatsClient`].
#[derive(Debug, Clone)]
pub struct HttpStatsClient {
    client: Client,
}

impl HttpStatsClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_header_map())
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

impl StatsClient for HttpStatsClient {
    async fn fetch_page(&self, url: &Url, params: &PageParams) -> Result<Value> {
        let res = self
            .client
            .get(url.clone())
            .query(&params.to_query())
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }
}
