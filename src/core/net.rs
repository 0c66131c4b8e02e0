// src/core/net.rs
//
// One GET per feed per load. No retry, no backoff; the timeout is opt-in.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::{consts::USER_AGENT, options::NetOptions};
use crate::error::FeedError;

/// Anything that can hand back a feed body for a URL.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, FeedError>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(net: &NetOptions) -> Result<Self, FeedError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = net.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| FeedError::unavailable("<client>", e))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedSource for HttpSource {
    /// A non-success status counts as unavailable; its body is not parsed.
    async fn fetch_text(&self, url: &str) -> Result<String, FeedError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::unavailable(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::unavailable(url, format!("HTTP {status}")));
        }

        resp.text().await.map_err(|e| FeedError::unavailable(url, e))
    }
}
