// src/error.rs
use thiserror::Error;

/// The one way a feed can fail: it could not be fetched or read.
/// Callers catch it per feed and carry on with the others.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("source unavailable: {url}: {reason}")]
    SourceUnavailable { url: String, reason: String },
}

impl FeedError {
    pub fn unavailable(url: &str, reason: impl ToString) -> Self {
        FeedError::SourceUnavailable { url: s!(url), reason: reason.to_string() }
    }
}
