// src/progress.rs
use crate::error::FeedError;
use crate::keys::FeedKey;

/// Lightweight progress reporting for a feed load.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of configured feeds.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One feed fetched and classified.
    fn item_done(&mut self, _key: FeedKey, _rows: usize) {}

    /// One feed skipped because its source was unavailable.
    fn item_failed(&mut self, _key: FeedKey, _err: &FeedError) {}

    /// Called at the end, whatever the outcome.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
