// src/loader.rs
//
// fetch → parse → classify, once per configured feed.
//
// Each feed is guarded on its own: a failed fetch is logged with the feed
// key, recorded in the load state, and the loop moves on. A load therefore
// always produces a LoadState, possibly with some sections missing.

use std::error::Error;

use futures_util::future::join_all;

use crate::{
    classify,
    config::options::{Feed, FeedConfig, LoadMode, NetOptions},
    core::{parse_records, FeedSource, HttpSource},
    error::FeedError,
    progress::Progress,
    store::{FeedOutcome, FeedReport, LoadState},
};

/// Load every feed in configuration order, one request at a time.
pub async fn load(
    feeds: &FeedConfig,
    source: &dyn FeedSource,
    progress: Option<&mut dyn Progress>,
) -> LoadState {
    load_with(feeds, source, LoadMode::Sequential, progress).await
}

pub async fn load_with(
    feeds: &FeedConfig,
    source: &dyn FeedSource,
    mode: LoadMode,
    mut progress: Option<&mut dyn Progress>,
) -> LoadState {
    logf!("Load: Begin feeds={} mode={:?}", feeds.len(), mode);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(feeds.len());
    }

    let mut state = LoadState::default();

    match mode {
        LoadMode::Sequential => {
            for feed in feeds.feeds() {
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Loading {}…", feed.key));
                }
                let body = source.fetch_text(&feed.url).await;
                absorb(feed, body, &mut state, progress.as_deref_mut());
            }
        }
        LoadMode::Concurrent => {
            let bodies = join_all(feeds.feeds().iter().map(|f| source.fetch_text(&f.url))).await;
            // Applied in configuration order so "last row wins" stays stable.
            for (feed, body) in feeds.feeds().iter().zip(bodies) {
                absorb(feed, body, &mut state, progress.as_deref_mut());
            }
        }
    }

    logf!("Load: Done loaded={} failed={}", state.loaded_count(), state.failed_count());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    state
}

/// Run a full HTTP load on a fresh current-thread runtime.
/// For callers outside any async context (GUI worker thread, CLI).
pub fn load_blocking(
    feeds: &FeedConfig,
    net: &NetOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<LoadState, Box<dyn Error>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let source = HttpSource::new(net)?;
    Ok(rt.block_on(load_with(feeds, &source, net.mode, progress)))
}

fn absorb(
    feed: &Feed,
    body: Result<String, FeedError>,
    state: &mut LoadState,
    progress: Option<&mut (dyn Progress + '_)>,
) {
    let outcome = match body {
        Ok(text) => {
            let rows = parse_records(&text);
            let n = rows.len();
            logd!("Load: {} → {} rows", feed.key, n);
            classify::apply(feed.key, rows, state);
            if let Some(p) = progress {
                p.item_done(feed.key, n);
            }
            FeedOutcome::Loaded { rows: n }
        }
        Err(e) => {
            logw!("Couldn't load {} sheet: {}", feed.key, e);
            if let Some(p) = progress {
                p.item_failed(feed.key, &e);
            }
            FeedOutcome::Failed(e)
        }
    };
    state.reports.push(FeedReport { key: feed.key, url: feed.url.clone(), outcome });
}
