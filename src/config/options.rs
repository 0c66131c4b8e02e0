// src/config/options.rs
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::keys::FeedKey;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub feeds: FeedConfig,
    pub net: NetOptions,
    pub export: ExportOptions,
}

/* ---------------- Feeds ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feed {
    pub key: FeedKey,
    pub url: String,
}

/// Ordered feed list; load order is list order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedConfig {
    feeds: Vec<Feed>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        let feeds = DEFAULT_SHEETS
            .iter()
            .filter_map(|(key, gid)| {
                FeedKey::parse(key).map(|key| Feed { key, url: sheet_url(gid) })
            })
            .collect();
        Self { feeds }
    }
}

impl FeedConfig {
    pub fn new(feeds: Vec<Feed>) -> Self { Self { feeds } }

    pub fn feeds(&self) -> &[Feed] { &self.feeds }
    pub fn len(&self) -> usize { self.feeds.len() }
    pub fn is_empty(&self) -> bool { self.feeds.is_empty() }

    /// Parse `key = url` lines. Blank lines and `#` comments are ignored.
    /// A repeated key replaces the earlier URL but keeps its position.
    pub fn parse(text: &str) -> Result<Self, Box<dyn Error>> {
        let mut feeds: Vec<Feed> = Vec::new();
        for (n, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue; }

            let (k, v) = line
                .split_once('=')
                .ok_or_else(|| format!("line {}: expected `key = url`", n + 1))?;
            let (k, url) = (k.trim(), v.trim());
            let key = FeedKey::parse(k)
                .ok_or_else(|| format!("line {}: unknown feed key `{}`", n + 1, k))?;
            if url.is_empty() {
                return Err(format!("line {}: missing url for `{}`", n + 1, k).into());
            }

            match feeds.iter_mut().find(|f| f.key == key) {
                Some(f) => f.url = s!(url),
                None => feeds.push(Feed { key, url: s!(url) }),
            }
        }
        Ok(Self { feeds })
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        Self::parse(&text).map_err(|e| format!("{}: {}", path.display(), e).into())
    }

    /// Feeds file if it exists, otherwise the published defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, Box<dyn Error>> {
        if path.exists() { Self::load(path) } else { Ok(Self::default()) }
    }
}

/* ---------------- Network ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadMode {
    /// One feed at a time, in configuration order.
    #[default]
    Sequential,
    /// All fetches in flight at once; results still applied in order.
    Concurrent,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetOptions {
    pub timeout_secs: Option<u64>,
    pub mode: LoadMode,
}

/* ---------------- Export ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportType {
    /// One page for the chosen selection.
    SinglePage,
    /// Every sidebar × main combination plus index.html.
    Site,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub export_type: ExportType,
    out: Option<PathBuf>,
    pub sidebar_key: Option<String>,
    pub main_key: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            export_type: ExportType::SinglePage,
            out: None,
            sidebar_key: None,
            main_key: None,
        }
    }
}

impl ExportOptions {
    pub fn set_out(&mut self, p: impl Into<PathBuf>) { self.out = Some(p.into()); }

    /// File for a single page, directory for a site.
    pub fn out_path(&self) -> PathBuf {
        if let Some(p) = &self.out {
            return p.clone();
        }
        match self.export_type {
            ExportType::SinglePage => Path::new(DEFAULT_OUT_DIR).join(DEFAULT_PAGE_FILE),
            ExportType::Site => PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}
