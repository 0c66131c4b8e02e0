// src/store.rs
//
// Per-load, in-memory data. One LoadState is built per load and handed by
// reference to renderers and the controller; a reload builds a new one.
// Nothing here touches disk.

use std::collections::HashMap;

use crate::core::{Record, Rich};
use crate::error::FeedError;
use crate::keys::{FeedKey, Section, SidebarSlot};

/// Section key → that feed's rows, verbatim and in feed order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionStore {
    sections: HashMap<Section, Vec<Record>>,
}

impl SectionStore {
    pub fn insert(&mut self, section: Section, rows: Vec<Record>) {
        self.sections.insert(section, rows);
    }

    /// Rows for a section; empty when the feed never loaded.
    pub fn rows(&self, section: Section) -> &[Record] {
        self.sections.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, section: Section) -> bool { self.sections.contains_key(&section) }
}

/// Sidebar slot → text (link already injected).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarTexts {
    slots: HashMap<SidebarSlot, Rich>,
}

impl SidebarTexts {
    /// Last write wins.
    pub fn set(&mut self, slot: SidebarSlot, text: Rich) {
        self.slots.insert(slot, text);
    }

    pub fn get(&self, slot: SidebarSlot) -> Option<&Rich> { self.slots.get(&slot) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedOutcome {
    Loaded { rows: usize },
    Failed(FeedError),
}

/// What happened to one feed during a load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedReport {
    pub key: FeedKey,
    pub url: String,
    pub outcome: FeedOutcome,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadState {
    pub sections: SectionStore,
    pub sidebar: SidebarTexts,
    pub glossary: Vec<GlossaryTerm>,
    pub reports: Vec<FeedReport>,
}

impl LoadState {
    pub fn failures(&self) -> impl Iterator<Item = &FeedReport> {
        self.reports.iter().filter(|r| matches!(r.outcome, FeedOutcome::Failed(_)))
    }

    pub fn failed_count(&self) -> usize { self.failures().count() }

    pub fn loaded_count(&self) -> usize { self.reports.len() - self.failed_count() }
}
