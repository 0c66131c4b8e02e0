// src/render/mod.rs
//! # Views
//!
//! Renderers turn the per-load data into small view values; front ends
//! (egui in `gui`, HTML in `render::html`) only draw them.
//!
//! Every render call returns a complete replacement for its container.
//! There is no diffing: the controller swaps the old view out.

pub mod html;
pub mod main_panel;
pub mod sidebar;

use crate::config::consts::{CHART_HEIGHT, NO_CONTENT, NO_GLOSSARY};
use crate::core::Rich;

pub use main_panel::{render_glossary, render_section, render_unknown};
pub use sidebar::{render_sidebar, render_sidebar_unknown};

/* ---------------- Sidebar ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarView {
    /// One paragraph per line of the slot's text.
    Paragraphs(Vec<Rich>),
    NoContent,
}

impl SidebarView {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SidebarView::NoContent => Some(NO_CONTENT),
            SidebarView::Paragraphs(_) => None,
        }
    }
}

/* ---------------- Main panel ---------------- */

/// Container layout of the main panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Responsive card grid.
    Grid,
    /// Vertical list (glossary).
    List,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardWidth {
    Full,
    Half,
    Third,
    #[default]
    Auto,
}

impl CardWidth {
    /// Exact, case-sensitive match on the `Display` cell.
    pub fn from_display(display: &str) -> Self {
        match display {
            "full" => CardWidth::Full,
            "half" => CardWidth::Half,
            "third" => CardWidth::Third,
            _ => CardWidth::Auto,
        }
    }

    /// CSS modifier class, if any.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            CardWidth::Full => Some("full-width"),
            CardWidth::Half => Some("half-width"),
            CardWidth::Third => Some("third-width"),
            CardWidth::Auto => None,
        }
    }
}

/// Embedded chart frame. Size and chrome are fixed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartFrame {
    pub src: String,
}

impl ChartFrame {
    pub const WIDTH: &'static str = "100%";
    pub const HEIGHT: u32 = CHART_HEIGHT;
    pub const SCROLLING: &'static str = "no";
    pub const BORDER: u32 = 0;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub width: CardWidth,
    pub image: Option<String>,
    pub title: String,
    pub description: Rich,
    pub source: Option<String>,
    pub tags: String,
    pub charts: Vec<ChartFrame>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub term: String,
    pub definition: String,
    /// Presentation only; toggled by clicking the entry.
    pub expanded: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MainBody {
    Cards(Vec<Card>),
    Glossary(Vec<GlossaryEntry>),
    Message(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MainView {
    pub layout: Layout,
    pub body: MainBody,
}

impl MainView {
    pub fn cards(&self) -> &[Card] {
        match &self.body {
            MainBody::Cards(c) => c,
            _ => &[],
        }
    }

    pub fn glossary(&self) -> &[GlossaryEntry] {
        match &self.body {
            MainBody::Glossary(g) => g,
            _ => &[],
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self.body {
            MainBody::Message(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_no_content(&self) -> bool { self.message() == Some(NO_CONTENT) }
    pub fn is_no_glossary(&self) -> bool { self.message() == Some(NO_GLOSSARY) }

    /// Flip one glossary entry between collapsed and expanded.
    /// Out-of-range indices and non-glossary views are ignored.
    pub fn toggle_entry(&mut self, idx: usize) -> bool {
        if let MainBody::Glossary(entries) = &mut self.body {
            if let Some(e) = entries.get_mut(idx) {
                e.expanded = !e.expanded;
                return true;
            }
        }
        false
    }
}
