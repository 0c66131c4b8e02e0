// src/render/sidebar.rs
use super::SidebarView;
use crate::keys::SidebarSlot;
use crate::store::LoadState;

/// Slot text as paragraphs, one per line. Empty or missing text → NoContent.
pub fn render_sidebar(state: &LoadState, slot: SidebarSlot) -> SidebarView {
    match state.sidebar.get(slot) {
        Some(text) if !text.is_empty() => SidebarView::Paragraphs(text.lines()),
        _ => SidebarView::NoContent,
    }
}

/// Button key outside the known slots.
pub fn render_sidebar_unknown(key: &str) -> SidebarView {
    logw!("Sidebar: Unknown key `{}`", key);
    SidebarView::NoContent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{inject_link, Rich};

    #[test]
    fn lines_become_paragraphs() {
        let mut state = LoadState::default();
        state.sidebar.set(SidebarSlot::About, Rich::raw("one\ntwo\r\nthree"));
        match render_sidebar(&state, SidebarSlot::About) {
            SidebarView::Paragraphs(ps) => {
                let plain: Vec<String> = ps.iter().map(|p| p.plain()).collect();
                assert_eq!(plain, ["one", "two", "three"]);
            }
            other => panic!("expected paragraphs, got {other:?}"),
        }
    }

    #[test]
    fn missing_or_empty_slot_has_no_content() {
        let mut state = LoadState::default();
        assert_eq!(render_sidebar(&state, SidebarSlot::Method), SidebarView::NoContent);
        state.sidebar.set(SidebarSlot::Method, inject_link("", Some("x"), Some("y")));
        assert_eq!(render_sidebar(&state, SidebarSlot::Method), SidebarView::NoContent);
    }
}
