// src/render/main_panel.rs
use super::{Card, CardWidth, ChartFrame, GlossaryEntry, Layout, MainBody, MainView};
use crate::config::consts::*;
use crate::core::{inject_link, Record};
use crate::keys::Section;
use crate::store::LoadState;

/// Card grid for a section, one card per row in feed order.
pub fn render_section(state: &LoadState, section: Section) -> MainView {
    let rows = state.sections.rows(section);
    let body = if rows.is_empty() {
        MainBody::Message(NO_CONTENT)
    } else {
        MainBody::Cards(rows.iter().map(card_from_row).collect())
    };
    MainView { layout: Layout::Grid, body }
}

/// Glossary list, all entries collapsed.
pub fn render_glossary(state: &LoadState) -> MainView {
    let body = if state.glossary.is_empty() {
        MainBody::Message(NO_GLOSSARY)
    } else {
        MainBody::Glossary(
            state
                .glossary
                .iter()
                .map(|g| GlossaryEntry {
                    term: g.term.clone(),
                    definition: g.definition.clone(),
                    expanded: false,
                })
                .collect(),
        )
    };
    MainView { layout: Layout::List, body }
}

/// Button key outside the known sections. Keeps the grid container.
pub fn render_unknown(key: &str) -> MainView {
    logw!("Main: Unknown section `{}`", key);
    MainView { layout: Layout::Grid, body: MainBody::Message(NO_CONTENT) }
}

pub fn card_from_row(row: &Record) -> Card {
    Card {
        width: CardWidth::from_display(row.get(COL_DISPLAY)),
        image: row.field(COL_IMAGE).map(String::from),
        title: s!(row.get(COL_TITLE)),
        description: inject_link(
            row.get(COL_DESCRIPTION),
            row.field(COL_LINK_TEXT),
            row.field(COL_LINK_URL),
        ),
        source: row.field(COL_SOURCE).map(String::from),
        tags: s!(row.get(COL_TAGS)),
        charts: chart_frames(row.get(COL_CHART)),
    }
}

/// Comma-separated URLs, trimmed; blank tokens are skipped.
pub fn chart_frames(embed: &str) -> Vec<ChartFrame> {
    embed
        .split(',')
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(|u| ChartFrame { src: s!(u) })
        .collect()
}

impl Card {
    pub fn has_description(&self) -> bool { !self.description.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::GlossaryTerm;

    #[test]
    fn card_fields_follow_columns() {
        let row = Record::from_pairs([
            (COL_DISPLAY, "third"),
            (COL_IMAGE, "https://img.example/a.png"),
            (COL_TITLE, "Asse II"),
            (COL_DESCRIPTION, "See the Asse report."),
            (COL_LINK_TEXT, "report"),
            (COL_LINK_URL, "https://r.example"),
            (COL_TAGS, "salt, mine"),
        ]);
        let card = card_from_row(&row);
        assert_eq!(card.width, CardWidth::Third);
        assert_eq!(card.image.as_deref(), Some("https://img.example/a.png"));
        assert_eq!(card.title, "Asse II");
        assert_eq!(card.description.links().count(), 1);
        assert_eq!(card.source, None);
        assert_eq!(card.tags, "salt, mine");
        assert!(card.charts.is_empty());
    }

    #[test]
    fn display_match_is_exact() {
        assert_eq!(CardWidth::from_display("full"), CardWidth::Full);
        assert_eq!(CardWidth::from_display("Full"), CardWidth::Auto);
        assert_eq!(CardWidth::from_display(""), CardWidth::Auto);
        assert_eq!(CardWidth::Auto.class(), None);
    }

    #[test]
    fn glossary_entries_start_collapsed_and_toggle() {
        let mut state = LoadState::default();
        state.glossary.push(GlossaryTerm { term: s!("HAW"), definition: s!("Hochradioaktiver Abfall") });
        let mut view = render_glossary(&state);
        assert_eq!(view.layout, Layout::List);
        assert!(!view.glossary()[0].expanded);
        assert!(view.toggle_entry(0));
        assert!(view.glossary()[0].expanded);
        assert!(!view.toggle_entry(5));
    }

    #[test]
    fn empty_glossary_has_its_own_message() {
        let view = render_glossary(&LoadState::default());
        assert!(view.is_no_glossary());
        assert_eq!(view.layout, Layout::List);
    }

    #[test]
    fn unknown_section_keeps_grid() {
        let view = render_unknown("weather");
        assert!(view.is_no_content());
        assert_eq!(view.layout, Layout::Grid);
    }
}
