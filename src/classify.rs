// src/classify.rs
//
// Sorts a parsed feed into the load state:
//   main     → sidebar slots ("about" / "method"), last matching row wins
//   glossary → (term, definition) pairs, rows missing either are dropped
//   sections → stored verbatim

use crate::config::consts::*;
use crate::core::{inject_link, Record};
use crate::keys::{FeedKey, SidebarSlot};
use crate::store::{GlossaryTerm, LoadState, SidebarTexts};

pub fn apply(key: FeedKey, rows: Vec<Record>, state: &mut LoadState) {
    match key {
        FeedKey::Main => classify_main(&rows, &mut state.sidebar),
        FeedKey::Glossary => classify_glossary(&rows, &mut state.glossary),
        FeedKey::Section(section) => state.sections.insert(section, rows),
    }
}

pub fn classify_main(rows: &[Record], sidebar: &mut SidebarTexts) {
    for row in rows {
        // Lowercase only; "About " with a trailing space is not a slot.
        let slot = match SidebarSlot::parse(row.get(COL_SECTION)) {
            Some(slot) => slot,
            None => continue,
        };
        let text = inject_link(
            row.get(COL_DESCRIPTION),
            row.field(COL_LINK_TEXT),
            row.field(COL_LINK_URL),
        );
        sidebar.set(slot, text);
    }
}

pub fn classify_glossary(rows: &[Record], glossary: &mut Vec<GlossaryTerm>) {
    glossary.extend(rows.iter().filter_map(|row| {
        let term = row.field(COL_TERM)?;
        let definition = row.field(COL_DEFINITION)?;
        Some(GlossaryTerm { term: s!(term), definition: s!(definition) })
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Section;

    fn main_row(section: &str, text: &str) -> Record {
        Record::from_pairs([(COL_SECTION, section), (COL_DESCRIPTION, text)])
    }

    #[test]
    fn last_about_row_wins() {
        let mut sidebar = SidebarTexts::default();
        classify_main(&[main_row("About", "first"), main_row("about", "second")], &mut sidebar);
        assert_eq!(sidebar.get(SidebarSlot::About).map(|r| r.plain()), Some(s!("second")));
        assert!(sidebar.get(SidebarSlot::Method).is_none());
    }

    #[test]
    fn other_sections_in_main_are_ignored() {
        let mut sidebar = SidebarTexts::default();
        classify_main(&[main_row("Contact", "x"), main_row("", "y"), main_row(" about", "z")], &mut sidebar);
        assert!(sidebar.get(SidebarSlot::About).is_none());
    }

    #[test]
    fn main_rows_get_their_link_injected() {
        let mut sidebar = SidebarTexts::default();
        let row = Record::from_pairs([
            (COL_SECTION, "method"),
            (COL_DESCRIPTION, "Data from BASE."),
            (COL_LINK_TEXT, "BASE"),
            (COL_LINK_URL, "https://base.example"),
        ]);
        classify_main(&[row], &mut sidebar);
        let text = sidebar.get(SidebarSlot::Method).unwrap();
        assert_eq!(text.links().collect::<Vec<_>>(), vec![("BASE", "https://base.example")]);
    }

    #[test]
    fn section_feeds_are_stored_verbatim() {
        let mut state = LoadState::default();
        let rows = vec![
            Record::from_pairs([(COL_TITLE, "A")]),
            Record::from_pairs([(COL_TITLE, "B")]),
        ];
        apply(FeedKey::Section(Section::Zeit), rows.clone(), &mut state);
        assert_eq!(state.sections.rows(Section::Zeit), rows.as_slice());
        assert!(state.sections.rows(Section::Gefahr).is_empty());
    }
}
