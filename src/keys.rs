// src/keys.rs
//
// Closed key sets for feeds, sidebar slots and main panel targets.
// Button keys come in as free text; `parse` lowercases them and returns
// None for anything outside the set, which callers treat as "unknown".

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Endlager,
    Stories,
    Zeit,
    Gefahr,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Endlager, Section::Stories, Section::Zeit, Section::Gefahr];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Endlager => "endlager",
            Section::Stories  => "stories",
            Section::Zeit     => "zeit",
            Section::Gefahr   => "gefahr",
        }
    }

    pub fn parse(key: &str) -> Option<Section> {
        let key = key.to_lowercase();
        Section::ALL.into_iter().find(|s| s.key() == key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeedKey {
    Main,
    Glossary,
    Section(Section),
}

impl FeedKey {
    pub fn key(&self) -> &'static str {
        match self {
            FeedKey::Main => "main",
            FeedKey::Glossary => "glossary",
            FeedKey::Section(s) => s.key(),
        }
    }

    pub fn parse(key: &str) -> Option<FeedKey> {
        match key.to_lowercase().as_str() {
            "main" => Some(FeedKey::Main),
            "glossary" => Some(FeedKey::Glossary),
            other => Section::parse(other).map(FeedKey::Section),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SidebarSlot {
    About,
    Method,
}

impl SidebarSlot {
    pub const ALL: [SidebarSlot; 2] = [SidebarSlot::About, SidebarSlot::Method];

    pub fn key(&self) -> &'static str {
        match self {
            SidebarSlot::About => "about",
            SidebarSlot::Method => "method",
        }
    }

    pub fn parse(key: &str) -> Option<SidebarSlot> {
        let key = key.to_lowercase();
        SidebarSlot::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// What a main panel button shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MainTarget {
    Section(Section),
    Glossary,
}

impl MainTarget {
    pub fn parse(key: &str) -> Option<MainTarget> {
        let key = key.to_lowercase();
        if key == "glossary" {
            return Some(MainTarget::Glossary);
        }
        Section::parse(&key).map(MainTarget::Section)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.key()) }
}

impl fmt::Display for FeedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.key()) }
}

impl fmt::Display for SidebarSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.key()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Section::parse("Endlager"), Some(Section::Endlager));
        assert_eq!(FeedKey::parse("GLOSSARY"), Some(FeedKey::Glossary));
        assert_eq!(SidebarSlot::parse("Method"), Some(SidebarSlot::Method));
        assert_eq!(MainTarget::parse("Glossary"), Some(MainTarget::Glossary));
    }

    #[test]
    fn unknown_keys_do_not_parse() {
        assert_eq!(Section::parse("main"), None);
        assert_eq!(FeedKey::parse("weather"), None);
        assert_eq!(SidebarSlot::parse("contact"), None);
        assert_eq!(MainTarget::parse("main"), None);
    }

    #[test]
    fn feed_keys_round_trip_through_their_names() {
        for s in Section::ALL {
            assert_eq!(FeedKey::parse(s.key()), Some(FeedKey::Section(s)));
        }
        assert_eq!(FeedKey::Main.to_string(), "main");
    }
}
