// tests/controller.rs
use sheetfolio::{
    classify,
    config::consts::{MAIN_BUTTONS, NO_CONTENT, SIDEBAR_BUTTONS},
    controller::{ButtonGroup, Controller},
    core::parse_records,
    keys::FeedKey,
    render::SidebarView,
    store::LoadState,
};

fn loaded() -> LoadState {
    let mut state = LoadState::default();
    classify::apply(
        FeedKey::Main,
        parse_records("Section,Beschreibung,Link Text,Link URL\nabout,Hello\nmethod,How we work\n"),
        &mut state,
    );
    classify::apply(FeedKey::Glossary, parse_records("Begriff,Definition\nAtom,Unit\n"), &mut state);
    state
}

fn mount(data: &LoadState) -> Controller {
    Controller::mount(data, ButtonGroup::new(SIDEBAR_BUTTONS), ButtonGroup::new(MAIN_BUTTONS))
}

fn active_labels(group: &ButtonGroup) -> Vec<&str> {
    group.buttons().iter().filter(|b| b.is_active()).map(|b| b.label.as_str()).collect()
}

#[test]
fn mount_highlights_default_keys() {
    let data = loaded();
    let ctrl = mount(&data);
    assert_eq!(active_labels(ctrl.sidebar_buttons()), ["About"]);
    assert_eq!(active_labels(ctrl.main_buttons()), ["Endlager"]);
    assert!(ctrl.main().is_no_content());
}

#[test]
fn main_click_leaves_sidebar_group_alone() {
    let data = loaded();
    let mut ctrl = mount(&data);
    ctrl.activate_sidebar(&data, 1);
    let sidebar_before = ctrl.sidebar_buttons().clone();

    assert!(ctrl.activate_main(&data, 2));
    assert_eq!(active_labels(ctrl.main_buttons()), ["Zeit"]);
    assert_eq!(ctrl.sidebar_buttons(), &sidebar_before);

    let main_before = ctrl.main_buttons().clone();
    assert!(ctrl.activate_sidebar(&data, 0));
    assert_eq!(active_labels(ctrl.sidebar_buttons()), ["About"]);
    assert_eq!(ctrl.main_buttons(), &main_before);
}

#[test]
fn sidebar_click_swaps_text() {
    let data = loaded();
    let mut ctrl = mount(&data);
    ctrl.activate_sidebar_key(&data, "METHOD");
    match ctrl.sidebar() {
        SidebarView::Paragraphs(ps) => assert_eq!(ps[0].plain(), "How we work"),
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn unknown_key_shows_fallback_and_moves_highlight() {
    let data = loaded();
    let mut ctrl = Controller::mount(
        &data,
        ButtonGroup::new(&[("About", "about"), ("Press", "press")]),
        ButtonGroup::new(&[("Endlager", "endlager"), ("Wetter", "wetter")]),
    );

    assert!(ctrl.activate_main(&data, 1));
    assert_eq!(ctrl.main().message(), Some(NO_CONTENT));
    assert_eq!(active_labels(ctrl.main_buttons()), ["Wetter"]);

    assert!(ctrl.activate_sidebar(&data, 1));
    assert_eq!(ctrl.sidebar(), &SidebarView::NoContent);
    assert_eq!(active_labels(ctrl.sidebar_buttons()), ["Press"]);
}

#[test]
fn missing_default_button_falls_back_to_first() {
    let data = loaded();
    let ctrl = Controller::mount(
        &data,
        ButtonGroup::new(&[("Method", "method"), ("About", "about")]),
        ButtonGroup::new(&[("Zeit", "zeit"), ("Glossar", "glossary")]),
    );
    // "about" exists, just not first
    assert_eq!(active_labels(ctrl.sidebar_buttons()), ["About"]);
    // no "endlager" button at all
    assert_eq!(active_labels(ctrl.main_buttons()), ["Zeit"]);
}

#[test]
fn glossary_entries_toggle() {
    let data = loaded();
    let mut ctrl = mount(&data);
    ctrl.activate_main_key(&data, "glossary");
    assert!(ctrl.toggle_glossary_entry(0));
    assert!(ctrl.main().glossary()[0].expanded);
    assert!(ctrl.toggle_glossary_entry(0));
    assert!(!ctrl.main().glossary()[0].expanded);
    assert!(!ctrl.toggle_glossary_entry(5));
}

#[test]
fn out_of_range_click_is_ignored() {
    let data = loaded();
    let mut ctrl = mount(&data);
    let before = ctrl.clone();
    assert!(!ctrl.activate_main(&data, 99));
    assert!(!ctrl.activate_sidebar(&data, 99));
    assert_eq!(ctrl, before);
}
