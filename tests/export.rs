// tests/export.rs
use std::fs;

use sheetfolio::{
    classify,
    config::consts::{MAIN_BUTTONS, SIDEBAR_BUTTONS},
    controller::{ButtonGroup, Controller},
    core::parse_records,
    file,
    keys::{FeedKey, Section},
    store::LoadState,
};

fn data() -> LoadState {
    let mut state = LoadState::default();
    classify::apply(FeedKey::Main, parse_records("Section,Beschreibung\nabout,Hallo\n"), &mut state);
    classify::apply(
        FeedKey::Section(Section::Endlager),
        parse_records("Title,Display\nKonrad,full\n"),
        &mut state,
    );
    state
}

#[test]
fn page_is_written_with_initial_selection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("page.html");
    let data = data();
    let ctrl = Controller::mount(&data, ButtonGroup::new(SIDEBAR_BUTTONS), ButtonGroup::new(MAIN_BUTTONS));

    let written = file::write_page(&ctrl, &path).unwrap();
    assert_eq!(written, path);

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<div id="site-description"><p>Hallo</p></div>"#));
    assert!(html.contains(r#"<div class="card full-width">"#));
    assert!(html.contains(r#"<button class="active" data-content="endlager">Endlager</button>"#));
    assert!(html.contains(r#"<button class="inactive" data-section="method">Method</button>"#));
}

#[test]
fn site_has_index_and_every_combination() {
    let dir = tempfile::tempdir().unwrap();
    let data = data();
    let sb = ButtonGroup::new(SIDEBAR_BUTTONS);
    let mb = ButtonGroup::new(MAIN_BUTTONS);

    let written = file::write_site(&data, &sb, &mb, dir.path()).unwrap();
    assert_eq!(written.len(), 1 + sb.len() * mb.len());
    assert!(dir.path().join("index.html").exists());

    let page = fs::read_to_string(dir.path().join("method-glossary.html")).unwrap();
    assert!(page.contains("No glossary terms available."));
    assert!(page.contains(r#"<div id="site-description"><p>No content available.</p></div>"#));
    // buttons link across the grid, keeping the other group's selection
    assert!(page.contains(r#"href="about-glossary.html""#));
    assert!(page.contains(r#"href="method-zeit.html""#));
}

#[test]
fn site_refuses_a_file_as_directory() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("out");
    fs::write(&blocker, "x").unwrap();
    let data = data();
    let res = file::write_site(&data, &ButtonGroup::new(SIDEBAR_BUTTONS), &ButtonGroup::new(MAIN_BUTTONS), &blocker);
    assert!(res.is_err());
}
