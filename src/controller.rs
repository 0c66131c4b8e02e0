// src/controller.rs
//
// Selection controller: two button groups (sidebar, main), one active
// button per group, and the two views they drive.
//
// A click on one group never touches the other group's state. Button keys
// are free text; they are lowercased and parsed into the closed key sets,
// with unknown keys rendering the "No content available." fallback.

use crate::{
    config::consts::{DEFAULT_MAIN_KEY, DEFAULT_SIDEBAR_KEY},
    keys::{MainTarget, SidebarSlot},
    render::{self, MainView, SidebarView},
    store::LoadState,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Active,
    Inactive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    /// Section/content key this button activates.
    pub key: String,
    pub state: ButtonState,
}

impl Button {
    pub fn is_active(&self) -> bool { self.state == ButtonState::Active }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonGroup {
    buttons: Vec<Button>,
}

impl ButtonGroup {
    /// Build from (label, key) pairs; everything starts inactive.
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        let buttons = pairs
            .iter()
            .map(|(label, key)| Button {
                label: s!(*label),
                key: s!(*key),
                state: ButtonState::Inactive,
            })
            .collect();
        Self { buttons }
    }

    pub fn buttons(&self) -> &[Button] { &self.buttons }
    pub fn len(&self) -> usize { self.buttons.len() }
    pub fn is_empty(&self) -> bool { self.buttons.is_empty() }

    pub fn get(&self, idx: usize) -> Option<&Button> { self.buttons.get(idx) }

    pub fn active_index(&self) -> Option<usize> {
        self.buttons.iter().position(Button::is_active)
    }

    pub fn position_of(&self, key: &str) -> Option<usize> {
        let key = key.to_lowercase();
        self.buttons.iter().position(|b| b.key.to_lowercase() == key)
    }

    /// Mark `idx` active and every sibling inactive.
    pub fn set_active(&mut self, idx: usize) {
        for (i, b) in self.buttons.iter_mut().enumerate() {
            b.state = if i == idx { ButtonState::Active } else { ButtonState::Inactive };
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Controller {
    sidebar_buttons: ButtonGroup,
    main_buttons: ButtonGroup,
    sidebar: SidebarView,
    main: MainView,
}

impl Controller {
    /// Initial state: "about" in the sidebar, "endlager" cards in the main
    /// panel. The highlighted button is the one whose key matches the shown
    /// content; the first button is used only when none does.
    pub fn mount(data: &LoadState, mut sidebar_buttons: ButtonGroup, mut main_buttons: ButtonGroup) -> Self {
        let sidebar = sidebar_view(data, DEFAULT_SIDEBAR_KEY);
        let main = main_view(data, DEFAULT_MAIN_KEY);

        highlight_default(&mut sidebar_buttons, DEFAULT_SIDEBAR_KEY, "sidebar");
        highlight_default(&mut main_buttons, DEFAULT_MAIN_KEY, "main");

        Self { sidebar_buttons, main_buttons, sidebar, main }
    }

    pub fn sidebar_buttons(&self) -> &ButtonGroup { &self.sidebar_buttons }
    pub fn main_buttons(&self) -> &ButtonGroup { &self.main_buttons }
    pub fn sidebar(&self) -> &SidebarView { &self.sidebar }
    pub fn main(&self) -> &MainView { &self.main }

    /// Sidebar button click. Returns false for an index outside the group.
    pub fn activate_sidebar(&mut self, data: &LoadState, idx: usize) -> bool {
        let key = match self.sidebar_buttons.get(idx) {
            Some(b) => b.key.to_lowercase(),
            None => return false,
        };
        logd!("UI: Sidebar → {}", key);
        self.sidebar = sidebar_view(data, &key);
        self.sidebar_buttons.set_active(idx);
        true
    }

    /// Main button click. Returns false for an index outside the group.
    pub fn activate_main(&mut self, data: &LoadState, idx: usize) -> bool {
        let key = match self.main_buttons.get(idx) {
            Some(b) => b.key.to_lowercase(),
            None => return false,
        };
        logd!("UI: Main → {}", key);
        self.main = main_view(data, &key);
        self.main_buttons.set_active(idx);
        true
    }

    /// Activate by key instead of position (first matching button).
    pub fn activate_sidebar_key(&mut self, data: &LoadState, key: &str) -> bool {
        match self.sidebar_buttons.position_of(key) {
            Some(idx) => self.activate_sidebar(data, idx),
            None => false,
        }
    }

    pub fn activate_main_key(&mut self, data: &LoadState, key: &str) -> bool {
        match self.main_buttons.position_of(key) {
            Some(idx) => self.activate_main(data, idx),
            None => false,
        }
    }

    /// Glossary entry click; presentation only.
    pub fn toggle_glossary_entry(&mut self, idx: usize) -> bool {
        self.main.toggle_entry(idx)
    }
}

fn sidebar_view(data: &LoadState, key: &str) -> SidebarView {
    match SidebarSlot::parse(key) {
        Some(slot) => render::render_sidebar(data, slot),
        None => render::render_sidebar_unknown(key),
    }
}

fn main_view(data: &LoadState, key: &str) -> MainView {
    match MainTarget::parse(key) {
        Some(MainTarget::Section(section)) => render::render_section(data, section),
        Some(MainTarget::Glossary) => render::render_glossary(data),
        None => render::render_unknown(key),
    }
}

fn highlight_default(group: &mut ButtonGroup, key: &str, name: &str) {
    if group.is_empty() {
        return;
    }
    let idx = match group.position_of(key) {
        Some(i) => i,
        None => {
            logw!("UI: No {} button for default `{}`; highlighting the first button", name, key);
            0
        }
    };
    group.set_active(idx);
}
