// src/gui/components/main_panel.rs
//
// Main button row and whatever the active main view holds.

use eframe::egui::{self, RichText};

use crate::{gui::app::App, render::MainBody};

use super::{button_bar, cards, glossary};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let (Some(ctrl), Some(data)) = (app.ctrl.as_mut(), app.data.as_ref()) else {
        return;
    };

    if let Some(idx) = button_bar::draw(ui, ctrl.main_buttons(), !app.running) {
        ctrl.activate_main(data, idx);
    }

    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("main_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let toggled = match &ctrl.main().body {
                MainBody::Cards(list) => {
                    cards::draw(ui, list);
                    None
                }
                MainBody::Glossary(entries) => glossary::draw(ui, entries),
                MainBody::Message(msg) => {
                    ui.label(RichText::new(*msg).italics());
                    None
                }
            };
            if let Some(idx) = toggled {
                ctrl.toggle_glossary_entry(idx);
            }
        });
}
