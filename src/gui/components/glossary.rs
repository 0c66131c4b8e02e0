// src/gui/components/glossary.rs
//
// Glossary list. Clicking an entry asks the controller to toggle it.
// Term and definition are always drawn; collapsed entries are dimmed.

use eframe::egui::{self, RichText, Sense};

use crate::render::GlossaryEntry;

/// Returns the index of the entry clicked this frame, if any.
pub fn draw(ui: &mut egui::Ui, entries: &[GlossaryEntry]) -> Option<usize> {
    let mut clicked = None;
    for (idx, entry) in entries.iter().enumerate() {
        let resp = egui::Frame::group(ui.style())
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                let marker = if entry.expanded { "▾" } else { "▸" };
                ui.label(RichText::new(format!("{marker} {}", entry.term)).strong());
                if entry.expanded {
                    ui.label(entry.definition.as_str());
                } else {
                    ui.label(RichText::new(entry.definition.as_str()).weak());
                }
            })
            .response
            .interact(Sense::click());
        if resp.clicked() {
            clicked = Some(idx);
        }
    }
    clicked
}
