// src/gui/components/rich.rs
//
// Draws a Rich run on one wrapped line: verbatim text loses its tags,
// links become hyperlinks that open in the browser.

use eframe::egui;

use crate::core::{markup::strip_tags, Inline, Rich};

pub fn draw(ui: &mut egui::Ui, text: &Rich) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for seg in text.segments() {
            match seg {
                Inline::Raw(s) => { ui.label(strip_tags(s)); }
                Inline::Text(s) => { ui.label(s.as_str()); }
                Inline::Link { label, href } => { ui.hyperlink_to(label.as_str(), href.as_str()); }
            }
        }
    });
}

/// Paragraph with a blank line's worth of height for empty lines.
pub fn paragraph(ui: &mut egui::Ui, text: &Rich) {
    if text.is_empty() {
        ui.add_space(ui.text_style_height(&egui::TextStyle::Body));
    } else {
        draw(ui, text);
    }
}
