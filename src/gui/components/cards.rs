// src/gui/components/cards.rs
//
// Card grid. Columns are derived from the panel width; `Display` widths
// override the automatic column width.

use eframe::egui::{self, RichText};

use crate::{
    config::consts::CARD_MIN_WIDTH,
    render::{Card, CardWidth},
};

use super::rich;

pub fn draw(ui: &mut egui::Ui, cards: &[Card]) {
    let avail = ui.available_width();
    let gap = ui.spacing().item_spacing.x;
    let cols = ((avail + gap) / (CARD_MIN_WIDTH + gap)).floor().max(1.0);
    let auto_w = (avail - gap * (cols - 1.0)) / cols;

    ui.horizontal_wrapped(|ui| {
        for (idx, card) in cards.iter().enumerate() {
            let w = match card.width {
                CardWidth::Full => avail,
                CardWidth::Half => ((avail - gap) / 2.0).max(auto_w.min(avail)),
                CardWidth::Third => ((avail - 2.0 * gap) / 3.0).max(auto_w.min(avail)),
                CardWidth::Auto => auto_w,
            };
            ui.allocate_ui_with_layout(
                egui::vec2(w, 0.0),
                egui::Layout::top_down(egui::Align::Min),
                |ui| {
                    ui.push_id(idx, |ui| card_ui(ui, card, w));
                },
            );
        }
    });
}

fn card_ui(ui: &mut egui::Ui, card: &Card, w: f32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        // group frame: 6pt margin + 1pt stroke per side
        ui.set_width((w - 14.0).max(0.0));

        if let Some(img) = &card.image {
            ui.hyperlink_to("🖼 Image", img);
        }
        ui.label(RichText::new(&card.title).heading());
        if card.has_description() {
            rich::draw(ui, &card.description);
        }
        if let Some(src) = &card.source {
            ui.hyperlink_to("Source", src);
        }
        if !card.tags.is_empty() {
            ui.label(RichText::new(&card.tags).small().weak());
        }
        for (n, frame) in card.charts.iter().enumerate() {
            ui.hyperlink_to(format!("📈 Chart {}", n + 1), &frame.src);
        }
    });
}
