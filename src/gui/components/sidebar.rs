// src/gui/components/sidebar.rs
//
// Left panel: sidebar buttons over the description text, feed report at
// the bottom when enabled.

use eframe::egui::{self, RichText};

use crate::{gui::app::App, render::SidebarView};

use super::{button_bar, feed_report, rich};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Sheetfolio");
    ui.separator();

    let (Some(ctrl), Some(data)) = (app.ctrl.as_mut(), app.data.as_ref()) else {
        ui.label(RichText::new("Loading…").italics());
        return;
    };

    if let Some(idx) = button_bar::draw(ui, ctrl.sidebar_buttons(), !app.running) {
        ctrl.activate_sidebar(data, idx);
    }

    ui.separator();

    let report_h = if app.state.gui.show_feed_report { 160.0 } else { 0.0 };
    egui::ScrollArea::vertical()
        .id_salt("sidebar_scroll")
        .max_height((ui.available_height() - report_h).max(0.0))
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);
            let view = ctrl.sidebar();
            if let SidebarView::Paragraphs(lines) = view {
                for line in lines {
                    rich::paragraph(ui, line);
                }
            }
            if let Some(msg) = view.message() {
                ui.label(RichText::new(msg).italics());
            }
        });

    if app.state.gui.show_feed_report {
        ui.separator();
        feed_report::draw(ui, data);
    }
}
