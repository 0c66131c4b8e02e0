// src/gui/components/toolbar.rs
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.add_enabled(!app.running, egui::Button::new("Reload")).clicked() {
            logf!("UI: Reload");
            let ctx = ui.ctx().clone();
            app.reload(&ctx);
        }
        ui.checkbox(&mut app.state.gui.show_feed_report, "Feed report");

        ui.separator();

        if app.running {
            ui.spinner();
        }
        ui.label(app.status_text());
    });
}
