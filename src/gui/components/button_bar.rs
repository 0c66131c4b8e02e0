// src/gui/components/button_bar.rs
//
// One row of exclusive buttons. Returns the clicked index; the caller owns
// the state change so both groups go through the controller.

use eframe::egui;

use crate::controller::ButtonGroup;

pub fn draw(ui: &mut egui::Ui, group: &ButtonGroup, enabled: bool) -> Option<usize> {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for (idx, b) in group.buttons().iter().enumerate() {
            let resp = ui.selectable_label(b.is_active(), b.label.as_str());
            if resp.clicked() && enabled {
                clicked = Some(idx);
            }
        }
    });
    clicked
}
