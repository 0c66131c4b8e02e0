// src/gui/components/feed_report.rs
//
// Per-feed outcome of the last load.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::store::{FeedOutcome, LoadState};

pub fn draw(ui: &mut egui::Ui, data: &LoadState) {
    ui.label(RichText::new(format!(
        "Feeds: {} loaded, {} failed",
        data.loaded_count(),
        data.failed_count()
    )).small());

    TableBuilder::new(ui)
        .id_salt("feed_report")
        .striped(true)
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder())
        .header(18.0, |mut header| {
            header.col(|ui| { ui.strong("Feed"); });
            header.col(|ui| { ui.strong("Result"); });
        })
        .body(|mut body| {
            for report in &data.reports {
                body.row(18.0, |mut row| {
                    row.col(|ui| { ui.label(report.key.to_string()); });
                    row.col(|ui| {
                        match &report.outcome {
                            FeedOutcome::Loaded { rows } => {
                                ui.label(format!("{rows} rows"));
                            }
                            FeedOutcome::Failed(e) => {
                                ui.label(RichText::new("failed").color(Color32::LIGHT_RED))
                                    .on_hover_text(e.to_string());
                            }
                        }
                    });
                });
            }
        });
}
