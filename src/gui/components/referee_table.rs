// src/gui/components/referee_table.rs

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let rows = app.session.referee_table();

    egui::CollapsingHeader::new(format!("Referees ({})", rows.len()))
        .id_salt("referees")
        .default_open(false)
        .show(ui, |ui| {
            if rows.is_empty() {
                ui.label("No referees");
                return;
            }
            TableBuilder::new(ui)
                .id_salt("referee_table")
                .striped(true)
                .max_scroll_height(160.0)
                .column(Column::initial(220.0).resizable(true).clip(true))
                .column(Column::initial(70.0))
                .header(22.0, |mut header| {
                    header.col(|ui| { ui.label(RichText::new("Referee").strong()); });
                    header.col(|ui| { ui.label(RichText::new("Games").strong()); });
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let Some(r) = rows.get(row.index()) else { return };
                        row.col(|ui| { ui.label(&r.name); });
                        row.col(|ui| {
                            ui.centered_and_justified(|ui| { ui.label(r.games.to_string()); });
                        });
                    });
                });
        });
}
