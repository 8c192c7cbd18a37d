// src/gui/components/player_table.rs
//
// The selected team's table. Header clicks advance that column's sort cursor
// through Session::sort; the body always shows Session::view, so a repaint
// never re-sorts.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{config::options::SortColumn, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(team) = app.selected_team.clone() else {
        ui.label(if app.session.is_empty() { "Nothing loaded" } else { "Select a team" });
        return;
    };
    let Some(rows) = app.session.view(&team) else {
        ui.label(format!("Unknown team: {team}"));
        return;
    };

    ui.heading(&team);

    let cursors = app.session.sort_cursors(&team);
    let mut clicked: Option<SortColumn> = None;

    super::scroll_style(ui, 7.0, 0.0);

    TableBuilder::new(ui)
        .id_salt(("player_table", team.as_str()))
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::initial(220.0).resizable(true).clip(true).at_least(60.0))
        .column(Column::initial(70.0).at_least(40.0))
        .column(Column::initial(70.0).at_least(40.0))
        .header(24.0, |mut header| {
            for col in SortColumn::ALL {
                header.col(|ui| {
                    let text = format!("{}{}", col.title(), cursors.get(col).arrow());
                    let resp = ui.add(
                        egui::Button::new(RichText::new(text).strong()).frame(false),
                    );
                    if resp.on_hover_text("Click to sort").clicked() {
                        clicked = Some(col);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(r) = rows.get(row.index()) else { return };
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                        ui.label(&r.name);
                    });
                });
                row.col(|ui| {
                    ui.centered_and_justified(|ui| { ui.label(r.games.to_string()); });
                });
                row.col(|ui| {
                    ui.centered_and_justified(|ui| { ui.label(r.goals.to_string()); });
                });
            });
        });

    if let Some(col) = clicked {
        app.session.sort(&team, col);
    }
}
