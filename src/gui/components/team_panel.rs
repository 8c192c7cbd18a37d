// src/gui/components/team_panel.rs
//
// Renders the left team list in first-seen order; one team is shown at a time.

use eframe::egui;
use log::debug;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Teams");
    ui.label(format!("{} team(s)", app.session.team_count()));
    ui.separator();

    super::scroll_style(ui, 0.0, -6.0);

    egui::ScrollArea::vertical()
        .id_salt("teams_panel_scroll")
        .show(ui, |ui| {
            // Use the full panel width so the bar hugs the edge
            let w = ui.available_width();
            ui.set_min_width(w);

            let mut clicked = None;
            for name in app.session.teams() {
                let is_selected = app.selected_team.as_deref() == Some(name.as_str());
                let players = app.session.team(&name).map_or(0, |t| t.len());
                let label = format!("{name} ({players})");
                if ui.selectable_label(is_selected, label).clicked() && !is_selected {
                    clicked = Some(name);
                }
            }

            if let Some(name) = clicked {
                debug!("UI: team selected → {name}");
                app.selected_team = Some(name);
            }
        });
}
