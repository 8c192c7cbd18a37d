// src/gui/components/export_bar.rs

use eframe::egui;
use log::{debug, error, info};

use crate::{
    config::options::{
        ExportFormat,
        ExportType::{PerTeam, SingleFile},
    },
    file,
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Format + Include headers + single/per-team ---
    ui.horizontal(|ui| {
        let export = &mut app.export;
        let prev_fmt = export.format;

        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

        if export.format != prev_fmt {
            info!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        ui.separator();

        if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
            debug!("UI: include_headers → {}", export.include_headers);
        }

        let mut single = matches!(export.export_type, SingleFile);
        if ui.checkbox(&mut single, "All teams in one file").changed() {
            export.export_type = if single { SingleFile } else { PerTeam };
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
            debug!("UI: export_type → {:?}", export.export_type);
        }
    });

    // --- Output field + actions ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
        }

        let has_data = !app.session.is_empty();

        if ui.add_enabled(has_data, egui::Button::new("Export")).clicked() {
            export(app);
        }

        if ui.add_enabled(has_data, egui::Button::new("Copy players")).clicked() {
            let txt = file::players_export_string(&app.session, &app.export);
            ui.ctx().copy_text(txt);
            app.status("Players copied to clipboard");
        }

        if ui.add_enabled(has_data, egui::Button::new("Copy referees")).clicked() {
            let txt = file::referees_export_string(&app.session, &app.export);
            ui.ctx().copy_text(txt);
            app.status("Referees copied to clipboard");
        }
    });
}

fn export(app: &mut App) {
    if app.out_path_dirty {
        app.export.set_path(&app.out_path_text);
        info!("Export: Out path set → {}", app.export.out_path().display());
        app.out_path_dirty = false;
    }

    let res = file::export_players(&app.session, &app.export).and_then(|mut paths| {
        paths.push(file::export_referees(&app.session, &app.export)?);
        Ok(paths)
    });

    match res {
        Ok(paths) => {
            let last = paths.last().map(|p| p.display().to_string()).unwrap_or_default();
            app.status(format!("Exported {} file(s). Last: {last}", paths.len()));
        }
        Err(e) => {
            error!("Export: Error: {e}");
            app.status(format!("Export error: {e}"));
        }
    }
}
