// src/gui/components/load_bar.rs
//
// Path field, quote marker, Load / Load example. Files can also be dropped
// onto the window (handled in App::update).

use std::path::PathBuf;

use eframe::egui;
use log::debug;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Bulletin:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.path_text)
                .hint_text("path to .txt, or drop a file here")
                .desired_width(360.0)
                .font(egui::TextStyle::Monospace),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Load").clicked() || enter {
            let path = PathBuf::from(app.path_text.trim());
            if path.as_os_str().is_empty() {
                app.status("Enter a file path first");
            } else {
                app.load_file(&path);
            }
        }

        if ui.button("Load example").clicked() {
            app.load_example();
        }

        ui.separator();

        ui.label("Quote:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.quote_text).desired_width(20.0))
            .changed()
        {
            debug!("UI: quote marker → {:?}", app.quote_text);
        }

        // Re-parse what is loaded with the new marker
        let can_reparse = !app.raw_text.is_empty();
        if ui.add_enabled(can_reparse, egui::Button::new("Reparse")).clicked() {
            let text = app.raw_text.clone();
            let source = app.source.clone().unwrap_or_default();
            app.load_text(text, &source);
        }
    });

    ui.label(format!("Status: {}", app.status));
}
