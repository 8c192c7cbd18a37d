// src/gui/components/issues.rs
//
// Bottom panel: errored report lines and a preview of the loaded text.

use eframe::egui::{self, Color32, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let errors = app.session.errors();

    let title = format!("Errored lines ({})", errors.len());
    let title = if errors.is_empty() {
        RichText::new(title)
    } else {
        RichText::new(title).color(Color32::from_rgb(0xDC, 0x61, 0x49))
    };

    egui::CollapsingHeader::new(title)
        .id_salt("errored_lines")
        .default_open(!errors.is_empty())
        .show(ui, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("errored_lines_scroll")
                .max_height(140.0)
                .show(ui, |ui| {
                    for e in errors {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(RichText::new(format!("line {}:", e.line_no)).monospace());
                            ui.label(RichText::new(e.kind.to_string()).strong());
                            ui.label(e.raw.trim());
                        });
                    }
                });
        });

    egui::CollapsingHeader::new("Raw text")
        .id_salt("raw_text")
        .default_open(false)
        .show(ui, |ui| {
            egui::ScrollArea::both()
                .id_salt("raw_text_scroll")
                .max_height(200.0)
                .show(ui, |ui| {
                    // Read-only view; the TextEdit needs a &mut str
                    let mut text = app.raw_text.as_str();
                    ui.add(
                        egui::TextEdit::multiline(&mut text)
                            .font(egui::TextStyle::Monospace)
                            .desired_width(f32::INFINITY),
                    );
                });
        });
}
