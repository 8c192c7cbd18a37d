// src/gui/components/mod.rs
pub mod export_bar;
pub mod issues;
pub mod load_bar;
pub mod player_table;
pub mod referee_table;
pub mod team_panel;

use eframe::egui;

/// Slim, non-floating scroll bars that blend with the panel.
pub(crate) fn scroll_style(ui: &mut egui::Ui, inner_margin: f32, outer_margin: f32) {
    let s = &mut ui.style_mut().spacing.scroll;
    s.floating = false;
    s.bar_width = 10.0;
    s.bar_inner_margin = inner_margin;
    s.bar_outer_margin = outer_margin;
    s.handle_min_length = 48.0;
    s.foreground_color = true;
    let visuals = &mut ui.style_mut().visuals;
    visuals.extreme_bg_color = visuals.panel_fill;
}
