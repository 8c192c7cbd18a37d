// src/gui/app.rs
use std::{error::Error, fs, path::Path};

use eframe::egui;
use log::{error, info};

use crate::{
    config::{
        consts::{DEFAULT_QUOTE, SAMPLE_BULLETIN},
        options::{ExportOptions, ParseOptions},
    },
    session::Session,
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Football Bulletin Stats",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth for tables, sort cursors and errored lines
    pub session: Session,

    // last loaded text, kept for the raw preview
    pub raw_text: String,
    pub source: Option<String>,

    // load bar inputs
    pub path_text: String,
    pub quote_text: String,

    // team currently shown in the player table
    pub selected_team: Option<String>,

    // output text field UX (we map this <-> ExportOptions)
    pub export: ExportOptions,
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new() -> Self {
        let export = ExportOptions::default();
        let out_path_text = export.out_path().to_string_lossy().into_owned();
        info!("Init: GUI ready");
        Self {
            session: Session::default(),
            raw_text: String::new(),
            source: None,
            path_text: String::new(),
            quote_text: DEFAULT_QUOTE.to_string(),
            selected_team: None,
            export,
            out_path_text,
            out_path_dirty: false,
            status: "Load a bulletin to begin".into(),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Quote marker from the text field, or None if it is not a single
    /// non-alphanumeric character.
    pub fn quote(&self) -> Option<char> {
        let mut chars = self.quote_text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_alphanumeric() => Some(c),
            _ => None,
        }
    }

    /// Replace the session with statistics built from `text`.
    pub fn load_text(&mut self, text: String, source: &str) {
        let Some(quote) = self.quote() else {
            self.status(format!("Invalid quote marker: {:?}", self.quote_text));
            return;
        };
        self.session.set_options(ParseOptions::with_quote(quote));
        let summary = self.session.ingest(&text);
        self.raw_text = text;
        self.source = Some(source.to_string());

        // Keep the selection if the team survived the reload
        let keep = self
            .selected_team
            .as_deref()
            .is_some_and(|t| self.session.team(t).is_some());
        if !keep {
            self.selected_team = self.session.teams().into_iter().next();
        }

        self.status(format!(
            "{source}: {} report line(s), {} team(s), {} error(s)",
            summary.report_lines,
            self.session.team_count(),
            summary.errors
        ));
    }

    pub fn load_file(&mut self, path: &Path) {
        match fs::read_to_string(path) {
            Ok(text) => {
                let name = path.display().to_string();
                info!("Load: {name}");
                self.path_text = name.clone();
                self.load_text(text, &name);
            }
            Err(e) => {
                error!("Load: {} failed: {e}", path.display());
                self.status(format!("Could not read {}: {e}", path.display()));
            }
        }
    }

    pub fn load_example(&mut self) {
        self.load_text(SAMPLE_BULLETIN.to_string(), "example");
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        // Only the first file is loaded; the session holds one bulletin
        if let Some(file) = dropped.into_iter().next() {
            if let Some(path) = file.path {
                self.load_file(&path);
            } else if let Some(bytes) = file.bytes {
                let text = String::from_utf8_lossy(&bytes).into_owned();
                self.load_text(text, &file.name);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self { Self::new() }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        egui::TopBottomPanel::top("load_bar").show(ctx, |ui| {
            components::load_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("issues")
            .resizable(true)
            .show(ctx, |ui| {
                components::issues::draw(ui, self);
            });

        egui::SidePanel::left("teams")
            .resizable(false)
            .show(ctx, |ui| {
                components::team_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::export_bar::draw(ui, self);

            ui.separator();

            components::referee_table::draw(ui, self);

            ui.separator();

            components::player_table::draw(ui, self);
        });
    }
}
