// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::consts::*;

/// Knobs for the line grammar that vary between bulletin sources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Marker used as an open/close pair around team names.
    pub quote: char,
    /// Token separating the two rosters of a double-header.
    pub divider: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            quote: DEFAULT_QUOTE,
            divider: DEFAULT_DIVIDER.to_string(),
        }
    }
}

impl ParseOptions {
    pub fn with_quote(quote: char) -> Self {
        Self { quote, ..Self::default() }
    }
}

/// Player table column a sort request targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Name,
    Games,
    Goals,
}

impl SortColumn {
    pub const ALL: [SortColumn; 3] = [SortColumn::Name, SortColumn::Games, SortColumn::Goals];

    pub fn title(self) -> &'static str {
        match self {
            SortColumn::Name => "Player",
            SortColumn::Games => "Games",
            SortColumn::Goals => "Goals",
        }
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "player" => Ok(SortColumn::Name),
            "games" => Ok(SortColumn::Games),
            "goals" => Ok(SortColumn::Goals),
            other => Err(format!("Unknown sort column: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportType {
    SingleFile,
    PerTeam,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(format!("Unknown format: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            out_path: OutputPath::default(),
            include_headers: false,
        }
    }
}

impl ExportOptions {
    /// File path for single-file exports, directory for per-team exports.
    /// An extension typed by the user wins over the format's extension.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        match self.export_type {
            ExportType::SingleFile => {
                let stem = self.out_path.file_stem.to_string_lossy();
                let ext = self.out_path.user_ext.clone()
                    .unwrap_or_else(|| self.format.ext().to_string());
                path.push(format!("{stem}.{ext}"));
            }
            ExportType::PerTeam => { /* directory only */ }
        }
        path
    }

    /// Parse user text into dir + stem (+ extension, if one was typed).
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        match self.export_type {
            ExportType::SingleFile => {
                let p = Path::new(s);
                if let Some(parent) = p.parent() {
                    self.out_path.dir = parent.to_path_buf();
                }
                if let Some(stem) = p.file_stem() {
                    self.out_path.file_stem = stem.to_os_string();
                }
                self.out_path.user_ext = p.extension().map(|e| e.to_string_lossy().into_owned());
            }
            ExportType::PerTeam => {
                self.out_path.dir = PathBuf::from(s);
            }
        }
    }

    /// Sibling path for the referee table next to the players export.
    /// In per-team mode it sits beside the team directory, never inside it.
    pub fn referees_path(&self) -> PathBuf {
        let dir = match self.export_type {
            ExportType::SingleFile => self.out_path.dir.as_path(),
            ExportType::PerTeam => self.out_path.dir.parent().unwrap_or(Path::new("")),
        };
        dir.join(format!("{}.{}", DEFAULT_REFEREES_FILE, self.format.ext()))
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    user_ext: Option<String>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_PLAYERS_SUBDIR),
            file_stem: OsString::from(DEFAULT_PLAYERS_FILE),
            user_ext: None,
        }
    }
}
