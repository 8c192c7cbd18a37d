// src/params.rs
use std::path::PathBuf;

use log::LevelFilter;

use crate::config::consts::DEFAULT_QUOTE;
use crate::config::options::{ExportFormat, SortColumn};

#[derive(Clone, Debug)]
pub struct Params {
    pub input: Option<PathBuf>,      // bulletin file; "-" reads stdin
    pub example: bool,               // use the built-in sample instead of a file
    pub quote: char,                 // team name quote marker
    pub team: Option<String>,        // restrict output to one team
    pub sorts: Vec<SortColumn>,      // sort requests, applied in order
    pub referees: bool,              // also emit the referee table
    pub format: ExportFormat,
    pub out: Option<PathBuf>,        // file (single) or directory (per-team); stdout if None
    pub per_team: bool,              // one file per team
    pub include_headers: bool,       // include header row
    pub log_level: LevelFilter,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            input: None,
            example: false,
            quote: DEFAULT_QUOTE,
            team: None,
            sorts: Vec::new(),
            referees: false,
            format: ExportFormat::Csv,
            out: None,
            per_team: false,
            include_headers: false,
            log_level: LevelFilter::Info,
        }
    }
}
