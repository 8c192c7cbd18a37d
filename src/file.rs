// src/file.rs

use std::{
    collections::HashMap,
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::config::options::{ExportOptions, ExportType};
use crate::core::sanitize::sanitize_team_filename;
use crate::csv::{player_cells, player_headers, referee_cells, referee_headers, rows_to_string};
use crate::session::Session;

/// Player table text (all teams, current view order) for Copy/Export.
pub fn players_export_string(session: &Session, export: &ExportOptions) -> String {
    let rows: Vec<Vec<String>> = session
        .all_player_rows()
        .iter()
        .map(|(team, row)| player_cells(team, row))
        .collect();
    rows_to_string(player_headers(export.include_headers), &rows, export.delim())
}

/// Referee table text for Copy/Export.
pub fn referees_export_string(session: &Session, export: &ExportOptions) -> String {
    let rows: Vec<Vec<String>> = session.referee_table().iter().map(referee_cells).collect();
    rows_to_string(referee_headers(export.include_headers), &rows, export.delim())
}

/// Write the player tables according to `export.export_type`.
/// Returns every path written.
pub fn export_players(
    session: &Session,
    export: &ExportOptions,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    export_players_for(session, export, &session.teams())
}

/// Like `export_players`, restricted to `teams` (in the given order).
/// Unknown names are skipped.
pub fn export_players_for(
    session: &Session,
    export: &ExportOptions,
    teams: &[String],
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let teams: Vec<&String> = teams.iter().filter(|t| session.team(t).is_some()).collect();

    match export.export_type {
        ExportType::SingleFile => {
            let rows: Vec<Vec<String>> = teams
                .iter()
                .flat_map(|team| {
                    session
                        .view(team)
                        .unwrap_or_default()
                        .iter()
                        .map(|row| player_cells(team, row))
                        .collect::<Vec<_>>()
                })
                .collect();
            let path = export.out_path();
            ensure_parent(&path)?;
            fs::write(&path, rows_to_string(player_headers(export.include_headers), &rows, export.delim()))?;
            info!("Export: players → {}", path.display());
            Ok(vec![path])
        }
        ExportType::PerTeam => {
            let outdir = export.out_path();
            ensure_directory(&outdir)?;

            let mut seen: HashMap<String, usize> = HashMap::new();
            let mut written = Vec::with_capacity(teams.len());
            let ext = export.format.ext();

            for team in teams {
                let rows: Vec<Vec<String>> = session
                    .view(team)
                    .unwrap_or_default()
                    .iter()
                    .map(|row| player_cells(team, row))
                    .collect();
                let stem = sanitize_team_filename(team);
                let path = resolve_team_filename(&outdir, &stem, &mut seen, ext);
                fs::write(&path, rows_to_string(player_headers(export.include_headers), &rows, export.delim()))?;
                written.push(path);
            }
            info!("Export: {} team file(s) → {}", written.len(), outdir.display());
            Ok(written)
        }
    }
}

/// Write the referee table next to the player export.
pub fn export_referees(session: &Session, export: &ExportOptions) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.referees_path();
    ensure_parent(&path)?;
    fs::write(&path, referees_export_string(session, export))?;
    info!("Export: referees → {}", path.display());
    Ok(path)
}

fn ensure_parent(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Duplicate handling **only within this run**
pub fn resolve_team_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,                         // "csv" | "tsv"
) -> PathBuf {
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}
