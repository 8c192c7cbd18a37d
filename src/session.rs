// src/session.rs
//! One ingestion session: text in, tables + errored lines out.
//!
//! The session is the only owner of aggregate state. `ingest` always starts
//! from a clean slate, so loading a second file never merges into the first.

use log::{info, trace, warn};

use crate::config::options::{ParseOptions, SortColumn};
use crate::error::LineError;
use crate::sort::{SortCursors, Sorter};
use crate::specs::{build_records, is_report_line, MatchRecord};
use crate::store::{PlayerRow, RefereeRow, StatStore, TeamTable};

/// Counts from the last `ingest` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub lines: usize,
    pub report_lines: usize,
    pub records: usize,
    pub errors: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    options: ParseOptions,
    store: StatStore,
    sorter: Sorter,
    records: Vec<MatchRecord>,
    errors: Vec<LineError>,
}

impl Session {
    pub fn new(options: ParseOptions) -> Self {
        Self { options, ..Self::default() }
    }

    /// Takes effect on the next `ingest`.
    pub fn set_options(&mut self, options: ParseOptions) { self.options = options; }

    /// Replace all state with statistics built from `text`.
    ///
    /// Lines that are not reports are skipped silently. Report lines that fail
    /// extraction are recorded in `errors()` and left out of the tables; the
    /// remaining lines are still processed.
    pub fn ingest(&mut self, text: &str) -> IngestSummary {
        self.reset();

        let mut summary = IngestSummary::default();
        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            summary.lines += 1;

            if !is_report_line(raw) {
                trace!("line {line_no}: not a report, skipped");
                continue;
            }
            summary.report_lines += 1;

            match build_records(line_no, raw, &self.options) {
                Ok(mut recs) => self.records.append(&mut recs),
                Err(kind) => {
                    warn!("line {line_no}: {kind}");
                    self.errors.push(LineError::new(line_no, raw, kind));
                }
            }
        }

        self.store.ingest(&self.records);

        summary.records = self.records.len();
        summary.errors = self.errors.len();
        info!(
            "Ingest: lines={}, reports={}, records={}, teams={}, referees={}, errors={}",
            summary.lines,
            summary.report_lines,
            summary.records,
            self.store.team_count(),
            self.store.referee_rows().len(),
            summary.errors
        );
        summary
    }

    fn reset(&mut self) {
        self.store.clear();
        self.sorter.clear();
        self.records.clear();
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool { self.store.is_empty() }
    pub fn has_errors(&self) -> bool { !self.errors.is_empty() }
    pub fn errors(&self) -> &[LineError] { &self.errors }
    pub fn records(&self) -> &[MatchRecord] { &self.records }

    /// Team names in first-seen order.
    pub fn teams(&self) -> Vec<String> {
        self.store.team_names().map(str::to_string).collect()
    }

    pub fn team_count(&self) -> usize { self.store.team_count() }

    pub fn team(&self, name: &str) -> Option<&TeamTable> { self.store.team(name) }

    /// Players of `team` in first-seen order.
    pub fn team_table(&self, team: &str) -> Option<Vec<PlayerRow>> {
        self.store.team(team).map(TeamTable::rows)
    }

    /// Players of `team` in the order of the active sort cursor.
    pub fn view(&self, team: &str) -> Option<Vec<PlayerRow>> {
        self.sorter.view(&self.store, team)
    }

    pub fn referee_table(&self) -> Vec<RefereeRow> { self.store.referee_rows() }

    /// Advance `column`'s cursor for `team` and return the reordered rows.
    pub fn sort(&mut self, team: &str, column: SortColumn) -> Option<Vec<PlayerRow>> {
        self.sorter.sort(&self.store, team, column)
    }

    pub fn sort_cursors(&self, team: &str) -> SortCursors { self.sorter.cursors(team) }

    /// Every team's rows in current view order, flattened as (team, row).
    pub fn all_player_rows(&self) -> Vec<(String, PlayerRow)> {
        self.store
            .team_names()
            .flat_map(|team| {
                self.view(team)
                    .unwrap_or_default()
                    .into_iter()
                    .map(move |row| (team.to_string(), row))
            })
            .collect()
    }
}
