// src/sort.rs
//
// Re-sortable snapshots of team tables.
//
// - SortState: tri-state cursor for one column.
// - SortCursors: the three cursors of one team. Selecting a column advances
//                it and resets the other two, so at most one is ever active.
// - Sorter: per-team cursors for a session. Produces owned row snapshots;
//           the underlying counts in StatStore are never reordered or touched.

use std::collections::HashMap;

use log::debug;

use crate::config::options::SortColumn;
use crate::store::{PlayerRow, StatStore, TeamTable};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortState {
    #[default]
    Unordered,
    Ascending,
    Descending,
}

impl SortState {
    /// Unordered → Descending → Ascending → Descending → …
    pub fn next(self) -> Self {
        match self {
            SortState::Unordered | SortState::Ascending => SortState::Descending,
            SortState::Descending => SortState::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortState::Unordered => "",
            SortState::Ascending => " ▲",
            SortState::Descending => " ▼",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortCursors {
    name: SortState,
    games: SortState,
    goals: SortState,
}

impl SortCursors {
    pub fn get(&self, column: SortColumn) -> SortState {
        match column {
            SortColumn::Name => self.name,
            SortColumn::Games => self.games,
            SortColumn::Goals => self.goals,
        }
    }

    /// Advance `column` and reset the other two cursors.
    pub fn select(&mut self, column: SortColumn) -> SortState {
        let next = self.get(column).next();
        *self = Self::default();
        match column {
            SortColumn::Name => self.name = next,
            SortColumn::Games => self.games = next,
            SortColumn::Goals => self.goals = next,
        }
        next
    }

    /// The one non-unordered cursor, if any.
    pub fn active(&self) -> Option<(SortColumn, SortState)> {
        SortColumn::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
            .find(|(_, s)| *s != SortState::Unordered)
    }
}

/// Snapshot of `table` ordered by `column` in `state`.
/// Sorting always starts from first-seen order and is stable.
pub fn ordered_rows(table: &TeamTable, column: SortColumn, state: SortState) -> Vec<PlayerRow> {
    let mut rows = table.rows();
    match (column, state) {
        (_, SortState::Unordered) => {}
        (SortColumn::Name, SortState::Ascending) => rows.sort_by(|a, b| a.name.cmp(&b.name)),
        (SortColumn::Name, SortState::Descending) => {
            rows.sort_by(|a, b| a.name.cmp(&b.name));
            rows.reverse();
        }
        (SortColumn::Games, SortState::Ascending) => rows.sort_by_key(|r| r.games),
        (SortColumn::Games, SortState::Descending) => rows.sort_by(|a, b| b.games.cmp(&a.games)),
        (SortColumn::Goals, SortState::Ascending) => rows.sort_by_key(|r| r.goals),
        (SortColumn::Goals, SortState::Descending) => rows.sort_by(|a, b| b.goals.cmp(&a.goals)),
    }
    rows
}

/// Per-team sort cursors for one session.
#[derive(Clone, Debug, Default)]
pub struct Sorter {
    cursors: HashMap<String, SortCursors>,
}

impl Sorter {
    pub fn clear(&mut self) { self.cursors.clear(); }

    pub fn cursors(&self, team: &str) -> SortCursors {
        self.cursors.get(team).copied().unwrap_or_default()
    }

    /// Advance the team's cursor for `column` and return the reordered snapshot.
    /// `None` for an unknown team (cursors are left alone).
    pub fn sort(&mut self, store: &StatStore, team: &str, column: SortColumn) -> Option<Vec<PlayerRow>> {
        let table = store.team(team)?;
        let state = self.cursors.entry(team.to_string()).or_default().select(column);
        debug!("Sort: {team} by {:?} → {:?}", column, state);
        Some(ordered_rows(table, column, state))
    }

    /// Snapshot for the currently active cursor without advancing it.
    pub fn view(&self, store: &StatStore, team: &str) -> Option<Vec<PlayerRow>> {
        let table = store.team(team)?;
        Some(match self.cursors(team).active() {
            Some((column, state)) => ordered_rows(table, column, state),
            None => table.rows(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::MatchRecord;

    fn store() -> StatStore {
        let rec = |fixture: usize, roster: &[&str], scorers: &[&str]| MatchRecord {
            fixture,
            team_name: "A".into(),
            match_label: String::new(),
            referee: "X".into(),
            roster: roster.iter().map(|s| s.to_string()).collect(),
            scorers: scorers.iter().map(|s| s.to_string()).collect(),
        };
        let mut s = StatStore::new();
        // Борисов: 2 games 0 goals, Аксенов: 1 game 2 goals, Волков: 2 games 1 goal, Гусев: 1 game 0 goals
        s.ingest(&[
            rec(1, &["Борисов", "Аксенов", "Волков"], &["Аксенов", "Аксенов"]),
            rec(2, &["Борисов", "Волков", "Гусев"], &["Волков"]),
        ]);
        s
    }

    fn names(rows: &[PlayerRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn cycle_starts_descending_then_toggles() {
        assert_eq!(SortState::Unordered.next(), SortState::Descending);
        assert_eq!(SortState::Descending.next(), SortState::Ascending);
        assert_eq!(SortState::Ascending.next(), SortState::Descending);
    }

    #[test]
    fn selecting_one_column_resets_the_others() {
        let mut c = SortCursors::default();
        c.select(SortColumn::Games);
        c.select(SortColumn::Games);
        assert_eq!(c.get(SortColumn::Games), SortState::Ascending);
        c.select(SortColumn::Goals);
        assert_eq!(c.get(SortColumn::Games), SortState::Unordered);
        assert_eq!(c.get(SortColumn::Name), SortState::Unordered);
        assert_eq!(c.active(), Some((SortColumn::Goals, SortState::Descending)));
        // back to games starts the cycle again
        assert_eq!(c.select(SortColumn::Games), SortState::Descending);
    }

    #[test]
    fn games_descending_keeps_insertion_order_on_ties() {
        let s = store();
        let mut sorter = Sorter::default();
        let rows = sorter.sort(&s, "A", SortColumn::Games).unwrap();
        assert_eq!(names(&rows), vec!["Борисов", "Волков", "Аксенов", "Гусев"]);
        let rows = sorter.sort(&s, "A", SortColumn::Games).unwrap();
        assert_eq!(names(&rows), vec!["Аксенов", "Гусев", "Борисов", "Волков"]);
    }

    #[test]
    fn goals_and_name_orders() {
        let s = store();
        let mut sorter = Sorter::default();
        let rows = sorter.sort(&s, "A", SortColumn::Goals).unwrap();
        assert_eq!(names(&rows), vec!["Аксенов", "Волков", "Борисов", "Гусев"]);
        let rows = sorter.sort(&s, "A", SortColumn::Name).unwrap();
        assert_eq!(names(&rows), vec!["Гусев", "Волков", "Борисов", "Аксенов"]);
        let rows = sorter.sort(&s, "A", SortColumn::Name).unwrap();
        assert_eq!(names(&rows), vec!["Аксенов", "Борисов", "Волков", "Гусев"]);
    }

    #[test]
    fn sorting_never_changes_counts() {
        let s = store();
        let before = s.team("A").unwrap().rows();
        let mut sorter = Sorter::default();
        for col in SortColumn::ALL {
            sorter.sort(&s, "A", col);
        }
        assert_eq!(s.team("A").unwrap().rows(), before);
        let mut after = sorter.view(&s, "A").unwrap();
        after.sort_by(|a, b| a.name.cmp(&b.name));
        let mut sorted_before = before.clone();
        sorted_before.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(after, sorted_before);
    }

    #[test]
    fn view_follows_active_cursor_and_unknown_team_is_none() {
        let s = store();
        let mut sorter = Sorter::default();
        assert_eq!(names(&sorter.view(&s, "A").unwrap()), vec!["Борисов", "Аксенов", "Волков", "Гусев"]);
        sorter.sort(&s, "A", SortColumn::Goals);
        assert_eq!(names(&sorter.view(&s, "A").unwrap())[0], "Аксенов");
        assert!(sorter.sort(&s, "Z", SortColumn::Name).is_none());
        assert_eq!(sorter.cursors("Z"), SortCursors::default());
    }
}
