// src/store.rs
//! Aggregate tables built from match records.
//!
//! - `TeamTable`: player → games/goals for one team, in first-seen order.
//! - `StatStore`: every team's table plus the referee table.
//!
//! Entries are created on first appearance and only ever incremented. Sorting
//! never touches this data; it works on row snapshots (see `sort`).

use indexmap::IndexMap;
use log::debug;

use crate::specs::MatchRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerStat {
    pub games: u32,
    pub goals: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefereeStat {
    pub games: u32,
}

/// Owned row of a team table snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRow {
    pub name: String,
    pub games: u32,
    pub goals: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefereeRow {
    pub name: String,
    pub games: u32,
}

#[derive(Clone, Debug, Default)]
pub struct TeamTable {
    players: IndexMap<String, PlayerStat>,
}

impl TeamTable {
    pub fn get(&self, player: &str) -> Option<&PlayerStat> { self.players.get(player) }
    pub fn len(&self) -> usize { self.players.len() }
    pub fn is_empty(&self) -> bool { self.players.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlayerStat)> {
        self.players.iter().map(|(name, stat)| (name.as_str(), stat))
    }

    /// Snapshot in first-seen order.
    pub fn rows(&self) -> Vec<PlayerRow> {
        self.iter()
            .map(|(name, s)| PlayerRow { name: name.to_string(), games: s.games, goals: s.goals })
            .collect()
    }

    fn appear(&mut self, player: &str) {
        self.players.entry(player.to_string()).or_default().games += 1;
    }

    /// Credit a goal; players missing from the table are ignored.
    fn score(&mut self, player: &str) -> bool {
        match self.players.get_mut(player) {
            Some(stat) => { stat.goals += 1; true }
            None => false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct StatStore {
    teams: IndexMap<String, TeamTable>,
    referees: IndexMap<String, RefereeStat>,
}

impl StatStore {
    pub fn new() -> Self { Self::default() }

    pub fn clear(&mut self) {
        self.teams.clear();
        self.referees.clear();
    }

    pub fn is_empty(&self) -> bool { self.teams.is_empty() && self.referees.is_empty() }

    /// Fold records into the tables, in order. Calling twice with the same
    /// records counts them twice.
    ///
    /// The referee is counted once per fixture, so both halves of a double
    /// match-up add a single game.
    pub fn ingest(&mut self, records: &[MatchRecord]) {
        let mut last_fixture = None;
        for rec in records {
            if last_fixture != Some(rec.fixture) {
                self.referees.entry(rec.referee.clone()).or_default().games += 1;
                last_fixture = Some(rec.fixture);
            }

            let table = self.teams.entry(rec.team_name.clone()).or_default();
            for player in &rec.roster {
                table.appear(player);
            }
            for scorer in &rec.scorers {
                if !table.score(scorer) {
                    debug!("line {}: scorer {scorer} not in {} roster, ignored", rec.fixture, rec.team_name);
                }
            }
        }
    }

    pub fn team(&self, name: &str) -> Option<&TeamTable> { self.teams.get(name) }

    /// Team names in first-seen order.
    pub fn team_names(&self) -> impl Iterator<Item = &str> {
        self.teams.keys().map(String::as_str)
    }

    pub fn team_count(&self) -> usize { self.teams.len() }

    pub fn referee(&self, name: &str) -> Option<&RefereeStat> { self.referees.get(name) }

    pub fn referee_rows(&self) -> Vec<RefereeRow> {
        self.referees
            .iter()
            .map(|(name, s)| RefereeRow { name: name.clone(), games: s.games })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(fixture: usize, team: &str, referee: &str, roster: &[&str], scorers: &[&str]) -> MatchRecord {
        MatchRecord {
            fixture,
            team_name: team.into(),
            match_label: String::new(),
            referee: referee.into(),
            roster: roster.iter().map(|s| s.to_string()).collect(),
            scorers: scorers.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn double_match_up_aggregates_both_teams_and_one_referee_game() {
        let mut store = StatStore::new();
        store.ingest(&[
            rec(1, "A", "X", &["P1", "P2"], &["P1"]),
            rec(1, "B", "X", &["P3", "P4"], &["P3"]),
        ]);

        let a = store.team("A").unwrap();
        assert_eq!(a.get("P1"), Some(&PlayerStat { games: 1, goals: 1 }));
        assert_eq!(a.get("P2"), Some(&PlayerStat { games: 1, goals: 0 }));
        let b = store.team("B").unwrap();
        assert_eq!(b.get("P3"), Some(&PlayerStat { games: 1, goals: 1 }));
        assert_eq!(b.get("P4"), Some(&PlayerStat { games: 1, goals: 0 }));
        assert_eq!(store.referee("X"), Some(&RefereeStat { games: 1 }));
    }

    #[test]
    fn scorer_outside_roster_creates_nothing() {
        let mut store = StatStore::new();
        store.ingest(&[rec(1, "A", "X", &["P1"], &["Z"])]);
        let a = store.team("A").unwrap();
        assert_eq!(a.len(), 1);
        assert!(a.get("Z").is_none());
        assert_eq!(a.get("P1").unwrap().goals, 0);
    }

    #[test]
    fn goal_counts_against_earlier_appearance() {
        let mut store = StatStore::new();
        store.ingest(&[
            rec(1, "A", "X", &["P1"], &[]),
            rec(2, "A", "Y", &["P2"], &["P1"]),
        ]);
        assert_eq!(store.team("A").unwrap().get("P1"), Some(&PlayerStat { games: 1, goals: 1 }));
    }

    #[test]
    fn duplicate_roster_entries_count_twice() {
        let mut store = StatStore::new();
        store.ingest(&[rec(1, "A", "X", &["P1", "P1"], &["P1", "P1", "P1"])]);
        assert_eq!(store.team("A").unwrap().get("P1"), Some(&PlayerStat { games: 2, goals: 3 }));
    }

    #[test]
    fn ingesting_twice_double_counts() {
        let records = [rec(1, "A", "X", &["P1"], &["P1"])];
        let mut store = StatStore::new();
        store.ingest(&records);
        store.ingest(&records);
        assert_eq!(store.team("A").unwrap().get("P1"), Some(&PlayerStat { games: 2, goals: 2 }));
        assert_eq!(store.referee("X").unwrap().games, 2);
    }

    #[test]
    fn first_seen_order_is_kept() {
        let mut store = StatStore::new();
        store.ingest(&[
            rec(1, "Б", "Y", &["Я", "А"], &[]),
            rec(2, "А", "X", &["М"], &[]),
        ]);
        assert_eq!(store.team_names().collect::<Vec<_>>(), vec!["Б", "А"]);
        let names: Vec<String> = store.team("Б").unwrap().rows().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Я", "А"]);
        let refs: Vec<String> = store.referee_rows().into_iter().map(|r| r.name).collect();
        assert_eq!(refs, vec!["Y", "X"]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut store = StatStore::new();
        store.ingest(&[rec(1, "A", "X", &["P1"], &[])]);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.team_count(), 0);
    }
}
