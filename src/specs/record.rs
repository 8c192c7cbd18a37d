// src/specs/record.rs

use log::warn;

use crate::config::options::ParseOptions;
use crate::error::ParseErrorKind;

use super::fields::*;

/// One team's participation in one fixture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    /// 1-based line number; both halves of a double match-up share it.
    pub fixture: usize,
    pub team_name: String,
    /// Raw text before the score (display only).
    pub match_label: String,
    pub referee: String,
    pub roster: Vec<String>,
    /// One entry per goal.
    pub scorers: Vec<String>,
}

/// Turn one report line into one record, or two for a double match-up.
///
/// A line with more than one quoted team is a double match-up: the combined
/// roster is split at the first divider token and each scorer goes to the
/// first team if that team's roster contains the name, otherwise to the second.
/// Shared surnames across both rosters therefore always credit the first team.
pub fn build_records(
    line_no: usize,
    line: &str,
    opts: &ParseOptions,
) -> Result<Vec<MatchRecord>, ParseErrorKind> {
    let match_label = extract_match_label(line)?;
    let team_names = extract_team_names(line, opts.quote)?;
    let referee = extract_referee(line)?;
    let roster = extract_roster(line, &opts.divider).unwrap_or_default();
    let scorers = extract_scorers(line).unwrap_or_default();

    let base = MatchRecord {
        fixture: line_no,
        team_name: String::new(),
        match_label,
        referee,
        roster: Vec::new(),
        scorers: Vec::new(),
    };

    if team_names.len() > 1 {
        build_double(base, team_names, roster, scorers, opts)
    } else {
        build_single(base, roster, scorers, opts)
    }
}

fn build_single(
    mut record: MatchRecord,
    roster: Vec<String>,
    scorers: Vec<String>,
    opts: &ParseOptions,
) -> Result<Vec<MatchRecord>, ParseErrorKind> {
    // The tracked team is the one quoted inside the label, not elsewhere on the line.
    record.team_name = extract_team_names(&record.match_label, opts.quote)
        .ok()
        .and_then(|names| names.into_iter().next())
        .filter(|name| !name.is_empty())
        .ok_or(ParseErrorKind::EmptyTeamName)?;
    record.roster = roster.into_iter().filter(|t| *t != opts.divider).collect();
    record.scorers = scorers;
    Ok(vec![record])
}

fn build_double(
    base: MatchRecord,
    team_names: Vec<String>,
    roster: Vec<String>,
    scorers: Vec<String>,
    opts: &ParseOptions,
) -> Result<Vec<MatchRecord>, ParseErrorKind> {
    if team_names.len() > 2 {
        warn!(
            "line {}: {} quoted teams, using the first two ({:?})",
            base.fixture,
            team_names.len(),
            &team_names[..2]
        );
    }
    if team_names[..2].iter().any(|name| name.is_empty()) {
        return Err(ParseErrorKind::EmptyTeamName);
    }

    let k = roster
        .iter()
        .position(|t| *t == opts.divider)
        .ok_or(ParseErrorKind::DividerNotFoundInDoubleHeader)?;
    let roster_1 = roster[..k].to_vec();
    let roster_2 = roster[k + 1..].to_vec();

    let (scorers_1, scorers_2): (Vec<String>, Vec<String>) =
        scorers.into_iter().partition(|s| roster_1.contains(s));

    let mut names = team_names.into_iter();
    let first = MatchRecord {
        team_name: names.next().unwrap_or_default(),
        roster: roster_1,
        scorers: scorers_1,
        ..base.clone()
    };
    let second = MatchRecord {
        team_name: names.next().unwrap_or_default(),
        roster: roster_2,
        scorers: scorers_2,
        ..base
    };
    Ok(vec![first, second])
}
