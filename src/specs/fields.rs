// src/specs/fields.rs
//! Field extractors for a single report line.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::*;
use crate::core::sanitize::{has_letter, normalize_ws, split_tokens, strip_parens};
use crate::core::text::{after, find_first_of, slice_between, trim_chars};
use crate::error::ParseErrorKind;

/// "– 3-1": en dash, whitespace, digits-digits.
static SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"–\s+\d+-\d+").expect("score regex compiles"));

/// Everything before the score, e.g. `"ЗАРЯ" – УРАЛМАШ`.
pub fn extract_match_label(line: &str) -> Result<String, ParseErrorKind> {
    let m = SCORE_RE.find(line).ok_or(ParseErrorKind::MissingScorePattern)?;
    Ok(line[..m.start()].trim().to_string())
}

/// Every `quote`-delimited span, in order of appearance.
pub fn extract_team_names(line: &str, quote: char) -> Result<Vec<String>, ParseErrorKind> {
    let parts: Vec<&str> = line.split(quote).collect();
    if parts.len() % 2 == 0 {
        // n markers split into n + 1 parts; an even part count means an odd marker count
        return Err(ParseErrorKind::UnbalancedTeamQuotes);
    }
    Ok(parts.iter().skip(1).step_by(2).map(|s| normalize_ws(s)).collect())
}

/// Name between "Судья" and "Состав", minus the " –" lead-in and ". " tail.
pub fn extract_referee(line: &str) -> Result<String, ParseErrorKind> {
    let between = slice_between(line, REFEREE_KEYWORD, ROSTER_KEYWORD)
        .ok_or(ParseErrorKind::RefereeNotFound)?;
    let name = trim_chars(between, REFEREE_EDGE_TRIM, REFEREE_EDGE_TRIM).trim();
    if name.is_empty() {
        return Err(ParseErrorKind::RefereeNotFound);
    }
    Ok(name.to_string())
}

/// Surnames after "Состав", up to the scorer keyword.
///
/// Substitutions keep both names (`Шаленко (Улинец, 67)` gives two tokens), minute
/// numbers and stray punctuation are dropped, and `divider` tokens are kept so a
/// double match-up can be split later. `None` if the line has no roster keyword.
pub fn extract_roster(line: &str, divider: &str) -> Option<Vec<String>> {
    let body = after(line, ROSTER_KEYWORD)?;
    let body = body.strip_prefix(':').unwrap_or(body);
    let end = find_first_of(body, &[GOAL_KEYWORD, GOALS_KEYWORD])
        .map(|(i, _)| i)
        .unwrap_or(body.len());

    let cleaned = strip_parens(&body[..end]).replace(';', "");
    let tokens = split_tokens(&cleaned)
        .map(|t| t.trim_end_matches('.'))
        .filter(|t| !t.is_empty() && (has_letter(t) || *t == divider))
        .map(str::to_string)
        .collect();
    Some(tokens)
}

/// Surnames after "Голы:" (or "Гол:"), one entry per goal.
/// `None` if the line lists no scorers.
pub fn extract_scorers(line: &str) -> Option<Vec<String>> {
    let body = after(line, GOALS_KEYWORD).or_else(|| after(line, GOAL_KEYWORD))?;
    let body = body.trim();
    let body = body.strip_suffix('.').unwrap_or(body);
    let tokens = split_tokens(body)
        .filter(|t| has_letter(t))
        .map(str::to_string)
        .collect();
    Some(tokens)
}
