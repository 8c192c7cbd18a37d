// src/error.rs
//! Typed parse failures for bulletin lines.
//!
//! Extraction never panics on malformed text: each extractor returns a
//! `ParseErrorKind`, and the session turns it into a `LineError` that keeps
//! the line number and raw text for display.

use thiserror::Error;

/// Why a report line could not be turned into match records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ParseErrorKind {
    /// No "– N-N" score after the match-up label.
    #[error("score pattern not found")]
    MissingScorePattern,

    /// Odd number of team quote markers on the line.
    #[error("team name quotes are not balanced")]
    UnbalancedTeamQuotes,

    /// Referee keyword missing, out of order with the roster, or the name is blank.
    #[error("referee not found")]
    RefereeNotFound,

    /// Two quoted teams but no divider between their rosters.
    #[error("roster divider not found in double match-up")]
    DividerNotFoundInDoubleHeader,

    /// No usable quoted team name.
    #[error("team name is empty")]
    EmptyTeamName,
}

/// One errored input line, as surfaced to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line {line_no}: {kind}")]
pub struct LineError {
    /// 1-based line number in the ingested text.
    pub line_no: usize,
    pub raw: String,
    pub kind: ParseErrorKind,
}

impl LineError {
    pub fn new(line_no: usize, raw: &str, kind: ParseErrorKind) -> Self {
        Self { line_no, raw: raw.to_string(), kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_error_display_includes_number_and_kind() {
        let e = LineError::new(7, "\"ЗАРЯ\" Судья Состав", ParseErrorKind::MissingScorePattern);
        assert_eq!(e.to_string(), "line 7: score pattern not found");
    }
}
