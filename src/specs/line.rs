// src/specs/line.rs

use crate::config::consts::{REFEREE_KEYWORD, ROSTER_KEYWORD};

/// A line is a match report only if it names both a referee and a roster.
/// Round headers ("1 ТУР"), blank lines and section markers fail this silently.
pub fn is_report_line(line: &str) -> bool {
    line.contains(REFEREE_KEYWORD) && line.contains(ROSTER_KEYWORD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_both_keywords() {
        assert!(is_report_line("\"ЗАРЯ\" – 1-0. Судья – Лушин. Состав: Кубышкин."));
        assert!(!is_report_line("1 ТУР"));
        assert!(!is_report_line(""));
        assert!(!is_report_line("\"ЗАРЯ\" – 1-0. Состав: Кубышкин."));
        assert!(!is_report_line("Судья – Лушин."));
    }
}
