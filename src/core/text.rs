// src/core/text.rs
//! Keyword-anchored slicing helpers.
//!
//! All offsets are byte offsets returned by `str::find`, so every slice lands
//! on a char boundary. Character-count trims go through `char_indices`.

/// Text strictly between the first `open` and the first `close` after it.
pub fn slice_between<'a>(s: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = s.find(open)? + open.len();
    let end = s[start..].find(close)? + start;
    Some(&s[start..end])
}

/// Text after the first occurrence of `pat`.
pub fn after<'a>(s: &'a str, pat: &str) -> Option<&'a str> {
    s.find(pat).map(|i| &s[i + pat.len()..])
}

/// Offset and length of the first pattern in `pats` present in `s`.
/// Patterns are tried in order; an earlier pattern wins even if it sits later in `s`.
pub fn find_first_of(s: &str, pats: &[&str]) -> Option<(usize, usize)> {
    pats.iter().find_map(|p| s.find(p).map(|i| (i, p.len())))
}

/// Drop `front` chars from the start and `back` chars from the end.
/// Returns "" when the string is too short.
pub fn trim_chars(s: &str, front: usize, back: usize) -> &str {
    let total = s.chars().count();
    if front + back >= total {
        return "";
    }
    let start = s.char_indices().nth(front).map(|(i, _)| i).unwrap_or(s.len());
    let end = s.char_indices().nth(total - back).map(|(i, _)| i).unwrap_or(s.len());
    &s[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_between_uses_first_close_after_open() {
        assert_eq!(slice_between("Судья – Лушин. Состав: X", "Судья", "Состав"), Some(" – Лушин. "));
        assert_eq!(slice_between("Состав Судья", "Судья", "Состав"), None);
    }

    #[test]
    fn find_first_of_prefers_order_over_position() {
        let s = "Голы: A 1. Гол: B 2";
        assert_eq!(find_first_of(s, &["Гол:", "Голы:"]).map(|(i, _)| i), s.find("Гол:"));
        assert_eq!(find_first_of("none", &["Гол:", "Голы:"]), None);
    }

    #[test]
    fn trim_chars_counts_chars_not_bytes() {
        assert_eq!(trim_chars(" – Лушин. ", 2, 2), " Лушин");
        assert_eq!(trim_chars("ab", 1, 1), "");
        assert_eq!(trim_chars("", 2, 2), "");
    }
}
