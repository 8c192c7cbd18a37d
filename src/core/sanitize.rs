// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// True if the token carries at least one letter (i.e. could be a surname).
pub fn has_letter(token: &str) -> bool {
    token.chars().any(char::is_alphabetic)
}

/// Remove `(` and `)` but keep what they enclose: "Шаленко (Улинец, 67)" → "Шаленко Улинец, 67".
pub fn strip_parens(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '(' | ')')).collect()
}

/// Split on commas, then on whitespace, flattening into one token list.
pub fn split_tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').flat_map(str::split_whitespace)
}

/// File-name safe stem for a team. Keeps letters of any script.
pub fn sanitize_team_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' { if !(last_us && ch == '_') { out.push(ch); } last_us = ch == '_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { "team".to_string() } else { out }
}
