// src/csv.rs
use std::io::{self, Write};

use crate::config::consts::{PLAYER_HEADERS, REFEREE_HEADERS};
use crate::store::{PlayerRow, RefereeRow};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { write!(w, "{sep}")?; }
        let cell = cell.as_ref();
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Render headers (optional) and rows into one string.
pub fn rows_to_string(headers: Option<&[&str]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- Table shaping ---------------- */

/// `Team, Player, Games, Goals`
pub fn player_cells(team: &str, row: &PlayerRow) -> Vec<String> {
    vec![team.to_string(), row.name.clone(), row.games.to_string(), row.goals.to_string()]
}

/// `Referee, Games`
pub fn referee_cells(row: &RefereeRow) -> Vec<String> {
    vec![row.name.clone(), row.games.to_string()]
}

pub fn player_headers(include: bool) -> Option<&'static [&'static str]> {
    include.then_some(&PLAYER_HEADERS[..])
}

pub fn referee_headers(include: bool) -> Option<&'static [&'static str]> {
    include.then_some(&REFEREE_HEADERS[..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["СКА Од", "a,b", "say \"hi\""], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "СКА Од,\"a,b\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn tsv_does_not_quote_commas() {
        let rows = vec![vec!["a,b".to_string(), "1".to_string()]];
        assert_eq!(rows_to_string(referee_headers(true), &rows, '\t'), "Referee\tGames\na,b\t1\n");
    }

    #[test]
    fn player_cells_shape() {
        let row = PlayerRow { name: "Куксов".into(), games: 3, goals: 1 };
        assert_eq!(player_cells("ЗАРЯ", &row), vec!["ЗАРЯ", "Куксов", "3", "1"]);
    }
}
