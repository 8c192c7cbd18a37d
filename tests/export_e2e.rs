// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use ft_stats::config::consts::SAMPLE_BULLETIN;
use ft_stats::config::options::{ExportFormat, ExportOptions, ExportType, SortColumn};
use ft_stats::file;
use ft_stats::session::Session;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ft_stats_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample() -> Session {
    let mut s = Session::default();
    s.ingest(SAMPLE_BULLETIN);
    s
}

#[test]
fn single_file_with_headers() {
    let dir = tmp_dir("single");
    let mut export = ExportOptions::default();
    export.include_headers = true;
    export.set_path(dir.join("stats.csv").to_str().unwrap());

    let written = file::export_players(&sample(), &export).unwrap();
    assert_eq!(written, vec![dir.join("stats.csv")]);

    let text = fs::read_to_string(&written[0]).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Team,Player,Games,Goals"));
    assert_eq!(lines.next(), Some("ЗАРЯ,Кубышкин,1,0"));
    assert!(text.contains("ЗАРЯ,Колесников,1,1\n"));
    assert!(text.contains("МЕТАЛЛИСТ,Бачиашвили,1,2\n"));
    assert!(text.contains("СКА Од,Марусин,1,1\n"));
    // header + 12 + 14 + 14
    assert_eq!(text.lines().count(), 41);
}

#[test]
fn user_extension_survives_format_change() {
    let dir = tmp_dir("ext");
    let mut export = ExportOptions::default();
    export.set_path(dir.join("hello.txt").to_str().unwrap());
    export.format = ExportFormat::Tsv;

    let written = file::export_players(&sample(), &export).unwrap();
    assert!(written[0].to_string_lossy().ends_with("hello.txt"));
    let text = fs::read_to_string(&written[0]).unwrap();
    assert!(text.starts_with("ЗАРЯ\tКубышкин\t1\t0\n"));
}

#[test]
fn per_team_writes_one_file_each() {
    let dir = tmp_dir("per_team").join("teams");
    let mut export = ExportOptions::default();
    export.export_type = ExportType::PerTeam;
    export.set_path(dir.to_str().unwrap());

    let written = file::export_players(&sample(), &export).unwrap();
    assert_eq!(
        written,
        vec![dir.join("ЗАРЯ.csv"), dir.join("МЕТАЛЛИСТ.csv"), dir.join("СКА_Од.csv")]
    );
    let ska = fs::read_to_string(dir.join("СКА_Од.csv")).unwrap();
    assert_eq!(ska.lines().count(), 14);
    assert!(ska.lines().all(|l| l.starts_with("СКА Од,")));
}

#[test]
fn export_follows_current_sort() {
    let dir = tmp_dir("sorted");
    let mut s = sample();
    s.sort("ЗАРЯ", SortColumn::Goals);

    let mut export = ExportOptions::default();
    export.set_path(dir.join("sorted.csv").to_str().unwrap());
    file::export_players(&s, &export).unwrap();

    let text = fs::read_to_string(dir.join("sorted.csv")).unwrap();
    let first_three: Vec<&str> = text.lines().take(3).collect();
    assert_eq!(
        first_three,
        ["ЗАРЯ,Малышенко,1,1", "ЗАРЯ,Колесников,1,1", "ЗАРЯ,Куксов,1,1"]
    );
}

#[test]
fn referees_land_next_to_players() {
    let dir = tmp_dir("refs");
    let mut export = ExportOptions::default();
    export.include_headers = true;
    export.set_path(dir.join("stats.csv").to_str().unwrap());

    let path = file::export_referees(&sample(), &export).unwrap();
    assert_eq!(path, dir.join("referees.csv"));
    assert_eq!(fs::read_to_string(path).unwrap(), "Referee,Games\nЛушин,1\nХодеев,1\n");
}

#[test]
fn selected_team_only() {
    let dir = tmp_dir("one_team");
    let mut s = sample();
    s.sort("ЗАРЯ", SortColumn::Goals);

    let mut export = ExportOptions::default();
    export.set_path(dir.join("stats.csv").to_str().unwrap());
    let written = file::export_players_for(&s, &export, &["ЗАРЯ".to_string()]).unwrap();
    assert_eq!(written, vec![dir.join("stats.csv")]);

    let text = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(text.lines().count(), 12);
    assert!(text.lines().all(|l| l.starts_with("ЗАРЯ,")));
    assert_eq!(text.lines().next(), Some("ЗАРЯ,Малышенко,1,1"));
}

#[test]
fn selected_team_per_team_skips_unknown_names() {
    let dir = tmp_dir("one_team_dir").join("teams");
    let mut export = ExportOptions::default();
    export.export_type = ExportType::PerTeam;
    export.set_path(dir.to_str().unwrap());

    let teams = ["СКА Од".to_string(), "ДИНАМО".to_string()];
    let written = file::export_players_for(&sample(), &export, &teams).unwrap();
    assert_eq!(written, vec![dir.join("СКА_Од.csv")]);
}

#[test]
fn per_team_referees_sit_beside_team_directory() {
    let root = tmp_dir("per_team_refs");
    let mut export = ExportOptions::default();
    export.export_type = ExportType::PerTeam;
    export.set_path(root.join("teams").to_str().unwrap());

    let s = sample();
    file::export_players(&s, &export).unwrap();
    let path = file::export_referees(&s, &export).unwrap();
    assert_eq!(path, root.join("referees.csv"));
    assert!(!root.join("teams").join("referees.csv").exists());
}
