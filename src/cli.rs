// src/cli.rs
use std::{
    env,
    error::Error,
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use log::LevelFilter;

use crate::config::consts::{LOG_FILE, SAMPLE_BULLETIN};
use crate::config::options::{ExportOptions, ExportType, ParseOptions};
use crate::csv::{player_cells, player_headers, referee_cells, referee_headers, rows_to_string};
use crate::file;
use crate::params::Params;
use crate::session::Session;

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli(env::args().skip(1))?;
    let _ = crate::logging::init(LOG_FILE, params.log_level);

    let text = read_input(&params)?;
    let mut session = Session::new(ParseOptions::with_quote(params.quote));
    let summary = session.ingest(&text);

    for e in session.errors() {
        eprintln!("line {}: {}: {}", e.line_no, e.kind, e.raw.trim());
    }
    eprintln!(
        "{} report line(s), {} team(s), {} referee(s), {} error(s)",
        summary.report_lines,
        session.team_count(),
        session.referee_table().len(),
        summary.errors
    );

    let teams = match &params.team {
        Some(t) if session.team(t).is_none() => return Err(format!("Unknown team: {t}").into()),
        Some(t) => vec![t.clone()],
        None => session.teams(),
    };
    for team in &teams {
        for &col in &params.sorts {
            session.sort(team, col);
        }
    }

    match &params.out {
        Some(out) => write_files(&session, &params, &teams, out),
        None => {
            print_tables(&session, &params, &teams);
            Ok(())
        }
    }
}

fn read_input(params: &Params) -> Result<String, Box<dyn Error>> {
    if params.example {
        return Ok(SAMPLE_BULLETIN.to_string());
    }
    match params.input.as_deref() {
        Some(p) if p.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(p) => Ok(fs::read_to_string(p)?),
        None => Err("Specify a bulletin file, '-' for stdin, or --example".into()),
    }
}

fn export_options(params: &Params, out: &Path) -> ExportOptions {
    let mut export = ExportOptions::default();
    export.format = params.format;
    export.export_type = if params.per_team { ExportType::PerTeam } else { ExportType::SingleFile };
    export.include_headers = params.include_headers;
    export.set_path(&out.to_string_lossy());
    export
}

fn write_files(
    session: &Session,
    params: &Params,
    teams: &[String],
    out: &Path,
) -> Result<(), Box<dyn Error>> {
    let export = export_options(params, out);
    for path in file::export_players_for(session, &export, teams)? {
        println!("Wrote {}", path.display());
    }
    if params.referees {
        let path = file::export_referees(session, &export)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn print_tables(session: &Session, params: &Params, teams: &[String]) {
    let sep = params.format.delim();
    let rows: Vec<Vec<String>> = teams
        .iter()
        .flat_map(|team| {
            session
                .view(team)
                .unwrap_or_default()
                .iter()
                .map(|row| player_cells(team, row))
                .collect::<Vec<_>>()
        })
        .collect();
    print!("{}", rows_to_string(player_headers(params.include_headers), &rows, sep));

    if params.referees {
        let rows: Vec<Vec<String>> = session.referee_table().iter().map(referee_cells).collect();
        println!();
        print!("{}", rows_to_string(referee_headers(params.include_headers), &rows, sep));
    }
}

pub fn parse_cli<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--example" => params.example = true,
            "--quote" => {
                let v = args.next().ok_or("Missing value for --quote")?;
                let mut chars = v.chars();
                params.quote = match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_alphanumeric() => c,
                    _ => return Err(format!("Quote marker must be one non-alphanumeric character: {v}").into()),
                };}
            "--team" => params.team = Some(args.next().ok_or("Missing team name")?),
            "--sort" => {
                let v = args.next().ok_or("Missing value for --sort")?;
                params.sorts.push(v.parse()?);}
            "--referees" => params.referees = true,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = v.parse()?;}
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--per-team" => params.per_team = true,
            "--include-headers" => params.include_headers = true,
            "--log-level" => {
                let v = args.next().ok_or("Missing value for --log-level")?;
                params.log_level = v.parse::<LevelFilter>().map_err(|_| format!("Unknown log level: {v}"))?;}
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(format!("Unknown arg: {other}").into());
            }
            _ => {
                if params.input.is_some() {
                    return Err(format!("Unexpected extra input: {a}").into());
                }
                params.input = Some(PathBuf::from(a));
            }
        }
    }

    if params.per_team && params.out.is_none() {
        return Err("--per-team needs -o <directory>".into());
    }
    Ok(params)
}
