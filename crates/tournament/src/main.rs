//! Tournament CLI
//!
//! Create a league, draw fixtures, enter results and print the table.

use anyhow::{bail, Context, Result};
use league_core::ScoringConfig;
use std::env;
use std::path::{Path, PathBuf};
use tournament::{
    fixtures_table, load_file, parse_innings, parse_outcome, save_file, standings_json,
    standings_table, MatchReport, Reschedule, Tournament,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILE: &str = "tournament.json";

fn print_usage() {
    println!("Cricket League Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament new <name> --teams A,B,C [--venues X,Y] [--config scoring.toml] [--force]");
    println!("  tournament schedule [--force]");
    println!("  tournament fixtures [--round N]");
    println!("  tournament start <match-id>");
    println!("  tournament result <match-id> <outcome> [--team1 R/W@O] [--team2 R/W@O]");
    println!("  tournament penalty <team> <points> <reason...>");
    println!("  tournament standings [--json]");
    println!();
    println!("Options:");
    println!("  --file <path>   tournament file (default {}), before or after the command", DEFAULT_FILE);
    println!();
    println!("Outcomes: team1, team2, tie, nr, abandoned");
    println!("Teams may carry an owner: --teams Kings:Alice,Royals:Bob");
    println!();
    println!("Examples:");
    println!("  tournament new \"Summer Cup\" --teams Kings,Royals,Titans,Giants --venues Oval,Lords");
    println!("  tournament result 3f2a91c0 team2 --team1 98/10@14.2 --team2 99/2@10.4");
}

/// Value following `flag`, if present
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Positional arguments, skipping flags and their values
fn positionals(args: &[String]) -> Vec<&str> {
    const VALUE_FLAGS: [&str; 6] = ["--teams", "--venues", "--config", "--round", "--team1", "--team2"];
    let mut out = Vec::new();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if VALUE_FLAGS.contains(&arg) {
            i += 2;
            continue;
        }
        if !arg.starts_with("--") {
            out.push(arg);
        }
        i += 1;
    }
    out
}

fn load(path: &Path) -> Result<Tournament> {
    load_file(path).with_context(|| {
        format!(
            "failed to load {} (create one with `tournament new`)",
            path.display()
        )
    })
}

fn save(tournament: &Tournament, path: &Path) -> Result<()> {
    save_file(tournament, path).with_context(|| format!("failed to save {}", path.display()))
}

fn cmd_new(args: &[String], path: &Path) -> Result<()> {
    let Some(name) = positionals(args).first().copied() else {
        bail!("new requires a tournament name");
    };
    if path.exists() && !has_flag(args, "--force") {
        bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }

    let config = match flag_value(args, "--config") {
        Some(config_path) => ScoringConfig::load(Path::new(config_path))?,
        None => ScoringConfig::default(),
    };

    let mut tournament = Tournament::new(name, config);
    let teams = flag_value(args, "--teams").context("new requires --teams")?;
    for entry in teams.split(',').filter(|s| !s.trim().is_empty()) {
        let (team, owner) = entry.split_once(':').unwrap_or((entry, ""));
        tournament.add_team(team, owner.trim())?;
    }
    if let Some(venues) = flag_value(args, "--venues") {
        for venue in venues.split(',').filter(|s| !s.trim().is_empty()) {
            tournament.add_venue(venue)?;
        }
    }

    save(&tournament, path)?;
    println!(
        "Created {} with {} teams and {} venues",
        tournament.name,
        tournament.teams.len(),
        tournament.venues.len()
    );
    Ok(())
}

fn cmd_schedule(args: &[String], path: &Path) -> Result<()> {
    let mut tournament = load(path)?;
    let reschedule = if has_flag(args, "--force") {
        Reschedule::Replace
    } else {
        Reschedule::Keep
    };
    tournament
        .schedule(reschedule)
        .context("pass --force to discard the current fixtures and results")?;
    save(&tournament, path)?;
    print!("{}", fixtures_table(&tournament, None));
    Ok(())
}

fn cmd_fixtures(args: &[String], path: &Path) -> Result<()> {
    let tournament = load(path)?;
    let round = flag_value(args, "--round")
        .map(|r| r.parse::<u32>())
        .transpose()
        .context("--round must be a number")?;
    print!("{}", fixtures_table(&tournament, round));
    Ok(())
}

fn cmd_start(args: &[String], path: &Path) -> Result<()> {
    let mut tournament = load(path)?;
    let Some(key) = positionals(args).first().copied() else {
        bail!("start requires a match id");
    };
    let id = tournament.resolve_match(key)?;
    tournament.start_match(id)?;
    save(&tournament, path)
}

fn cmd_result(args: &[String], path: &Path) -> Result<()> {
    let mut tournament = load(path)?;
    let pos = positionals(args);
    if pos.len() < 2 {
        bail!("result requires a match id and an outcome");
    }

    let id = tournament.resolve_match(pos[0])?;
    let mut report = MatchReport::new(parse_outcome(pos[1])?);
    if let Some(score) = flag_value(args, "--team1") {
        report.team1_innings = Some(parse_innings(score)?);
    }
    if let Some(score) = flag_value(args, "--team2") {
        report.team2_innings = Some(parse_innings(score)?);
    }

    tournament.record_result(id, report)?;
    save(&tournament, path)?;
    print!("{}", standings_table(&tournament.standings()));
    Ok(())
}

fn cmd_penalty(args: &[String], path: &Path) -> Result<()> {
    let mut tournament = load(path)?;
    let pos = positionals(args);
    if pos.len() < 3 {
        bail!("penalty requires a team, points and a reason");
    }

    let team = tournament
        .team_by_name(pos[0])
        .map(|t| t.id)
        .with_context(|| format!("unknown team {:?}", pos[0]))?;
    let points: u32 = pos[1].parse().context("penalty points must be a whole number")?;
    let reason = pos[2..].join(" ");

    tournament.add_penalty(team, points, &reason)?;
    save(&tournament, path)
}

fn cmd_standings(args: &[String], path: &Path) -> Result<()> {
    let tournament = load(path)?;
    let standings = tournament.standings();
    if has_flag(args, "--json") {
        println!("{}", standings_json(&tournament, &standings)?);
    } else {
        println!("=== {} ===", tournament.name);
        println!(
            "{}/{} matches completed\n",
            tournament.completed_matches(),
            tournament.matches.len()
        );
        print!("{}", standings_table(&standings));
    }
    Ok(())
}

/// Split off the global `--file` option, which may appear before or after
/// the command.
fn split_global(args: &[String]) -> (PathBuf, Vec<String>) {
    let mut path = PathBuf::from(DEFAULT_FILE);
    let mut rest = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--file" {
            if let Some(value) = iter.next() {
                path = PathBuf::from(value);
            }
        } else {
            rest.push(arg.clone());
        }
    }
    (path, rest)
}

fn run(args: &[String]) -> Result<()> {
    let (path, rest) = split_global(&args[1..]);
    let Some((command, rest)) = rest.split_first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "new" => cmd_new(rest, &path),
        "schedule" => cmd_schedule(rest, &path),
        "fixtures" => cmd_fixtures(rest, &path),
        "start" => cmd_start(rest, &path),
        "result" => cmd_result(rest, &path),
        "penalty" => cmd_penalty(rest, &path),
        "standings" | "table" => cmd_standings(rest, &path),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {}", other)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod main_tests;
