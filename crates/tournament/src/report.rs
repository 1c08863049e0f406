//! Text and JSON reports

use league_core::{Match, MatchOutcome, MatchStatus, Standing, TeamId};
use serde::Serialize;

use crate::tournament::Tournament;

/// Render NRR the way points tables print it: always signed, three decimals.
pub fn format_nrr(nrr: f64) -> String {
    if nrr < 0.0 {
        format!("{:.3}", nrr)
    } else {
        format!("+{:.3}", nrr)
    }
}

/// Generate the points table as text
pub fn standings_table(standings: &[Standing]) -> String {
    let mut report = String::new();
    report.push_str(&format!(
        "{:>3}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>3} {:>5} {:>8}  {}\n",
        "#", "Team", "P", "W", "L", "T", "NR", "Pts", "NRR", "Form"
    ));
    report.push_str(&"-".repeat(72));
    report.push('\n');

    for (rank, s) in standings.iter().enumerate() {
        let form: Vec<_> = s.form.iter().map(|f| f.code()).collect();
        let points = if s.penalty_points > 0 {
            format!("{}*", s.points)
        } else {
            s.points.to_string()
        };
        report.push_str(&format!(
            "{:>3}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>3} {:>5} {:>8}  {}\n",
            rank + 1,
            s.team_name,
            s.played,
            s.won,
            s.lost,
            s.tied,
            s.no_result,
            points,
            format_nrr(s.net_run_rate),
            form.join(" ")
        ));
    }

    if standings.iter().any(|s| s.penalty_points > 0) {
        report.push_str("\n* points after penalty deductions\n");
    }

    report
}

/// One standings row as handed to downstream analysis
#[derive(Debug, Serialize)]
pub struct StandingSummary<'a> {
    pub rank: usize,
    pub team: &'a str,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    pub no_result: u32,
    pub points: i32,
    pub penalty_points: u32,
    pub net_run_rate: f64,
    pub form: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct StandingsExport<'a> {
    tournament: &'a str,
    matches_played: usize,
    matches_total: usize,
    table: Vec<StandingSummary<'a>>,
}

/// Structured standings for a commentary or analysis service
pub fn standings_json(tournament: &Tournament, standings: &[Standing]) -> serde_json::Result<String> {
    let table = standings
        .iter()
        .enumerate()
        .map(|(i, s)| StandingSummary {
            rank: i + 1,
            team: &s.team_name,
            played: s.played,
            won: s.won,
            lost: s.lost,
            tied: s.tied,
            no_result: s.no_result,
            points: s.points,
            penalty_points: s.penalty_points,
            net_run_rate: (s.net_run_rate * 1000.0).round() / 1000.0,
            form: s.form.iter().map(|f| f.code()).collect(),
        })
        .collect();

    serde_json::to_string_pretty(&StandingsExport {
        tournament: &tournament.name,
        matches_played: tournament.completed_matches(),
        matches_total: tournament.matches.len(),
        table,
    })
}

fn describe_result(tournament: &Tournament, m: &Match) -> String {
    let name = move |id: TeamId| {
        tournament
            .team(id)
            .map(|t| t.name.as_str())
            .unwrap_or("?")
    };
    match (m.status, m.result) {
        (MatchStatus::NotStarted, _) => String::new(),
        (MatchStatus::InProgress, _) => "in progress".to_string(),
        (MatchStatus::Completed, Some(MatchOutcome::Team1Win)) => format!("{} won", name(m.team1)),
        (MatchStatus::Completed, Some(MatchOutcome::Team2Win)) => format!("{} won", name(m.team2)),
        (MatchStatus::Completed, Some(MatchOutcome::Tie)) => "tied".to_string(),
        (MatchStatus::Completed, Some(MatchOutcome::NoResult)) => "no result".to_string(),
        (MatchStatus::Completed, Some(MatchOutcome::Abandoned)) => "abandoned".to_string(),
        (MatchStatus::Completed, None) => "completed (no result recorded)".to_string(),
    }
}

fn short_id(m: &Match) -> String {
    m.id.to_string()[..8].to_string()
}

/// Fixture list grouped by round. `round` limits output to one round.
pub fn fixtures_table(tournament: &Tournament, round: Option<u32>) -> String {
    let mut report = String::new();
    report.push_str(&format!("=== Fixtures: {} ===\n", tournament.name));

    let rounds: Vec<u32> = match round {
        Some(r) => vec![r],
        None => (1..=tournament.rounds()).collect(),
    };

    for r in rounds {
        report.push_str(&format!("\nRound {}\n", r));
        for m in tournament.fixtures_for_round(r) {
            let team = move |id: TeamId| {
                tournament
                    .team(id)
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| id.to_string())
            };
            let venue = m
                .venue
                .and_then(|v| tournament.venue(v))
                .map(|v| v.name.as_str())
                .unwrap_or("Neutral");
            report.push_str(&format!(
                "  {}  {:<20} vs {:<20} @ {:<16} {}\n",
                short_id(m),
                team(m.team1),
                team(m.team2),
                venue,
                describe_result(tournament, m)
            ));
        }
    }

    report
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
