//! Standings and net run rate
//!
//! Standings are derived from scratch on every call; nothing is cached or
//! written back onto the teams.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use tracing::{debug, warn};

use crate::config::ScoringConfig;
use crate::overs::{effective_balls, BALLS_PER_OVER};
use crate::types::{Match, MatchOutcome, PenaltyRecord, Side, Team, TeamId};

/// Number of recent results kept in a team's form guide
pub const FORM_LENGTH: usize = 5;

/// Result of one match from a single team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormResult {
    Win,
    Loss,
    Tie,
    NoResult,
    Abandoned,
}

impl FormResult {
    pub fn from_outcome(outcome: MatchOutcome, side: Side) -> Self {
        match (outcome, side) {
            (MatchOutcome::Team1Win, Side::Team1) | (MatchOutcome::Team2Win, Side::Team2) => {
                FormResult::Win
            }
            (MatchOutcome::Team1Win, Side::Team2) | (MatchOutcome::Team2Win, Side::Team1) => {
                FormResult::Loss
            }
            (MatchOutcome::Tie, _) => FormResult::Tie,
            (MatchOutcome::NoResult, _) => FormResult::NoResult,
            (MatchOutcome::Abandoned, _) => FormResult::Abandoned,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            FormResult::Win => "W",
            FormResult::Loss => "L",
            FormResult::Tie => "T",
            FormResult::NoResult => "NR",
            FormResult::Abandoned => "A",
        }
    }
}

impl fmt::Display for FormResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Accumulated run-rate inputs for one team.
///
/// Overs are kept as whole balls so that equal figures give bit-identical
/// rates regardless of how they were split across matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLedger {
    pub runs_for: u64,
    pub balls_faced: u64,
    pub runs_against: u64,
    pub balls_bowled: u64,
}

impl TeamLedger {
    pub fn overs_faced(&self) -> f64 {
        self.balls_faced as f64 / BALLS_PER_OVER as f64
    }

    pub fn overs_bowled(&self) -> f64 {
        self.balls_bowled as f64 / BALLS_PER_OVER as f64
    }

    /// Runs per over scored minus runs per over conceded. Zero until the team
    /// has both batted and bowled.
    pub fn net_run_rate(&self) -> f64 {
        if self.balls_faced == 0 || self.balls_bowled == 0 {
            return 0.0;
        }
        let per_over = |runs: u64, balls: u64| runs as f64 * BALLS_PER_OVER as f64 / balls as f64;
        per_over(self.runs_for, self.balls_faced) - per_over(self.runs_against, self.balls_bowled)
    }

    fn add_innings(&mut self, batted: (u32, u64), bowled: (u32, u64)) {
        self.runs_for = self.runs_for.saturating_add(batted.0 as u64);
        self.balls_faced = self.balls_faced.saturating_add(batted.1);
        self.runs_against = self.runs_against.saturating_add(bowled.0 as u64);
        self.balls_bowled = self.balls_bowled.saturating_add(bowled.1);
    }
}

/// One row of the points table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub team: TeamId,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    /// No results and abandoned matches
    pub no_result: u32,
    /// Points after penalties, never below zero
    pub points: i32,
    pub penalty_points: u32,
    pub net_run_rate: f64,
    /// Most recent result first
    pub form: Vec<FormResult>,
    pub ledger: TeamLedger,
}

#[derive(Default)]
struct Tally {
    played: u32,
    won: u32,
    lost: u32,
    tied: u32,
    no_result: u32,
    points: i64,
    recent: VecDeque<FormResult>,
    ledger: TeamLedger,
}

impl Tally {
    fn record(&mut self, result: FormResult, config: &ScoringConfig) {
        self.played += 1;
        let points = match result {
            FormResult::Win => {
                self.won += 1;
                config.points_for_win
            }
            FormResult::Loss => {
                self.lost += 1;
                config.points_for_loss
            }
            FormResult::Tie => {
                self.tied += 1;
                config.points_for_draw
            }
            FormResult::NoResult | FormResult::Abandoned => {
                self.no_result += 1;
                config.points_for_draw
            }
        };
        self.points += points as i64;

        self.recent.push_front(result);
        self.recent.truncate(FORM_LENGTH);
    }
}

/// Compute the ranked points table.
///
/// Only completed matches with an outcome count. Run-rate figures are taken
/// from decided or tied matches that have both innings recorded; an all-out
/// innings is charged the full `overs_per_match`. Penalties are subtracted
/// last and the total is floored at zero.
pub fn compute_standings(
    teams: &[Team],
    matches: &[Match],
    penalties: &[PenaltyRecord],
    config: &ScoringConfig,
) -> Vec<Standing> {
    let mut tallies: HashMap<TeamId, Tally> =
        teams.iter().map(|t| (t.id, Tally::default())).collect();

    for m in matches.iter().filter(|m| m.is_completed()) {
        let Some(outcome) = m.result else {
            warn!(match_id = %m.id, "completed match has no result, skipping");
            continue;
        };

        for side in [Side::Team1, Side::Team2] {
            let team = match side {
                Side::Team1 => m.team1,
                Side::Team2 => m.team2,
            };
            if let Some(tally) = tallies.get_mut(&team) {
                tally.record(FormResult::from_outcome(outcome, side), config);
            }
        }

        if outcome.counts_for_run_rate() {
            accumulate_run_rate(&mut tallies, m, config.overs_per_match);
        }
    }

    let mut deductions: HashMap<TeamId, u32> = HashMap::new();
    for penalty in penalties {
        let total = deductions.entry(penalty.team).or_insert(0);
        *total = total.saturating_add(penalty.points);
    }

    let mut standings: Vec<Standing> = teams
        .iter()
        .map(|team| {
            let tally = tallies.remove(&team.id).unwrap_or_default();
            let penalty_points = deductions.get(&team.id).copied().unwrap_or(0);
            let points = (tally.points - penalty_points as i64).clamp(0, i32::MAX as i64) as i32;
            Standing {
                team: team.id,
                team_name: team.name.clone(),
                played: tally.played,
                won: tally.won,
                lost: tally.lost,
                tied: tally.tied,
                no_result: tally.no_result,
                points,
                penalty_points,
                net_run_rate: tally.ledger.net_run_rate(),
                form: tally.recent.into_iter().collect(),
                ledger: tally.ledger,
            }
        })
        .collect();

    standings.sort_by(compare_standings);
    debug!(teams = standings.len(), matches = matches.len(), "computed standings");
    standings
}

/// Add both sides' run-rate figures for one match. Missing innings, or an
/// all-out innings with no overs limit, leave the ledgers untouched.
fn accumulate_run_rate(tallies: &mut HashMap<TeamId, Tally>, m: &Match, overs_limit: u32) {
    let (Some(first), Some(second)) = (m.team1_innings, m.team2_innings) else {
        return;
    };
    let (Some(first_balls), Some(second_balls)) = (
        effective_balls(&first, overs_limit),
        effective_balls(&second, overs_limit),
    ) else {
        return;
    };
    let first = (first.runs, first_balls);
    let second = (second.runs, second_balls);

    if let Some(tally) = tallies.get_mut(&m.team1) {
        tally.ledger.add_innings(first, second);
    }
    if let Some(tally) = tallies.get_mut(&m.team2) {
        tally.ledger.add_innings(second, first);
    }
}

/// Ranking order: points, net run rate, wins (all descending), then name
/// ascending. Team id settles the order if two names collide.
pub fn compare_standings(a: &Standing, b: &Standing) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.net_run_rate.total_cmp(&a.net_run_rate))
        .then_with(|| b.won.cmp(&a.won))
        .then_with(|| a.team_name.cmp(&b.team_name))
        .then_with(|| a.team.cmp(&b.team))
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
