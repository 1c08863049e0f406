//! Match result entry

use league_core::{Innings, MatchOutcome};
use serde::{Deserialize, Serialize};

use crate::error::TournamentError;

/// Everything needed to close out a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub outcome: MatchOutcome,
    pub team1_innings: Option<Innings>,
    pub team2_innings: Option<Innings>,
}

impl MatchReport {
    pub fn new(outcome: MatchOutcome) -> Self {
        Self {
            outcome,
            team1_innings: None,
            team2_innings: None,
        }
    }

    pub fn with_innings(mut self, team1: Innings, team2: Innings) -> Self {
        self.team1_innings = Some(team1);
        self.team2_innings = Some(team2);
        self
    }

    /// Reject scorecards that cannot exist
    pub fn validate(&self) -> Result<(), TournamentError> {
        for innings in [&self.team1_innings, &self.team2_innings].into_iter().flatten() {
            validate_innings(innings)?;
        }
        Ok(())
    }
}

pub fn validate_innings(innings: &Innings) -> Result<(), TournamentError> {
    if innings.wickets > Innings::ALL_OUT {
        return Err(TournamentError::InvalidInnings(format!(
            "{} wickets is more than {}",
            innings.wickets,
            Innings::ALL_OUT
        )));
    }
    if !innings.overs.is_finite() || innings.overs < 0.0 {
        return Err(TournamentError::InvalidInnings(format!(
            "overs must be a non-negative number, got {}",
            innings.overs
        )));
    }
    let balls = ((innings.overs - innings.overs.trunc()) * 10.0).round();
    if balls > 6.0 {
        return Err(TournamentError::InvalidInnings(format!(
            "{} has {} balls in the last over",
            innings.overs, balls
        )));
    }
    Ok(())
}

/// Parse an outcome keyword as typed on the command line.
pub fn parse_outcome(s: &str) -> Result<MatchOutcome, TournamentError> {
    match s.to_lowercase().as_str() {
        "team1" | "t1" | "home" => Ok(MatchOutcome::Team1Win),
        "team2" | "t2" | "away" => Ok(MatchOutcome::Team2Win),
        "tie" | "tied" => Ok(MatchOutcome::Tie),
        "nr" | "no-result" | "noresult" => Ok(MatchOutcome::NoResult),
        "abandoned" | "ab" => Ok(MatchOutcome::Abandoned),
        other => Err(TournamentError::InvalidOutcome(format!(
            "unknown outcome {:?} (expected team1, team2, tie, nr or abandoned)",
            other
        ))),
    }
}

/// Parse a scorecard line like `151/4@18.3` (runs/wickets@overs).
/// Wickets may be omitted: `151@18.3`.
pub fn parse_innings(s: &str) -> Result<Innings, TournamentError> {
    let bad = || TournamentError::InvalidInnings(format!("expected runs/wickets@overs, got {:?}", s));

    let (score, overs) = s.trim().split_once('@').ok_or_else(bad)?;
    let (runs, wickets) = match score.split_once('/') {
        Some((runs, wickets)) => (runs, wickets),
        None => (score, "0"),
    };

    let innings = Innings::new(
        runs.trim().parse().map_err(|_| bad())?,
        wickets.trim().parse().map_err(|_| bad())?,
        overs.trim().parse().map_err(|_| bad())?,
    );
    validate_innings(&innings)?;
    Ok(innings)
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
