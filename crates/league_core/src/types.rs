//! League data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type TeamId = Uuid;
pub type VenueId = Uuid;
pub type MatchId = Uuid;

/// A participating team. Statistics are never stored here; they are derived
/// by [`compute_standings`](crate::compute_standings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub owner: String,
}

impl Team {
    pub fn new(name: &str, owner: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            owner: owner.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
}

impl Venue {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// Final outcome of a completed match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Team1Win,
    Team2Win,
    Tie,
    NoResult,
    Abandoned,
}

impl MatchOutcome {
    /// Whether the outcome allows run-rate figures to count.
    pub fn counts_for_run_rate(self) -> bool {
        !matches!(self, MatchOutcome::NoResult | MatchOutcome::Abandoned)
    }
}

/// One side's batting figures. `overs` uses overs.balls notation (19.4 is
/// nineteen overs and four balls).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Innings {
    pub runs: u32,
    pub wickets: u8,
    pub overs: f64,
}

impl Innings {
    pub const ALL_OUT: u8 = 10;

    pub fn new(runs: u32, wickets: u8, overs: f64) -> Self {
        Self {
            runs,
            wickets,
            overs,
        }
    }

    pub fn is_all_out(&self) -> bool {
        self.wickets >= Self::ALL_OUT
    }
}

/// Which slot of a fixture a team occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Team1,
    Team2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// 1-based round number
    pub round: u32,
    pub team1: TeamId,
    pub team2: TeamId,
    /// `None` means a neutral venue
    pub venue: Option<VenueId>,
    pub status: MatchStatus,
    pub result: Option<MatchOutcome>,
    pub team1_innings: Option<Innings>,
    pub team2_innings: Option<Innings>,
}

impl Match {
    pub fn new(round: u32, team1: TeamId, team2: TeamId, venue: Option<VenueId>) -> Self {
        debug_assert!(round >= 1);
        debug_assert_ne!(team1, team2);
        Self {
            id: Uuid::new_v4(),
            round,
            team1,
            team2,
            venue,
            status: MatchStatus::NotStarted,
            result: None,
            team1_innings: None,
            team2_innings: None,
        }
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.team1 == team || self.team2 == team
    }

    pub fn side_of(&self, team: TeamId) -> Option<Side> {
        if self.team1 == team {
            Some(Side::Team1)
        } else if self.team2 == team {
            Some(Side::Team2)
        } else {
            None
        }
    }

    pub fn opponent_of(&self, team: TeamId) -> Option<TeamId> {
        match self.side_of(team)? {
            Side::Team1 => Some(self.team2),
            Side::Team2 => Some(self.team1),
        }
    }

    /// Innings of the given side, followed by the opposing innings.
    pub fn innings_for(&self, side: Side) -> (Option<Innings>, Option<Innings>) {
        match side {
            Side::Team1 => (self.team1_innings, self.team2_innings),
            Side::Team2 => (self.team2_innings, self.team1_innings),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// `Completed` must carry an outcome; other states must not.
    pub fn is_consistent(&self) -> bool {
        self.team1 != self.team2
            && self.round >= 1
            && (self.status == MatchStatus::Completed) == self.result.is_some()
    }
}

/// A flat deduction against a team's points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyRecord {
    pub team: TeamId,
    pub points: u32,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}

impl PenaltyRecord {
    pub fn new(team: TeamId, points: u32, reason: &str) -> Self {
        Self {
            team,
            points,
            reason: reason.to_string(),
            timestamp: Utc::now(),
        }
    }
}
