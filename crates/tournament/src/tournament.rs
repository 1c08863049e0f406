//! Tournament aggregate: roster, fixtures, results and penalties

use chrono::{DateTime, Utc};
use league_core::{
    compute_standings, generate_schedule_with_rng, Match, MatchId, MatchStatus, PenaltyRecord,
    ScoringConfig, Standing, Team, TeamId, Venue, VenueId,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::TournamentError;
use crate::results::MatchReport;

/// Confirmation for [`Tournament::schedule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reschedule {
    /// Refuse if fixtures already exist
    Keep,
    /// Throw away existing fixtures and results
    Replace,
}

/// Complete state of one tournament. This is the unit that gets persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: Uuid,
    pub name: String,
    pub teams: Vec<Team>,
    pub venues: Vec<Venue>,
    /// Fixtures in schedule order
    pub matches: Vec<Match>,
    pub penalties: Vec<PenaltyRecord>,
    pub config: ScoringConfig,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    pub fn new(name: &str, config: ScoringConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            teams: Vec::new(),
            venues: Vec::new(),
            matches: Vec::new(),
            penalties: Vec::new(),
            config,
            created_at: Utc::now(),
        }
    }

    pub fn is_scheduled(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Add a team. Names must be unique (case-insensitive) since they break
    /// ranking ties.
    pub fn add_team(&mut self, name: &str, owner: &str) -> Result<TeamId, TournamentError> {
        if self.is_scheduled() {
            return Err(TournamentError::RosterLocked);
        }
        let name = name.trim();
        if self.team_by_name(name).is_some() {
            return Err(TournamentError::DuplicateTeamName {
                name: name.to_string(),
            });
        }
        let team = Team::new(name, owner);
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    pub fn add_venue(&mut self, name: &str) -> Result<VenueId, TournamentError> {
        if self.is_scheduled() {
            return Err(TournamentError::RosterLocked);
        }
        let venue = Venue::new(name.trim());
        let id = venue.id;
        self.venues.push(venue);
        Ok(id)
    }

    /// Build the round-robin fixture list.
    ///
    /// Fails with `AlreadyScheduled` when fixtures exist unless the caller
    /// explicitly asks for [`Reschedule::Replace`].
    pub fn schedule(&mut self, reschedule: Reschedule) -> Result<&[Match], TournamentError> {
        self.schedule_with_rng(reschedule, &mut rand::thread_rng())
    }

    pub fn schedule_with_rng<R: Rng + ?Sized>(
        &mut self,
        reschedule: Reschedule,
        rng: &mut R,
    ) -> Result<&[Match], TournamentError> {
        if self.is_scheduled() && reschedule == Reschedule::Keep {
            return Err(TournamentError::AlreadyScheduled {
                matches: self.matches.len(),
            });
        }

        let matches = generate_schedule_with_rng(&self.teams, &self.venues, rng)?;
        if self.is_scheduled() {
            info!(
                tournament = %self.name,
                discarded = self.matches.len(),
                "replacing existing fixtures"
            );
        }
        self.matches = matches;
        info!(tournament = %self.name, matches = self.matches.len(), "fixtures generated");
        Ok(&self.matches)
    }

    pub fn find_match(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    fn find_match_mut(&mut self, id: MatchId) -> Result<&mut Match, TournamentError> {
        self.matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(TournamentError::UnknownMatch { id })
    }

    /// Find a match by full id or by a unique id prefix, as printed in
    /// fixture lists.
    pub fn resolve_match(&self, key: &str) -> Result<MatchId, TournamentError> {
        if let Ok(id) = Uuid::parse_str(key) {
            return self
                .find_match(id)
                .map(|m| m.id)
                .ok_or(TournamentError::UnknownMatch { id });
        }
        let key = key.to_lowercase();
        let mut found = self
            .matches
            .iter()
            .filter(|m| m.id.to_string().starts_with(&key));
        match (found.next(), found.next()) {
            (Some(m), None) => Ok(m.id),
            (Some(_), Some(_)) => Err(TournamentError::AmbiguousMatch { key }),
            (None, _) => Err(TournamentError::UnknownMatchKey { key }),
        }
    }

    /// Mark a fixture as under way
    pub fn start_match(&mut self, id: MatchId) -> Result<(), TournamentError> {
        let m = self.find_match_mut(id)?;
        if m.status == MatchStatus::NotStarted {
            m.status = MatchStatus::InProgress;
        }
        Ok(())
    }

    /// Close out a match with its outcome and scorecards.
    ///
    /// Recording over an already completed match replaces its result.
    pub fn record_result(&mut self, id: MatchId, report: MatchReport) -> Result<&Match, TournamentError> {
        report.validate()?;
        let m = self.find_match_mut(id)?;
        if m.is_completed() {
            info!(match_id = %id, "correcting completed match");
        }
        m.status = MatchStatus::Completed;
        m.result = Some(report.outcome);
        m.team1_innings = report.team1_innings;
        m.team2_innings = report.team2_innings;
        info!(match_id = %id, round = m.round, outcome = ?report.outcome, "result recorded");
        Ok(&*m)
    }

    pub fn add_penalty(&mut self, team: TeamId, points: u32, reason: &str) -> Result<(), TournamentError> {
        if self.team(team).is_none() {
            return Err(TournamentError::unknown_team(team));
        }
        self.penalties.push(PenaltyRecord::new(team, points, reason));
        info!(team = %team, points, reason, "penalty applied");
        Ok(())
    }

    /// Current points table, recomputed from the match list
    pub fn standings(&self) -> Vec<Standing> {
        debug!(tournament = %self.name, "recomputing standings");
        compute_standings(&self.teams, &self.matches, &self.penalties, &self.config)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        let name = name.trim();
        self.teams.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn venue(&self, id: VenueId) -> Option<&Venue> {
        self.venues.iter().find(|v| v.id == id)
    }

    pub fn rounds(&self) -> u32 {
        self.matches.iter().map(|m| m.round).max().unwrap_or(0)
    }

    pub fn fixtures_for_round(&self, round: u32) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.round == round)
    }

    pub fn completed_matches(&self) -> usize {
        self.matches.iter().filter(|m| m.is_completed()).count()
    }
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
