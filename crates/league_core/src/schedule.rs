//! Round-robin fixture generation (circle method)
//!
//! Teams sit at a table of even size; an odd roster gets an empty seat (the
//! bye). Each round pairs seat `i` with seat `n - 1 - i`, then every seat but
//! the first moves one place round the table. After `n - 1` rounds every pair
//! has met exactly once.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

use crate::error::LeagueError;
use crate::types::{Match, Team, TeamId, Venue};

/// Generate a full single round-robin using the thread-local RNG for venues.
pub fn generate_schedule(teams: &[Team], venues: &[Venue]) -> Result<Vec<Match>, LeagueError> {
    generate_schedule_with_rng(teams, venues, &mut rand::thread_rng())
}

/// Generate a full single round-robin, drawing venues from `rng`.
///
/// Matches come back ordered by round. Each match gets a venue picked
/// uniformly from `venues`, or a neutral venue (`None`) if there are none.
pub fn generate_schedule_with_rng<R: Rng + ?Sized>(
    teams: &[Team],
    venues: &[Venue],
    rng: &mut R,
) -> Result<Vec<Match>, LeagueError> {
    if teams.len() < 2 {
        return Err(LeagueError::InsufficientTeams { found: teams.len() });
    }

    let mut seen = HashSet::with_capacity(teams.len());
    for team in teams {
        if !seen.insert(team.id) {
            return Err(LeagueError::DuplicateTeam { id: team.id });
        }
    }

    // `None` is the bye seat
    let mut seats: Vec<Option<TeamId>> = teams.iter().map(|t| Some(t.id)).collect();
    if seats.len() % 2 != 0 {
        seats.push(None);
    }

    let size = seats.len();
    let rounds = size - 1;
    let mut matches = Vec::with_capacity(teams.len() * (teams.len() - 1) / 2);

    for round in 1..=rounds {
        for i in 0..size / 2 {
            if let (Some(team1), Some(team2)) = (seats[i], seats[size - 1 - i]) {
                let venue = venues.choose(rng).map(|v| v.id);
                matches.push(Match::new(round as u32, team1, team2, venue));
            }
        }
        seats[1..].rotate_right(1);
    }

    debug!(
        teams = teams.len(),
        venues = venues.len(),
        rounds,
        matches = matches.len(),
        "generated round-robin schedule"
    );

    Ok(matches)
}

/// Number of rounds a round-robin of `teams` needs, including the bye round
/// for an odd roster.
pub fn round_count(teams: usize) -> usize {
    match teams {
        0 | 1 => 0,
        n if n % 2 == 0 => n - 1,
        n => n,
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
