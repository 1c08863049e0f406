use thiserror::Error;

use crate::types::TeamId;

/// Failures raised by the league core.
///
/// Standings computation never fails; only schedule generation and
/// configuration loading report errors.
#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("at least 2 teams are required to build a schedule, found {found}")]
    InsufficientTeams { found: usize },

    #[error("team {id} appears more than once in the roster")]
    DuplicateTeam { id: TeamId },

    #[error("invalid scoring configuration: {0}")]
    Config(String),
}
