use league_core::{LeagueError, MatchId, TeamId};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error(transparent)]
    League(#[from] LeagueError),

    #[error("tournament already has {matches} scheduled matches; rescheduling replaces them")]
    AlreadyScheduled { matches: usize },

    #[error("teams and venues cannot change once fixtures exist")]
    RosterLocked,

    #[error("a team named {name:?} already exists")]
    DuplicateTeamName { name: String },

    #[error("unknown match: {id}")]
    UnknownMatch { id: MatchId },

    #[error("no match id starts with {key:?}")]
    UnknownMatchKey { key: String },

    #[error("more than one match id starts with {key:?}")]
    AmbiguousMatch { key: String },

    #[error("unknown team: {0}")]
    UnknownTeam(String),

    #[error("invalid innings: {0}")]
    InvalidInnings(String),

    #[error("invalid outcome: {0}")]
    InvalidOutcome(String),

    #[error("no stored tournament with id {id}")]
    NotFound { id: Uuid },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TournamentError {
    pub fn unknown_team(id: TeamId) -> Self {
        TournamentError::UnknownTeam(id.to_string())
    }
}
