//! Scoring configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LeagueError;

/// Default points for a win
pub const DEFAULT_POINTS_FOR_WIN: i32 = 2;

/// Default points for a tie, no result or abandoned match
pub const DEFAULT_POINTS_FOR_DRAW: i32 = 1;

/// Default overs allotted to each innings
pub const DEFAULT_OVERS_PER_MATCH: u32 = 20;

/// Points table and overs limit used by the standings calculator.
///
/// Every key is optional in TOML; missing keys fall back to the defaults:
///
/// ```toml
/// points_for_win = 2
/// points_for_draw = 1
/// points_for_loss = 0
/// overs_per_match = 20
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub points_for_win: i32,
    /// Awarded for a tie, a no result or an abandoned match
    pub points_for_draw: i32,
    pub points_for_loss: i32,
    /// Denominator used for an innings that ends all out
    pub overs_per_match: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_for_win: DEFAULT_POINTS_FOR_WIN,
            points_for_draw: DEFAULT_POINTS_FOR_DRAW,
            points_for_loss: 0,
            overs_per_match: DEFAULT_OVERS_PER_MATCH,
        }
    }
}

impl ScoringConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, LeagueError> {
        toml::from_str(contents).map_err(|e| LeagueError::Config(e.to_string()))
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self, LeagueError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| LeagueError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, LeagueError> {
        toml::to_string_pretty(self).map_err(|e| LeagueError::Config(e.to_string()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
