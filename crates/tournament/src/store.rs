//! Tournament persistence
//!
//! The aggregate is stored as one opaque JSON blob per tournament id. Callers
//! pick the medium by choosing a [`TournamentStore`] implementation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::TournamentError;
use crate::tournament::Tournament;

/// Load/save capability for tournaments
pub trait TournamentStore {
    fn load(&self, id: Uuid) -> Result<Tournament, TournamentError>;
    fn save(&mut self, tournament: &Tournament) -> Result<(), TournamentError>;
}

/// Stores each tournament as `<dir>/<id>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

impl TournamentStore for JsonFileStore {
    fn load(&self, id: Uuid) -> Result<Tournament, TournamentError> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(TournamentError::NotFound { id });
        }
        load_file(&path)
    }

    fn save(&mut self, tournament: &Tournament) -> Result<(), TournamentError> {
        std::fs::create_dir_all(&self.dir)?;
        save_file(tournament, &self.path_for(tournament.id))
    }
}

/// Keeps serialised tournaments in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<Uuid, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl TournamentStore for MemoryStore {
    fn load(&self, id: Uuid) -> Result<Tournament, TournamentError> {
        let blob = self.blobs.get(&id).ok_or(TournamentError::NotFound { id })?;
        Ok(serde_json::from_str(blob)?)
    }

    fn save(&mut self, tournament: &Tournament) -> Result<(), TournamentError> {
        let blob = serde_json::to_string(tournament)?;
        self.blobs.insert(tournament.id, blob);
        debug!(id = %tournament.id, "tournament stored in memory");
        Ok(())
    }
}

/// Load a tournament from a JSON file
pub fn load_file(path: &Path) -> Result<Tournament, TournamentError> {
    let contents = std::fs::read_to_string(path)?;
    let tournament: Tournament = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), id = %tournament.id, "tournament loaded");
    Ok(tournament)
}

/// Save a tournament to a JSON file
pub fn save_file(tournament: &Tournament, path: &Path) -> Result<(), TournamentError> {
    let json = serde_json::to_string_pretty(tournament)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), id = %tournament.id, "tournament saved");
    Ok(())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
