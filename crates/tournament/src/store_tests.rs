use super::*;
use crate::results::MatchReport;
use crate::tournament::Reschedule;
use league_core::{Innings, MatchOutcome, ScoringConfig};

fn played_league() -> Tournament {
    let mut t = Tournament::new("Store League", ScoringConfig::default());
    for name in ["A", "B", "C"] {
        t.add_team(name, "owner").unwrap();
    }
    t.add_venue("Oval").unwrap();
    t.schedule(Reschedule::Keep).unwrap();
    let id = t.matches[0].id;
    let report = MatchReport::new(MatchOutcome::Team2Win)
        .with_innings(Innings::new(99, 10, 15.3), Innings::new(100, 1, 9.4));
    t.record_result(id, report).unwrap();
    let team = t.teams[0].id;
    t.add_penalty(team, 1, "late team sheet").unwrap();
    t
}

#[test]
fn test_memory_store_round_trip() {
    let t = played_league();
    let mut store = MemoryStore::new();
    assert!(store.is_empty());

    store.save(&t).unwrap();
    let loaded = store.load(t.id).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(loaded.matches, t.matches);
    assert_eq!(loaded.penalties, t.penalties);
    assert_eq!(loaded.standings(), t.standings());
}

#[test]
fn test_memory_store_missing_id() {
    let store = MemoryStore::new();
    let id = Uuid::new_v4();
    assert!(matches!(store.load(id), Err(TournamentError::NotFound { id: missing }) if missing == id));
}

#[test]
fn test_json_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("leagues"));
    let t = played_league();

    store.save(&t).unwrap();
    assert!(store.path_for(t.id).exists());

    let loaded = store.load(t.id).unwrap();
    assert_eq!(loaded.name, "Store League");
    assert_eq!(loaded.teams, t.teams);
    assert_eq!(loaded.config, t.config);
    assert_eq!(loaded.standings(), t.standings());
}

#[test]
fn test_json_file_store_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    assert!(matches!(
        store.load(Uuid::new_v4()),
        Err(TournamentError::NotFound { .. })
    ));
}

#[test]
fn test_load_file_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(load_file(&path), Err(TournamentError::Serialization(_))));
}
