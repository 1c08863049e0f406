use super::*;
use crate::types::MatchStatus;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn make_teams(n: usize) -> Vec<Team> {
    (0..n)
        .map(|i| Team::new(&format!("Team {}", i), "owner"))
        .collect()
}

#[test]
fn test_rejects_fewer_than_two_teams() {
    let err = generate_schedule(&[], &[]).unwrap_err();
    assert!(matches!(err, LeagueError::InsufficientTeams { found: 0 }));

    let err = generate_schedule(&make_teams(1), &[]).unwrap_err();
    assert!(matches!(err, LeagueError::InsufficientTeams { found: 1 }));
}

#[test]
fn test_rejects_duplicate_team() {
    let mut teams = make_teams(3);
    teams.push(teams[0].clone());
    let err = generate_schedule(&teams, &[]).unwrap_err();
    assert!(matches!(err, LeagueError::DuplicateTeam { id } if id == teams[0].id));
}

#[test]
fn test_two_teams_single_match() {
    let teams = make_teams(2);
    let matches = generate_schedule(&teams, &[]).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].round, 1);
    assert!(matches[0].involves(teams[0].id));
    assert!(matches[0].involves(teams[1].id));
}

#[test]
fn test_new_matches_are_not_started() {
    let matches = generate_schedule(&make_teams(6), &[]).unwrap();
    for m in &matches {
        assert_eq!(m.status, MatchStatus::NotStarted);
        assert!(m.result.is_none());
        assert!(m.team1_innings.is_none() && m.team2_innings.is_none());
        assert!(m.is_consistent());
    }
}

#[test]
fn test_no_venues_gives_neutral_venue() {
    let matches = generate_schedule(&make_teams(4), &[]).unwrap();
    assert!(matches.iter().all(|m| m.venue.is_none()));
}

#[test]
fn test_venues_drawn_from_list() {
    let venues = vec![Venue::new("Oval"), Venue::new("Eden Gardens")];
    let mut rng = StdRng::seed_from_u64(7);
    let matches = generate_schedule_with_rng(&make_teams(8), &venues, &mut rng).unwrap();
    for m in &matches {
        let venue = m.venue.expect("venue should be assigned");
        assert!(venues.iter().any(|v| v.id == venue));
    }
}

#[test]
fn test_one_match_per_team_per_round() {
    let teams = make_teams(7);
    let matches = generate_schedule(&teams, &[]).unwrap();

    let mut per_round: HashMap<(u32, TeamId), u32> = HashMap::new();
    for m in &matches {
        *per_round.entry((m.round, m.team1)).or_insert(0) += 1;
        *per_round.entry((m.round, m.team2)).or_insert(0) += 1;
    }
    assert!(per_round.values().all(|&count| count == 1));
}

#[test]
fn test_first_round_pairs_opposite_seats() {
    let teams = make_teams(4);
    let matches = generate_schedule(&teams, &[]).unwrap();
    let first: Vec<_> = matches.iter().filter(|m| m.round == 1).collect();
    assert_eq!(first.len(), 2);
    assert_eq!((first[0].team1, first[0].team2), (teams[0].id, teams[3].id));
    assert_eq!((first[1].team1, first[1].team2), (teams[1].id, teams[2].id));
}

#[test]
fn test_round_count() {
    assert_eq!(round_count(1), 0);
    assert_eq!(round_count(2), 1);
    assert_eq!(round_count(4), 3);
    assert_eq!(round_count(5), 5);
}
