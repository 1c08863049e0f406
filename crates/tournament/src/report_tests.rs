use super::*;
use crate::results::MatchReport;
use crate::tournament::Reschedule;
use league_core::{Innings, ScoringConfig};

fn sample() -> Tournament {
    let mut t = Tournament::new("Report Cup", ScoringConfig::default());
    for name in ["Kings", "Royals", "Titans"] {
        t.add_team(name, "owner").unwrap();
    }
    t.schedule(Reschedule::Keep).unwrap();
    let id = t.matches[0].id;
    t.record_result(
        id,
        MatchReport::new(MatchOutcome::Team1Win)
            .with_innings(Innings::new(180, 4, 20.0), Innings::new(150, 9, 20.0)),
    )
    .unwrap();
    t
}

#[test]
fn test_format_nrr() {
    assert_eq!(format_nrr(1.5), "+1.500");
    assert_eq!(format_nrr(0.0), "+0.000");
    assert_eq!(format_nrr(-0.4567), "-0.457");
}

#[test]
fn test_standings_table_lists_every_team() {
    let t = sample();
    let table = standings_table(&t.standings());

    assert!(table.contains("Team"));
    for team in &t.teams {
        assert!(table.contains(&team.name));
    }
    assert!(table.contains("+1.500"));
    assert!(table.contains("-1.500"));
    assert!(!table.contains("penalty"));
}

#[test]
fn test_standings_table_marks_penalties() {
    let mut t = sample();
    let team = t.teams[2].id;
    t.add_penalty(team, 1, "slow over rate").unwrap();
    let table = standings_table(&t.standings());
    assert!(table.contains("0*"));
    assert!(table.contains("points after penalty deductions"));
}

#[test]
fn test_standings_json_shape() {
    let t = sample();
    let json = standings_json(&t, &t.standings()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["tournament"], "Report Cup");
    assert_eq!(value["matches_played"], 1);
    assert_eq!(value["matches_total"], 3);

    let table = value["table"].as_array().unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table[0]["rank"], 1);
    assert_eq!(table[0]["points"], 2);
    assert_eq!(table[0]["form"][0], "W");
    assert_eq!(table[0]["net_run_rate"], 1.5);
}

#[test]
fn test_fixtures_table() {
    let t = sample();
    let all = fixtures_table(&t, None);
    assert!(all.contains("Round 1"));
    assert!(all.contains("Round 3"));
    assert!(all.contains("Neutral"));
    assert!(all.contains("won"));

    let one = fixtures_table(&t, Some(2));
    assert!(one.contains("Round 2"));
    assert!(!one.contains("Round 1"));
}
