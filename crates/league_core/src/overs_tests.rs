use super::*;

#[test]
fn test_true_overs_partial_over() {
    assert!((true_overs(19.4) - 19.667).abs() < 0.001);
    assert!((true_overs(7.3) - 7.5).abs() < 1e-9);
}

#[test]
fn test_true_overs_whole_overs() {
    assert_eq!(true_overs(20.0), 20.0);
    assert_eq!(true_overs(0.0), 0.0);
}

#[test]
fn test_true_overs_six_balls_is_full_over() {
    assert!((true_overs(0.6) - 1.0).abs() < 1e-9);
}

#[test]
fn test_true_overs_caps_ball_digit() {
    // A stray 0.9 cannot be more than a full over
    assert!((true_overs(3.9) - 4.0).abs() < 1e-9);
}

#[test]
fn test_true_overs_rejects_garbage() {
    assert_eq!(true_overs(-1.2), 0.0);
    assert_eq!(true_overs(f64::NAN), 0.0);
    assert_eq!(true_overs(f64::INFINITY), 0.0);
}

#[test]
fn test_effective_overs_all_out_uses_limit() {
    let innings = Innings::new(98, 10, 14.2);
    assert_eq!(effective_overs(&innings, 20), Some(20.0));
}

#[test]
fn test_effective_overs_not_out_uses_true_overs() {
    let innings = Innings::new(150, 6, 18.3);
    let overs = effective_overs(&innings, 20).unwrap();
    assert!((overs - 18.5).abs() < 1e-9);
}

#[test]
fn test_effective_overs_all_out_without_limit() {
    let innings = Innings::new(98, 10, 14.2);
    assert_eq!(effective_overs(&innings, 0), None);
}

#[test]
fn test_run_rate() {
    assert!((run_rate(160, 20.0) - 8.0).abs() < 1e-9);
    assert_eq!(run_rate(50, 0.0), 0.0);
}

#[test]
fn test_ball_count() {
    assert_eq!(ball_count(19.4), 118);
    assert_eq!(ball_count(1.1) + ball_count(4.4) + ball_count(1.1), ball_count(7.0));
    assert_eq!(ball_count(0.6), 6);
    assert_eq!(ball_count(-3.0), 0);
}

#[test]
fn test_effective_balls() {
    assert_eq!(effective_balls(&Innings::new(98, 10, 14.2), 20), Some(120));
    assert_eq!(effective_balls(&Innings::new(150, 6, 18.3), 20), Some(111));
    assert_eq!(effective_balls(&Innings::new(98, 10, 14.2), 0), None);
}
