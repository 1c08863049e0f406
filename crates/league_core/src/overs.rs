//! Overs arithmetic
//!
//! Scorecards write overs as `overs.balls`, so 19.4 is nineteen overs and four
//! balls, not 19.4 decimal overs. Everything that divides by overs must
//! convert first.

use crate::types::Innings;

/// Legal deliveries in one over
pub const BALLS_PER_OVER: u32 = 6;

/// Number of legal balls in an `overs.balls` figure.
///
/// The fractional digit is read as a ball count, rounded to the nearest ball
/// and capped at a full over. Negative or non-finite input counts as zero.
pub fn ball_count(overs: f64) -> u64 {
    if !overs.is_finite() || overs <= 0.0 {
        return 0;
    }
    let whole = overs.trunc();
    let balls = ((overs - whole) * 10.0).round().min(BALLS_PER_OVER as f64);
    (whole as u64)
        .saturating_mul(BALLS_PER_OVER as u64)
        .saturating_add(balls as u64)
}

/// Convert overs.balls notation to a real number of overs: 19.4 → 19.667,
/// 0.6 → 1.0.
pub fn true_overs(overs: f64) -> f64 {
    ball_count(overs) as f64 / BALLS_PER_OVER as f64
}

/// Balls charged to an innings for run-rate purposes.
///
/// A side bowled out is charged the full allotment. Returns `None` when that
/// substitution is needed but no allotment is configured.
pub fn effective_balls(innings: &Innings, overs_limit: u32) -> Option<u64> {
    if innings.is_all_out() {
        if overs_limit == 0 {
            return None;
        }
        Some(overs_limit as u64 * BALLS_PER_OVER as u64)
    } else {
        Some(ball_count(innings.overs))
    }
}

/// [`effective_balls`] expressed in overs
pub fn effective_overs(innings: &Innings, overs_limit: u32) -> Option<f64> {
    effective_balls(innings, overs_limit).map(|balls| balls as f64 / BALLS_PER_OVER as f64)
}

/// Runs per over, or 0 when no overs were bowled.
pub fn run_rate(runs: u32, overs: f64) -> f64 {
    if overs > 0.0 {
        runs as f64 / overs
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "overs_tests.rs"]
mod overs_tests;
