//! Core logic for round-robin limited-overs leagues
//!
//! This crate provides:
//! - The league data model (teams, venues, matches, penalties)
//! - Circle-method fixture generation
//! - Overs arithmetic and net run rate
//! - Standings computation with a deterministic ranking order
//!
//! Everything here is pure: functions borrow snapshots of the league and
//! return new values. Persistence and result entry live in the `tournament`
//! crate.

pub mod config;
pub mod error;
pub mod overs;
pub mod schedule;
pub mod standings;
pub mod types;

pub use config::*;
pub use error::*;
pub use overs::{ball_count, effective_balls, effective_overs, run_rate, true_overs};
pub use schedule::{generate_schedule, generate_schedule_with_rng, round_count};
pub use standings::*;
pub use types::*;
