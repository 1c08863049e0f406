//! Tournament Runner for round-robin cricket leagues
//!
//! This crate provides infrastructure for:
//! - Building a league roster and its round-robin fixtures
//! - Recording results and penalties
//! - Persisting tournaments and reporting standings
//!
//! # Usage
//!
//! ```bash
//! # Create a league and draw the fixtures
//! cargo run -p tournament -- new "Summer Cup" --teams Kings,Royals,Titans,Giants --venues Oval
//! cargo run -p tournament -- schedule
//!
//! # Enter a result and show the table
//! cargo run -p tournament -- result 3f2a91c0 team1 --team1 180/4@20 --team2 150/9@20
//! cargo run -p tournament -- standings
//! ```

mod error;
mod report;
mod results;
mod store;
mod tournament;

pub use error::*;
pub use report::*;
pub use results::*;
pub use store::*;
pub use tournament::*;
