//! Terminal output formatting
//!
//! Display utilities for game events, scores and the leaderboard.

pub mod display;
pub mod formatters;

pub use display::{print_leaderboard, print_record};
