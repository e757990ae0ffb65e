//! Hangman
//!
//! A command-line word-guessing game. Words and hints come from a word
//! service and a dictionary (or an offline list); scores are kept per player
//! in a local SQLite table.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GuessOutcome, Round, Word};
//!
//! let mut round = Round::new(Word::new("cat").unwrap(), "A small pet.", 3);
//! assert_eq!(round.guess("a"), GuessOutcome::Correct('a'));
//! assert_eq!(round.masked(), "_a_");
//! ```

// Core domain types
pub mod core;

// Word and hint sources
pub mod words;

// Score persistence
pub mod store;

// Command implementations
pub mod commands;

// Runtime configuration
pub mod config;

// Terminal output formatting
pub mod output;
