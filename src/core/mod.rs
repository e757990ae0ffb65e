//! Core domain types for the game
//!
//! Pure, I/O-free types: the secret word, difficulty levels, the per-word
//! round state machine and session bookkeeping.

mod level;
mod round;
mod session;
mod word;

pub use level::{Level, LevelConfig};
pub use round::{GuessOutcome, Round};
pub use session::{POINTS_PER_WORD, Session};
pub use word::{Word, WordError};
