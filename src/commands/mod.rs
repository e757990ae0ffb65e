//! Command implementations

pub mod play;
pub mod prompt;
pub mod scores;

pub use play::{GameError, PlayOptions, PlayResult, SessionEnd, run_play};
pub use prompt::Console;
pub use scores::{ScoresError, show_leaderboard, show_player};
