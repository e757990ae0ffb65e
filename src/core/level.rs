//! Difficulty levels
//!
//! Each level fixes how many words make up the level and how many wrong
//! guesses are allowed per word.

use std::fmt;
use std::str::FromStr;

/// Difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

/// Per-level quota and attempt allowance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelConfig {
    pub total_words: u32,
    pub attempts_per_word: u32,
}

impl Level {
    /// Levels in progression order
    pub const ORDER: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Level used when the player's choice is not recognized
    pub const DEFAULT: Self = Self::Medium;

    /// Quota and attempts for this level
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Level;
    ///
    /// let config = Level::Hard.config();
    /// assert_eq!((config.total_words, config.attempts_per_word), (20, 4));
    /// ```
    #[must_use]
    pub const fn config(self) -> LevelConfig {
        match self {
            Self::Easy => LevelConfig {
                total_words: 50,
                attempts_per_word: 8,
            },
            Self::Medium => LevelConfig {
                total_words: 40,
                attempts_per_word: 6,
            },
            Self::Hard => LevelConfig {
                total_words: 20,
                attempts_per_word: 4,
            },
        }
    }

    /// Lowercase name, as typed by the player and stored in the score table
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// The level after this one, or `None` for the last level
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Easy => Some(Self::Medium),
            Self::Medium => Some(Self::Hard),
            Self::Hard => None,
        }
    }

    /// Parse player input, falling back to [`Level::DEFAULT`]
    ///
    /// Returns the level and whether the fallback was used.
    #[must_use]
    pub fn from_input(input: &str) -> (Self, bool) {
        input
            .parse()
            .map_or((Self::DEFAULT, true), |level| (level, false))
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
