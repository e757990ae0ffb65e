//! Session bookkeeping across words and levels

use super::Level;

/// Points awarded for each solved word
pub const POINTS_PER_WORD: i64 = 5;

/// State of one play-through, carried forward across levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    player: String,
    level: Level,
    score: i64,
    words_completed: u32,
    unsaved: i64,
}

impl Session {
    #[must_use]
    pub fn new(player: impl Into<String>, level: Level) -> Self {
        Self {
            player: player.into(),
            level,
            score: 0,
            words_completed: 0,
            unsaved: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    #[inline]
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Points earned during this session
    #[inline]
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Words solved in the current level
    #[inline]
    #[must_use]
    pub const fn words_completed(&self) -> u32 {
        self.words_completed
    }

    /// Credit a solved word
    pub const fn record_solved(&mut self) {
        self.score += POINTS_PER_WORD;
        self.unsaved += POINTS_PER_WORD;
        self.words_completed += 1;
    }

    /// The current level's word quota has been met
    #[must_use]
    pub const fn level_complete(&self) -> bool {
        self.words_completed >= self.level.config().total_words
    }

    /// Move to `level`, keeping the score
    pub const fn advance_to(&mut self, level: Level) {
        self.level = level;
        self.words_completed = 0;
    }

    /// Points not yet written to the score store
    ///
    /// The store adds what it is given, so each point is handed over once.
    #[must_use]
    pub const fn unsaved(&self) -> i64 {
        self.unsaved
    }

    /// The unsaved points have been written
    pub const fn mark_saved(&mut self) {
        self.unsaved = 0;
    }
}
