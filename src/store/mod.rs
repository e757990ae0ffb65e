//! Player score persistence
//!
//! Scores are kept per player name. Writing a score adds it to whatever the
//! player already has, and replaces the stored level.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryScoreStore;
pub use sqlite::SqliteScoreStore;

use thiserror::Error;

/// One player's stored totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub name: String,
    pub score: i64,
    pub level: String,
}

/// Score store failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Keyed record store for player scores
///
/// Names are matched exactly and case-sensitively.
pub trait ScoreStore {
    /// Look up a player's record
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, name: &str) -> Result<Option<ScoreRecord>, StoreError>;

    /// Write a record, replacing any existing one with the same name
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be written.
    fn put(&mut self, record: &ScoreRecord) -> Result<(), StoreError>;

    /// Highest scores first, at most `limit` records
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be read.
    fn top(&self, limit: usize) -> Result<Vec<ScoreRecord>, StoreError>;

    /// Add `score` to the player's total and set their level
    ///
    /// A player without a record starts from zero. Returns the stored record.
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot be read or written.
    ///
    /// # Examples
    /// ```
    /// use hangman::store::{MemoryScoreStore, ScoreStore};
    ///
    /// let mut store = MemoryScoreStore::default();
    /// store.upsert("ada", 5, "easy").unwrap();
    /// let record = store.upsert("ada", 5, "medium").unwrap();
    /// assert_eq!((record.score, record.level.as_str()), (10, "medium"));
    /// ```
    fn upsert(&mut self, name: &str, score: i64, level: &str) -> Result<ScoreRecord, StoreError> {
        let previous = self.get(name)?.map_or(0, |record| record.score);
        let record = ScoreRecord {
            name: name.to_string(),
            score: previous + score,
            level: level.to_string(),
        };
        self.put(&record)?;
        Ok(record)
    }
}
