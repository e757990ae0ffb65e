//! SQLite-backed score store

use super::{ScoreRecord, ScoreStore, StoreError};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;
use tracing::debug;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS players (
    name TEXT PRIMARY KEY,
    score INTEGER NOT NULL,
    level TEXT NOT NULL
);";

/// Score store in a single `players` table
///
/// The connection is released when the store is dropped, or explicitly with
/// [`SqliteScoreStore::close`].
#[derive(Debug)]
pub struct SqliteScoreStore {
    conn: Connection,
}

impl SqliteScoreStore {
    /// Open (creating if needed) the database at `path`
    ///
    /// # Errors
    /// Returns `StoreError` if the file cannot be opened or the table created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        debug!(path = %path.as_ref().display(), "opening score database");
        Self::init(Connection::open(path)?)
    }

    /// Open a private in-memory database
    ///
    /// # Errors
    /// Returns `StoreError` if the table cannot be created.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Close the connection, reporting any error from the final flush
    ///
    /// # Errors
    /// Returns `StoreError` if SQLite fails to close cleanly.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, e)| StoreError::from(e))
    }

    fn record_from_row(row: &Row<'_>) -> rusqlite::Result<ScoreRecord> {
        Ok(ScoreRecord {
            name: row.get(0)?,
            score: row.get(1)?,
            level: row.get(2)?,
        })
    }
}

impl ScoreStore for SqliteScoreStore {
    fn get(&self, name: &str) -> Result<Option<ScoreRecord>, StoreError> {
        let record = self
            .conn
            .query_row(
                "SELECT name, score, level FROM players WHERE name = ?1",
                params![name],
                Self::record_from_row,
            )
            .optional()?;
        Ok(record)
    }

    fn put(&mut self, record: &ScoreRecord) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO players (name, score, level) VALUES (?1, ?2, ?3)",
            params![record.name, record.score, record.level],
        )?;
        Ok(())
    }

    fn top(&self, limit: usize) -> Result<Vec<ScoreRecord>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT name, score, level FROM players
             ORDER BY score DESC, name ASC LIMIT ?1",
        )?;
        let records = stmt
            .query_map(params![limit as i64], Self::record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn upsert(&mut self, name: &str, score: i64, level: &str) -> Result<ScoreRecord, StoreError> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO players (name, score, level) VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO UPDATE
             SET score = score + excluded.score, level = excluded.level",
            params![name, score, level],
        )?;
        let record = tx.query_row(
            "SELECT name, score, level FROM players WHERE name = ?1",
            params![name],
            Self::record_from_row,
        )?;
        tx.commit()?;

        debug!(player = %record.name, total = record.score, level = %record.level, "saved score");
        Ok(record)
    }
}
