//! Score queries: leaderboard and single-player lookup

use crate::output::{print_leaderboard, print_record};
use crate::store::{ScoreStore, StoreError};
use std::io::Write;
use thiserror::Error;

/// Failure while reporting scores
#[derive(Debug, Error)]
pub enum ScoresError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Print the top `limit` players
///
/// # Errors
///
/// Returns an error if the store cannot be read or the output written.
pub fn show_leaderboard<T: ScoreStore, W: Write>(
    store: &T,
    limit: usize,
    out: &mut W,
) -> Result<(), ScoresError> {
    let records = store.top(limit)?;
    print_leaderboard(out, &records)?;
    Ok(())
}

/// Print one player's record
///
/// Returns whether the player was found.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the output written.
pub fn show_player<T: ScoreStore, W: Write>(
    store: &T,
    name: &str,
    out: &mut W,
) -> Result<bool, ScoresError> {
    match store.get(name)? {
        Some(record) => {
            print_record(out, &record)?;
            Ok(true)
        }
        None => {
            writeln!(out, "No scores recorded for '{name}'.")?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryScoreStore;

    fn output(f: impl FnOnce(&mut Vec<u8>)) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn leaderboard_ranks_players() {
        let mut store = MemoryScoreStore::default();
        store.upsert("ada", 40, "medium").unwrap();
        store.upsert("bo", 15, "easy").unwrap();

        let text = output(|out| show_leaderboard(&store, 10, out).unwrap());
        let ada = text.find("ada").unwrap();
        let bo = text.find("bo").unwrap();
        assert!(ada < bo);
        assert!(text.contains(" 1. ada"));
    }

    #[test]
    fn player_lookup() {
        let mut store = MemoryScoreStore::default();
        store.upsert("ada", 40, "medium").unwrap();

        let text = output(|out| assert!(show_player(&store, "ada", out).unwrap()));
        assert!(text.contains("ada: 40 points (last level: medium)"));

        let text = output(|out| assert!(!show_player(&store, "zed", out).unwrap()));
        assert!(text.contains("No scores recorded for 'zed'."));
    }
}
