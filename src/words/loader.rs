//! Word list loading utilities
//!
//! Reads `word|hint` lists from files or from the embedded constant.

use super::Challenge;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Parse one `word|hint` line
///
/// Returns `None` for blank lines, lines without a separator, unplayable
/// words and empty hints.
#[must_use]
pub fn parse_line(line: &str) -> Option<Challenge> {
    let (word, hint) = line.split_once('|')?;
    let hint = hint.trim();
    if hint.is_empty() {
        return None;
    }

    let word = Word::new(word.trim()).ok()?;
    Some(Challenge {
        word,
        hint: hint.to_string(),
    })
}

/// Load challenges from a file
///
/// Returns every valid entry, skipping anything `parse_line` rejects.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::words::loader::load_from_file;
///
/// let entries = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Challenge>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(parse_line).collect())
}

/// Convert embedded `(word, hint)` pairs to challenges
///
/// # Examples
/// ```
/// use hangman::words::loader::challenges_from_slice;
/// use hangman::words::EMBEDDED_WORDS;
///
/// let entries = challenges_from_slice(EMBEDDED_WORDS);
/// assert_eq!(entries.len(), EMBEDDED_WORDS.len());
/// ```
#[must_use]
pub fn challenges_from_slice(slice: &[(&str, &str)]) -> Vec<Challenge> {
    slice
        .iter()
        .filter_map(|&(word, hint)| {
            Word::new(word).ok().map(|word| Challenge {
                word,
                hint: hint.to_string(),
            })
        })
        .collect()
}
