//! Secret word representation
//!
//! A Word stores a lowercase alphabetic word along with its set of distinct letters,
//! so that "is this word fully revealed" is a set comparison.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// A lowercase, purely alphabetic word to be guessed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: FxHashSet<char>,
}

/// Error type for words that cannot be played
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word contains non-alphabetic character {0:?}")]
    NonAlphabetic(char),
}

impl Word {
    /// Create a new Word from a string, normalizing it to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other
    /// than alphabetic characters (digits, spaces, hyphens, apostrophes...).
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Python").unwrap();
    /// assert_eq!(word.text(), "python");
    ///
    /// assert!(Word::new("ice-cream").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::NonAlphabetic(bad));
        }

        let letters = text.chars().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (not bytes) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false; a Word is never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &FxHashSet<char> {
        &self.letters
    }

    /// True when every distinct letter is in `guessed`
    #[must_use]
    pub fn is_revealed_by(&self, guessed: &FxHashSet<char>) -> bool {
        self.letters.is_subset(guessed)
    }

    /// Render the word with unguessed letters replaced by `_`
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    /// use rustc_hash::FxHashSet;
    ///
    /// let word = Word::new("cat").unwrap();
    /// let guessed: FxHashSet<char> = ['a'].into_iter().collect();
    /// assert_eq!(word.masked(&guessed), "_a_");
    /// ```
    #[must_use]
    pub fn masked(&self, guessed: &FxHashSet<char>) -> String {
        self.text
            .chars()
            .map(|c| if guessed.contains(&c) { c } else { '_' })
            .collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
