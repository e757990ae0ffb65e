//! Word sources
//!
//! A word source hands the game a playable word together with a hint. The
//! remote source asks a word service and a dictionary; the offline source
//! draws from an embedded or user-supplied list.

mod embedded;
pub mod loader;
pub mod offline;
pub mod remote;

pub use embedded::{EMBEDDED_WORDS, EMBEDDED_WORDS_COUNT};
pub use offline::OfflineWordSource;
pub use remote::{HttpWordApi, RemoteConfig, RemoteWordSource, WordApi};

use crate::core::Word;
use thiserror::Error;

/// A word to guess and the hint shown alongside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub word: Word,
    pub hint: String,
}

/// Why a source could not produce a challenge
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The word service itself failed; the session cannot continue
    #[error("word service failed: {0}")]
    Terminal(String),
    /// A single definition lookup failed or returned an unusable shape
    #[error("definition unavailable: {0}")]
    Transient(String),
    /// Every allowed attempt produced an unusable word or hint
    #[error("no word with a usable hint after {0} attempts")]
    Exhausted(u32),
}

impl FetchError {
    /// Failures that a fresh attempt could plausibly fix
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_) | Self::Exhausted(_))
    }
}

/// Something that can supply words to play
pub trait WordSource {
    /// Fetch the next word and its hint
    ///
    /// # Errors
    /// Returns `FetchError::Terminal` when no more words can be obtained, or
    /// `FetchError::Exhausted` when the retry allowance ran out.
    fn fetch_word_with_hint(&mut self) -> Result<Challenge, FetchError>;
}

/// Enum wrapper for the available sources
///
/// Allows runtime selection of the source while keeping static dispatch.
pub enum SourceType {
    Remote(RemoteWordSource<HttpWordApi>),
    Offline(OfflineWordSource),
}

impl WordSource for SourceType {
    fn fetch_word_with_hint(&mut self) -> Result<Challenge, FetchError> {
        match self {
            Self::Remote(s) => s.fetch_word_with_hint(),
            Self::Offline(s) => s.fetch_word_with_hint(),
        }
    }
}
