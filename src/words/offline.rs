//! Offline word source
//!
//! Picks words at random from an in-memory list, with no network access.

use super::loader::challenges_from_slice;
use super::{Challenge, EMBEDDED_WORDS, FetchError, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Word source drawing from a fixed list
pub struct OfflineWordSource {
    entries: Vec<Challenge>,
    rng: StdRng,
}

impl OfflineWordSource {
    /// Create a source over `entries`, seeded from the OS
    #[must_use]
    pub fn new(entries: Vec<Challenge>) -> Self {
        Self::with_rng(entries, StdRng::from_os_rng())
    }

    /// Create a source with a caller-supplied generator
    #[must_use]
    pub const fn with_rng(entries: Vec<Challenge>, rng: StdRng) -> Self {
        Self { entries, rng }
    }

    /// Source over the list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(challenges_from_slice(EMBEDDED_WORDS))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WordSource for OfflineWordSource {
    fn fetch_word_with_hint(&mut self) -> Result<Challenge, FetchError> {
        self.entries
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| FetchError::Terminal("word list is empty".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_source_is_populated() {
        let source = OfflineWordSource::embedded();
        assert!(!source.is_empty());
    }

    #[test]
    fn draws_only_listed_words() {
        let entries = challenges_from_slice(&[("river", "Water."), ("orbit", "Path.")]);
        let mut source = OfflineWordSource::with_rng(entries, StdRng::seed_from_u64(7));

        for _ in 0..20 {
            let challenge = source.fetch_word_with_hint().unwrap();
            assert!(["river", "orbit"].contains(&challenge.word.text()));
        }
    }

    #[test]
    fn empty_list_is_terminal() {
        let mut source = OfflineWordSource::new(Vec::new());
        assert!(matches!(
            source.fetch_word_with_hint(),
            Err(FetchError::Terminal(_))
        ));
    }
}
