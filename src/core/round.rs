//! Per-word guessing state
//!
//! A Round tracks the letters guessed so far and the wrong-guess allowance
//! for a single word.

use super::Word;
use rustc_hash::FxHashSet;

/// Result of applying one line of player input to a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Input was not exactly one alphabetic character
    Invalid,
    /// Letter was already guessed this round
    Duplicate(char),
    /// Letter is in the word
    Correct(char),
    /// Letter is not in the word; one attempt was spent
    Wrong { letter: char, remaining: u32 },
}

/// State of a single word being guessed
#[derive(Debug, Clone)]
pub struct Round {
    word: Word,
    hint: String,
    guessed: FxHashSet<char>,
    attempts_per_word: u32,
    attempts_remaining: u32,
}

impl Round {
    #[must_use]
    pub fn new(word: Word, hint: impl Into<String>, attempts_per_word: u32) -> Self {
        Self {
            word,
            hint: hint.into(),
            guessed: FxHashSet::default(),
            attempts_per_word,
            attempts_remaining: attempts_per_word,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> &FxHashSet<char> {
        &self.guessed
    }

    /// Guessed letters in alphabetical order
    #[must_use]
    pub fn guessed_sorted(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// The word with unguessed letters masked
    #[must_use]
    pub fn masked(&self) -> String {
        self.word.masked(&self.guessed)
    }

    /// Apply one guess
    ///
    /// Input is trimmed and lowercased. Only a wrong, not previously guessed,
    /// single letter costs an attempt.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GuessOutcome, Round, Word};
    ///
    /// let mut round = Round::new(Word::new("dog").unwrap(), "a pet", 2);
    /// assert_eq!(round.guess("z"), GuessOutcome::Wrong { letter: 'z', remaining: 1 });
    /// assert_eq!(round.guess("z"), GuessOutcome::Duplicate('z'));
    /// assert_eq!(round.attempts_remaining(), 1);
    /// ```
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        let Some(letter) = single_letter(input) else {
            return GuessOutcome::Invalid;
        };

        if !self.guessed.insert(letter) {
            return GuessOutcome::Duplicate(letter);
        }

        if self.word.has_letter(letter) {
            GuessOutcome::Correct(letter)
        } else {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            GuessOutcome::Wrong {
                letter,
                remaining: self.attempts_remaining,
            }
        }
    }

    /// Every distinct letter of the word has been guessed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.word.is_revealed_by(&self.guessed)
    }

    /// Out of attempts with the word still hidden
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.attempts_remaining == 0 && !self.is_solved()
    }

    /// Restore the full attempt allowance for another try at the same word
    ///
    /// Guessed letters are kept.
    pub const fn reset_attempts(&mut self) {
        self.attempts_remaining = self.attempts_per_word;
    }
}

/// The lowercase letter if `input` is exactly one alphabetic character
fn single_letter(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => c.to_lowercase().next(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(word: &str, attempts: u32) -> Round {
        Round::new(Word::new(word).unwrap(), "hint", attempts)
    }

    #[test]
    fn cat_scenario() {
        let mut r = round("cat", 3);

        assert_eq!(r.guess("a"), GuessOutcome::Correct('a'));
        assert_eq!(r.masked(), "_a_");
        assert_eq!(r.attempts_remaining(), 3);

        assert_eq!(r.guess("c"), GuessOutcome::Correct('c'));
        assert_eq!(r.masked(), "ca_");
        assert_eq!(r.attempts_remaining(), 3);
        assert!(!r.is_solved());

        assert_eq!(r.guess("t"), GuessOutcome::Correct('t'));
        assert!(r.is_solved());
        assert_eq!(r.attempts_remaining(), 3);
    }

    #[test]
    fn dog_scenario() {
        let mut r = round("dog", 2);

        assert_eq!(
            r.guess("z"),
            GuessOutcome::Wrong {
                letter: 'z',
                remaining: 1
            }
        );
        assert_eq!(r.guess("z"), GuessOutcome::Duplicate('z'));
        assert_eq!(r.attempts_remaining(), 1);
        assert!(!r.is_lost());

        assert_eq!(
            r.guess("x"),
            GuessOutcome::Wrong {
                letter: 'x',
                remaining: 0
            }
        );
        assert!(r.is_lost());
    }

    #[test]
    fn invalid_input_costs_nothing() {
        let mut r = round("dog", 2);
        for input in ["", "ab", "1", "?", "exit", "  "] {
            assert_eq!(r.guess(input), GuessOutcome::Invalid, "input {input:?}");
        }
        assert_eq!(r.attempts_remaining(), 2);
        assert!(r.guessed().is_empty());
    }

    #[test]
    fn duplicate_correct_letter_costs_nothing() {
        let mut r = round("dog", 2);
        r.guess("o");
        assert_eq!(r.guess("o"), GuessOutcome::Duplicate('o'));
        assert_eq!(r.attempts_remaining(), 2);
    }

    #[test]
    fn uppercase_and_padded_guesses_are_normalized() {
        let mut r = round("dog", 2);
        assert_eq!(r.guess(" D "), GuessOutcome::Correct('d'));
        assert_eq!(r.guess("d"), GuessOutcome::Duplicate('d'));
    }

    #[test]
    fn solved_with_repeated_letters() {
        let mut r = round("letter", 6);
        for letter in ["l", "e", "t", "r"] {
            r.guess(letter);
        }
        assert!(r.is_solved());
        assert_eq!(r.attempts_remaining(), 6);
    }

    #[test]
    fn guessed_letters_only_grow() {
        let mut r = round("dog", 8);
        let mut previous = 0;
        for input in ["d", "d", "x", "12", "o", "x", "g"] {
            r.guess(input);
            assert!(r.guessed().len() >= previous);
            previous = r.guessed().len();
        }
        assert_eq!(r.guessed_sorted(), vec!['d', 'g', 'o', 'x']);
    }

    #[test]
    fn reset_attempts_keeps_guesses() {
        let mut r = round("dog", 1);
        r.guess("z");
        assert!(r.is_lost());

        r.reset_attempts();
        assert_eq!(r.attempts_remaining(), 1);
        assert!(!r.is_lost());
        assert_eq!(r.guess("z"), GuessOutcome::Duplicate('z'));
    }
}
