//! Interactive game loop
//!
//! Drives one session: name and difficulty, then words until the level quota
//! is met, then optionally the next level. Scores go to the store after every
//! solved word and whenever the session ends by the player's choice.

use super::prompt::Console;
use crate::core::{Level, Round, Session};
use crate::output::display;
use crate::store::{ScoreRecord, ScoreStore, StoreError};
use crate::words::{Challenge, FetchError, WordSource};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

pub const NAME_PROMPT: &str = "Enter your name:";
pub const LEVEL_PROMPT: &str = "Choose difficulty (easy, medium, hard):";
pub const GUESS_PROMPT: &str = "Enter a letter (or 'exit' to quit):";
pub const RETRY_PROMPT: &str = "Out of attempts. Try this word again? (yes/no):";
pub const CONTINUE_PROMPT: &str = "Continue to the next level? (yes/no):";

/// Failures that stop the game outright
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// Player typed `exit` or closed input
    Exited,
    /// Player declined a retry or the next level
    Declined,
    /// The last level was finished
    Completed,
    /// No word could be fetched
    Aborted(FetchError),
}

/// Summary of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayResult {
    pub end: SessionEnd,
    /// Points earned this session
    pub score: i64,
    /// The player's record as last written to the store
    pub record: Option<ScoreRecord>,
}

/// Presentation switches for the game loop
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    /// Show a spinner while a word is being fetched
    pub show_progress: bool,
}

enum RoundEnd {
    Solved,
    Lost,
    Exit,
}

enum LevelEnd {
    Complete,
    Stopped(SessionEnd),
}

/// Play one session against `source` and `store`
///
/// # Errors
///
/// Returns an error if the console cannot be read or written, or if the
/// score store fails. Word-source failures end the session normally with
/// [`SessionEnd::Aborted`].
pub fn run_play<S, T, R, W>(
    source: &mut S,
    store: &mut T,
    console: &mut Console<R, W>,
    options: PlayOptions,
) -> Result<PlayResult, GameError>
where
    S: WordSource,
    T: ScoreStore,
    R: BufRead,
    W: Write,
{
    Game {
        source,
        store,
        console,
        options,
        last_saved: None,
    }
    .run()
}

struct Game<'a, S, T, R, W> {
    source: &'a mut S,
    store: &'a mut T,
    console: &'a mut Console<R, W>,
    options: PlayOptions,
    last_saved: Option<ScoreRecord>,
}

impl<S, T, R, W> Game<'_, S, T, R, W>
where
    S: WordSource,
    T: ScoreStore,
    R: BufRead,
    W: Write,
{
    fn run(mut self) -> Result<PlayResult, GameError> {
        display::print_banner(self.console.out())?;

        let Some(player) = self.ask_name()? else {
            return Ok(unstarted());
        };
        let Some(level) = self.choose_level()? else {
            return Ok(unstarted());
        };

        let mut session = Session::new(player, level);
        info!(player = %session.player(), %level, "session started");

        loop {
            match self.play_level(&mut session)? {
                LevelEnd::Stopped(end) => return self.finish(&mut session, end),
                LevelEnd::Complete => {
                    self.save(&mut session)?;
                    display::print_level_complete(
                        self.console.out(),
                        session.level(),
                        session.score(),
                    )?;

                    let Some(next) = session.level().next() else {
                        return self.finish(&mut session, SessionEnd::Completed);
                    };
                    if !self.console.confirm(CONTINUE_PROMPT)? {
                        return self.finish(&mut session, SessionEnd::Declined);
                    }

                    info!(from = %session.level(), to = %next, "advancing level");
                    session.advance_to(next);
                }
            }
        }
    }

    fn ask_name(&mut self) -> Result<Option<String>, GameError> {
        loop {
            match self.console.ask(NAME_PROMPT)? {
                None => return Ok(None),
                Some(name) if name.is_empty() => {
                    writeln!(self.console.out(), "Please enter a name.")?;
                }
                Some(name) => return Ok(Some(name)),
            }
        }
    }

    fn choose_level(&mut self) -> Result<Option<Level>, GameError> {
        let Some(input) = self.console.ask(LEVEL_PROMPT)? else {
            return Ok(None);
        };

        let (level, defaulted) = Level::from_input(&input);
        if defaulted {
            writeln!(
                self.console.out(),
                "{}",
                format!("Invalid choice. Defaulting to {level}.").yellow()
            )?;
        }
        Ok(Some(level))
    }

    fn play_level(&mut self, session: &mut Session) -> Result<LevelEnd, GameError> {
        let config = session.level().config();
        display::print_level_start(self.console.out(), session.level())?;

        while !session.level_complete() {
            let challenge = match self.fetch_word() {
                Ok(challenge) => challenge,
                Err(e) => {
                    warn!(
                        error = %e,
                        transient = e.is_transient(),
                        "no word available, ending session"
                    );
                    writeln!(
                        self.console.out(),
                        "{}",
                        format!("❌ Could not fetch a word: {e}").red()
                    )?;
                    return Ok(LevelEnd::Stopped(SessionEnd::Aborted(e)));
                }
            };

            let mut round = Round::new(challenge.word, challenge.hint, config.attempts_per_word);
            display::print_new_word(
                self.console.out(),
                &round,
                session.words_completed() + 1,
                config.total_words,
            )?;

            loop {
                match self.guess_word(&mut round, config.attempts_per_word)? {
                    RoundEnd::Solved => {
                        session.record_solved();
                        self.save(session)?;
                        display::print_solved(self.console.out(), &round, session.score())?;
                        break;
                    }
                    RoundEnd::Exit => return Ok(LevelEnd::Stopped(SessionEnd::Exited)),
                    RoundEnd::Lost => {
                        display::print_lost(self.console.out())?;
                        if self.console.confirm(RETRY_PROMPT)? {
                            round.reset_attempts();
                            continue;
                        }
                        display::print_reveal(self.console.out(), &round)?;
                        return Ok(LevelEnd::Stopped(SessionEnd::Declined));
                    }
                }
            }
        }

        Ok(LevelEnd::Complete)
    }

    fn guess_word(
        &mut self,
        round: &mut Round,
        attempts_per_word: u32,
    ) -> Result<RoundEnd, GameError> {
        loop {
            display::print_round(self.console.out(), round, attempts_per_word)?;

            let Some(input) = self.console.ask(GUESS_PROMPT)? else {
                return Ok(RoundEnd::Exit);
            };
            if input.eq_ignore_ascii_case("exit") {
                return Ok(RoundEnd::Exit);
            }

            let outcome = round.guess(&input);
            display::print_outcome(self.console.out(), outcome)?;

            if round.is_solved() {
                return Ok(RoundEnd::Solved);
            }
            if round.is_lost() {
                return Ok(RoundEnd::Lost);
            }
        }
    }

    fn fetch_word(&mut self) -> Result<Challenge, FetchError> {
        let spinner = if self.options.show_progress {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Fetching a word...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self.source.fetch_word_with_hint();
        spinner.finish_and_clear();
        result
    }

    fn save(&mut self, session: &mut Session) -> Result<(), GameError> {
        let record = self.store.upsert(
            session.player(),
            session.unsaved(),
            session.level().name(),
        )?;
        session.mark_saved();

        info!(player = %record.name, total = record.score, level = %record.level, "score saved");
        self.last_saved = Some(record);
        Ok(())
    }

    fn finish(mut self, session: &mut Session, end: SessionEnd) -> Result<PlayResult, GameError> {
        if matches!(end, SessionEnd::Exited | SessionEnd::Declined) {
            self.save(session)?;
        }

        display::print_final_score(self.console.out(), session.score(), self.last_saved.as_ref())?;
        info!(?end, score = session.score(), "session ended");

        Ok(PlayResult {
            end,
            score: session.score(),
            record: self.last_saved,
        })
    }
}

/// Result for a player who left before choosing a level
const fn unstarted() -> PlayResult {
    PlayResult {
        end: SessionEnd::Exited,
        score: 0,
        record: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::store::MemoryScoreStore;
    use std::collections::VecDeque;
    use std::io::Cursor;

    /// Serves the queued words, then repeats the last one
    struct QueueSource {
        words: VecDeque<&'static str>,
        last: &'static str,
        fetches: usize,
    }

    impl QueueSource {
        fn new(words: &[&'static str]) -> Self {
            Self {
                words: words.iter().copied().collect(),
                last: words[words.len() - 1],
                fetches: 0,
            }
        }
    }

    impl WordSource for QueueSource {
        fn fetch_word_with_hint(&mut self) -> Result<Challenge, FetchError> {
            self.fetches += 1;
            let text = self.words.pop_front().unwrap_or(self.last);
            Ok(Challenge {
                word: Word::new(text).unwrap(),
                hint: format!("hint for {text}"),
            })
        }
    }

    struct DownSource;

    impl WordSource for DownSource {
        fn fetch_word_with_hint(&mut self) -> Result<Challenge, FetchError> {
            Err(FetchError::Terminal("connection refused".into()))
        }
    }

    fn play<S: WordSource>(
        source: &mut S,
        store: &mut MemoryScoreStore,
        input: impl AsRef<[u8]>,
    ) -> (PlayResult, String) {
        colored::control::set_override(false);
        let mut console = Console::new(Cursor::new(input.as_ref().to_vec()), Vec::new());
        let result = run_play(source, store, &mut console, PlayOptions::default()).unwrap();
        (result, String::from_utf8(console.into_output()).unwrap())
    }

    fn solve_cat(times: usize) -> String {
        "c\na\nt\n".repeat(times)
    }

    #[test]
    fn cat_solved_then_exit() {
        let mut source = QueueSource::new(&["cat"]);
        let mut store = MemoryScoreStore::default();

        let (result, output) = play(&mut source, &mut store, "ada\nhard\na\nc\nt\nexit\n");

        assert!(output.contains("_ a _"));
        assert!(output.contains("c a _"));
        assert!(output.contains("Solved!"));
        assert_eq!(result.end, SessionEnd::Exited);
        assert_eq!(result.score, 5);

        let record = store.get("ada").unwrap().unwrap();
        assert_eq!((record.score, record.level.as_str()), (5, "hard"));
    }

    #[test]
    fn dog_lost_then_declined() {
        let mut source = QueueSource::new(&["dog"]);
        let mut store = MemoryScoreStore::default();

        // hard: four wrong guesses allowed
        let (result, output) = play(&mut source, &mut store, "bo\nhard\nz\nz\nx\nq\nw\nno\n");

        assert!(output.contains("Attempts remaining: 3"));
        assert!(output.contains("You already guessed 'z'"));
        assert!(output.contains("Attempts remaining: 0"));
        assert!(output.contains(RETRY_PROMPT));
        assert!(output.contains("The word was DOG"));
        assert_eq!(result.end, SessionEnd::Declined);
        assert_eq!(result.score, 0);

        let record = store.get("bo").unwrap().unwrap();
        assert_eq!(record.score, 0);
        assert_eq!(source.fetches, 1);
    }

    #[test]
    fn retry_keeps_the_same_word_with_fresh_attempts() {
        let mut source = QueueSource::new(&["dog", "cat"]);
        let mut store = MemoryScoreStore::default();

        let input = "cy\nhard\nz\nx\nq\nw\nyes\nd\nv\no\ng\nexit\n";
        let (result, output) = play(&mut source, &mut store, input);

        // the retry restores all four attempts; one wrong guess leaves three
        assert!(output.contains("'v' is not in the word. Attempts remaining: 3"));
        assert!(output.contains("The word was DOG. Score: 5"));
        assert_eq!(result.score, 5);
        assert_eq!(source.fetches, 2);
    }

    #[test]
    fn invalid_and_duplicate_guesses_cost_nothing() {
        let mut source = QueueSource::new(&["cat"]);
        let mut store = MemoryScoreStore::default();

        let input = "ada\nhard\nab\n7\n\nc\nc\nexit\n";
        let (_, output) = play(&mut source, &mut store, input);

        assert_eq!(output.matches("Please enter a single letter.").count(), 3);
        assert!(output.contains("You already guessed 'c'"));
        assert!(!output.contains("Attempts remaining"));
    }

    #[test]
    fn garbled_guess_is_rejected_and_play_continues() {
        let mut source = QueueSource::new(&["cat"]);
        let mut store = MemoryScoreStore::default();

        let mut input = b"ada\nhard\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"c\na\nt\nexit\n");
        let (result, output) = play(&mut source, &mut store, input);

        assert_eq!(output.matches("Please enter a single letter.").count(), 1);
        assert!(!output.contains("Attempts remaining"));
        assert!(output.contains("Solved!"));
        assert_eq!(result.end, SessionEnd::Exited);
        assert_eq!(result.score, 5);
    }

    #[test]
    fn unknown_difficulty_defaults_to_medium() {
        let mut source = QueueSource::new(&["cat"]);
        let mut store = MemoryScoreStore::default();

        let (_, output) = play(&mut source, &mut store, "ada\nexpert\nexit\n");

        assert!(output.contains("Defaulting to medium"));
        assert!(output.contains("Level: MEDIUM"));
        assert_eq!(store.get("ada").unwrap().unwrap().level, "medium");
    }

    #[test]
    fn exit_is_case_insensitive_and_saves() {
        let mut source = QueueSource::new(&["cat"]);
        let mut store = MemoryScoreStore::default();

        let (result, output) = play(&mut source, &mut store, "ada\neasy\nc\nEXIT\nt\n");

        assert_eq!(result.end, SessionEnd::Exited);
        assert!(output.contains("Your score: 0"));
        assert!(store.get("ada").unwrap().is_some());
    }

    #[test]
    fn closed_input_behaves_like_exit() {
        let mut source = QueueSource::new(&["cat"]);
        let mut store = MemoryScoreStore::default();

        let input = format!("ada\nhard\n{}c\n", solve_cat(1));
        let (result, _) = play(&mut source, &mut store, &input);

        assert_eq!(result.end, SessionEnd::Exited);
        assert_eq!(store.get("ada").unwrap().unwrap().score, 5);
    }

    #[test]
    fn scores_add_to_previous_sessions() {
        let mut source = QueueSource::new(&["cat"]);
        let mut store = MemoryScoreStore::default();
        store.upsert("ada", 10, "easy").unwrap();

        let input = format!("ada\nhard\n{}exit\n", solve_cat(2));
        let (result, output) = play(&mut source, &mut store, &input);

        assert_eq!(result.score, 10);
        assert_eq!(result.record.unwrap().score, 20);
        assert!(output.contains("total for ada: 20"));
    }

    #[test]
    fn fetch_failure_aborts_without_saving() {
        let mut store = MemoryScoreStore::default();

        let (result, output) = play(&mut DownSource, &mut store, "ada\nhard\n");

        assert!(matches!(result.end, SessionEnd::Aborted(FetchError::Terminal(_))));
        assert!(output.contains("Could not fetch a word"));
        assert!(store.is_empty());
    }

    #[test]
    fn hard_level_completes_the_game() {
        let mut source = QueueSource::new(&["cat"]);
        let mut store = MemoryScoreStore::default();

        let input = format!("ada\nhard\n{}", solve_cat(20));
        let (result, output) = play(&mut source, &mut store, &input);

        assert_eq!(result.end, SessionEnd::Completed);
        assert_eq!(result.score, 100);
        assert!(output.contains("Level HARD complete!"));
        assert!(!output.contains(CONTINUE_PROMPT));
        assert_eq!(source.fetches, 20);
        assert_eq!(store.get("ada").unwrap().unwrap().score, 100);
    }

    #[test]
    fn completing_a_level_offers_the_next_one() {
        let mut source = QueueSource::new(&["cat"]);
        let mut store = MemoryScoreStore::default();

        let input = format!("ada\neasy\n{}yes\n{}exit\n", solve_cat(50), solve_cat(1));
        let (result, output) = play(&mut source, &mut store, &input);

        assert!(output.contains("Level EASY complete! Score: 250"));
        assert!(output.contains(CONTINUE_PROMPT));
        assert!(output.contains("Level: MEDIUM"));
        assert!(output.contains("Word 1/40"));
        assert_eq!(result.score, 255);

        let record = store.get("ada").unwrap().unwrap();
        assert_eq!((record.score, record.level.as_str()), (255, "medium"));
    }

    #[test]
    fn declining_the_next_level_ends_the_session() {
        let mut source = QueueSource::new(&["cat"]);
        let mut store = MemoryScoreStore::default();

        let input = format!("ada\nmedium\n{}no\n", solve_cat(40));
        let (result, _) = play(&mut source, &mut store, &input);

        assert_eq!(result.end, SessionEnd::Declined);
        assert_eq!(result.score, 200);
        assert_eq!(source.fetches, 40);
        assert_eq!(store.get("ada").unwrap().unwrap().score, 200);
    }

    #[test]
    fn empty_name_is_asked_again() {
        let mut source = QueueSource::new(&["cat"]);
        let mut store = MemoryScoreStore::default();

        let (_, output) = play(&mut source, &mut store, "\n  \nada\nhard\nexit\n");

        assert_eq!(output.matches(NAME_PROMPT).count(), 3);
        assert!(store.get("ada").unwrap().is_some());
    }

    #[test]
    fn no_input_at_all_saves_nothing() {
        let mut source = QueueSource::new(&["cat"]);
        let mut store = MemoryScoreStore::default();

        let (result, _) = play(&mut source, &mut store, "");

        assert_eq!(result.end, SessionEnd::Exited);
        assert_eq!(source.fetches, 0);
        assert!(store.is_empty());
    }
}
