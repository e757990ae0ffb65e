//! Display functions for game events
//!
//! Everything is written to a caller-supplied writer so the game can be
//! driven against buffers as well as stdout.

use super::formatters::{attempts_bar, letter_list, spaced};
use crate::core::{GuessOutcome, Level, Round};
use crate::store::ScoreRecord;
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "{}", "                    H A N G M A N".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "\nGuess the word one letter at a time. Each solved word is worth 5 points.")?;
    writeln!(out, "Type 'exit' at any letter prompt to save your score and quit.\n")
}

/// Print the start of a level
pub fn print_level_start<W: Write>(out: &mut W, level: Level) -> io::Result<()> {
    let config = level.config();
    writeln!(
        out,
        "\n{} {} words, {} wrong guesses allowed per word.",
        format!("Level: {}", level.name().to_uppercase())
            .bright_yellow()
            .bold(),
        config.total_words,
        config.attempts_per_word
    )
}

/// Print the header for a new word
pub fn print_new_word<W: Write>(
    out: &mut W,
    round: &Round,
    number: u32,
    total: u32,
) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Word {number}/{total}: {} letters",
        round.word().len()
    )?;
    writeln!(out, "{} {}", "Hint:".bright_cyan().bold(), round.hint())?;
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// Print the masked word, attempts left and letters tried
pub fn print_round<W: Write>(out: &mut W, round: &Round, attempts_per_word: u32) -> io::Result<()> {
    writeln!(
        out,
        "\n  Word:     {}",
        spaced(&round.masked()).bright_white().bold()
    )?;
    writeln!(
        out,
        "  Attempts: {} ({})",
        attempts_bar(round.attempts_remaining(), attempts_per_word).red(),
        round.attempts_remaining()
    )?;
    writeln!(out, "  Guessed:  {}", letter_list(&round.guessed_sorted()))
}

/// Print the feedback for one guess
pub fn print_outcome<W: Write>(out: &mut W, outcome: GuessOutcome) -> io::Result<()> {
    match outcome {
        GuessOutcome::Invalid => {
            writeln!(out, "{}", "❌ Please enter a single letter.".red())
        }
        GuessOutcome::Duplicate(letter) => writeln!(
            out,
            "{}",
            format!("You already guessed '{letter}'. Try another letter.").yellow()
        ),
        GuessOutcome::Correct(letter) => writeln!(
            out,
            "{}",
            format!("✓ Good guess! '{letter}' is in the word.").green()
        ),
        GuessOutcome::Wrong { letter, remaining } => writeln!(
            out,
            "{}",
            format!("✗ '{letter}' is not in the word. Attempts remaining: {remaining}").red()
        ),
    }
}

/// Print a solved word and the session score
pub fn print_solved<W: Write>(out: &mut W, round: &Round, score: i64) -> io::Result<()> {
    writeln!(
        out,
        "\n{} The word was {}. Score: {}",
        "🎉 Solved!".bright_green().bold(),
        round.word().text().to_uppercase().bright_yellow().bold(),
        score.to_string().bright_cyan().bold()
    )
}

/// Print the out-of-attempts notice
pub fn print_lost<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "💀 Out of attempts!".red().bold())
}

/// Print the word after the player gives up on it
pub fn print_reveal<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    writeln!(
        out,
        "The word was {}.",
        round.word().text().to_uppercase().bright_yellow().bold()
    )
}

/// Print a finished level
pub fn print_level_complete<W: Write>(out: &mut W, level: Level, score: i64) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        format!("🏆 Level {} complete! Score: {score}", level.name().to_uppercase())
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())
}

/// Print the session score and, when saved, the player's stored total
pub fn print_final_score<W: Write>(
    out: &mut W,
    score: i64,
    record: Option<&ScoreRecord>,
) -> io::Result<()> {
    write!(out, "\nYour score: {}", score.to_string().bright_cyan().bold())?;
    if let Some(record) = record {
        write!(out, " (total for {}: {})", record.name, record.score)?;
    }
    writeln!(out)?;
    writeln!(out, "👋 Thanks for playing!\n")
}

/// Print a single player's record
pub fn print_record<W: Write>(out: &mut W, record: &ScoreRecord) -> io::Result<()> {
    writeln!(
        out,
        "{}: {} points (last level: {})",
        record.name.bright_white().bold(),
        record.score.to_string().bright_yellow(),
        record.level
    )
}

/// Print the leaderboard
pub fn print_leaderboard<W: Write>(out: &mut W, records: &[ScoreRecord]) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(50).cyan())?;
    writeln!(out, " {} ", "LEADERBOARD".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(50).cyan())?;

    if records.is_empty() {
        return writeln!(out, "\nNo scores recorded yet.");
    }

    for (rank, record) in records.iter().enumerate() {
        writeln!(
            out,
            "  {:>2}. {:<24} {:>6}  {}",
            rank + 1,
            record.name,
            record.score,
            record.level.bright_black()
        )?;
    }
    Ok(())
}
