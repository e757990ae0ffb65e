//! Hangman - CLI
//!
//! Word-guessing game with remote words, dictionary hints and persistent scores.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hangman::{
    commands::{Console, PlayOptions, SessionEnd, run_play, show_leaderboard, show_player},
    config::{DEFAULT_DB_PATH, GameConfig, SourceConfig},
    store::SqliteScoreStore,
    words::{
        RemoteConfig,
        remote::{DEFAULT_DICTIONARY_URL, DEFAULT_MAX_HINT_ATTEMPTS, DEFAULT_WORD_URL},
    },
};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word letter by letter; scores are saved per player",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    play: PlayArgs,

    /// Score database file
    #[arg(long, global = true, env = "HANGMAN_DB", default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Increase log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default)
    Play,

    /// Show the highest scores
    Scores {
        /// Number of players to show
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Show one player's stored score
    Lookup {
        /// Player name (case-sensitive)
        name: String,
    },
}

#[derive(Args)]
struct PlayArgs {
    /// Random-word endpoint
    #[arg(global = true, long, env = "HANGMAN_WORD_URL", default_value = DEFAULT_WORD_URL)]
    word_url: String,

    /// Dictionary endpoint; the word is appended as a path segment
    #[arg(
        global = true,
        long,
        env = "HANGMAN_DICTIONARY_URL",
        default_value = DEFAULT_DICTIONARY_URL
    )]
    dictionary_url: String,

    /// Candidate words to try per fetch before giving up (0 = never give up)
    #[arg(global = true, long, default_value_t = DEFAULT_MAX_HINT_ATTEMPTS)]
    max_hint_attempts: u32,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(global = true, long)]
    timeout_secs: Option<u64>,

    /// Play with the built-in word list instead of the network
    #[arg(global = true, long, conflicts_with = "wordlist")]
    offline: bool,

    /// Play with a local `word|hint` list instead of the network
    #[arg(global = true, short = 'w', long)]
    wordlist: Option<PathBuf>,

    /// Disable the fetch spinner
    #[arg(global = true, long)]
    no_progress: bool,
}

impl PlayArgs {
    fn into_config(self, db_path: PathBuf) -> GameConfig {
        let source = if let Some(path) = self.wordlist {
            SourceConfig::File(path)
        } else if self.offline {
            SourceConfig::Embedded
        } else {
            SourceConfig::Remote(RemoteConfig {
                word_url: self.word_url,
                dictionary_url: self.dictionary_url,
                max_hint_attempts: self.max_hint_attempts,
                timeout: self.timeout_secs.map(Duration::from_secs),
            })
        };

        GameConfig {
            db_path,
            source,
            show_progress: !self.no_progress,
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flag
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.play.into_config(cli.db)),
        Commands::Scores { limit } => run_scores_command(&cli.db, limit),
        Commands::Lookup { name } => run_lookup_command(&cli.db, &name),
    }
}

fn open_store(path: &Path) -> Result<SqliteScoreStore> {
    SqliteScoreStore::open(path)
        .with_context(|| format!("failed to open score database {}", path.display()))
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let mut source = config.source.build().context("failed to set up word source")?;
    let mut store = open_store(&config.db_path)?;
    let mut console = Console::stdio();

    let options = PlayOptions {
        show_progress: config.show_progress,
    };
    let result = run_play(&mut source, &mut store, &mut console, options)?;
    store.close()?;

    if let SessionEnd::Aborted(e) = &result.end {
        tracing::error!(error = %e, "session aborted");
    }
    Ok(())
}

fn run_scores_command(db: &Path, limit: usize) -> Result<()> {
    let store = open_store(db)?;
    show_leaderboard(&store, limit, &mut io::stdout())?;
    Ok(())
}

fn run_lookup_command(db: &Path, name: &str) -> Result<()> {
    let store = open_store(db)?;
    show_player(&store, name, &mut io::stdout())?;
    Ok(())
}
