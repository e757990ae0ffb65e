//! Runtime configuration
//!
//! Settings gathered from the command line and environment, and the wiring
//! from those settings to a concrete word source.

use crate::words::loader::load_from_file;
use crate::words::{OfflineWordSource, RemoteConfig, RemoteWordSource, SourceType};
use std::path::PathBuf;
use thiserror::Error;

/// Default location of the score database
pub const DEFAULT_DB_PATH: &str = "hangman_scores.db";

/// Where words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// Word service plus dictionary
    Remote(RemoteConfig),
    /// List compiled into the binary
    Embedded,
    /// `word|hint` list read from a file
    File(PathBuf),
}

/// Word source could not be set up
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to create HTTP client: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read word list {}: {source}", .path.display())]
    WordList {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("word list {} has no usable entries", .0.display())]
    EmptyWordList(PathBuf),
}

impl SourceConfig {
    /// Build the source this config describes
    ///
    /// # Errors
    /// Returns `ConfigError` if the HTTP client cannot be created or a word
    /// list file is unreadable or empty.
    pub fn build(&self) -> Result<SourceType, ConfigError> {
        match self {
            Self::Remote(remote) => Ok(SourceType::Remote(RemoteWordSource::from_config(remote)?)),
            Self::Embedded => Ok(SourceType::Offline(OfflineWordSource::embedded())),
            Self::File(path) => {
                let entries = load_from_file(path).map_err(|source| ConfigError::WordList {
                    path: path.clone(),
                    source,
                })?;
                if entries.is_empty() {
                    return Err(ConfigError::EmptyWordList(path.clone()));
                }
                Ok(SourceType::Offline(OfflineWordSource::new(entries)))
            }
        }
    }
}

/// Everything a play session needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub db_path: PathBuf,
    pub source: SourceConfig,
    pub show_progress: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            source: SourceConfig::Remote(RemoteConfig::default()),
            show_progress: true,
        }
    }
}
