//! Remote word source
//!
//! Pulls a random word from a word service, then looks its definition up in a
//! dictionary service to use as the hint. Unusable pairs are discarded and a
//! new word is requested.

use super::{Challenge, FetchError, WordSource};
use crate::core::Word;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default random-word endpoint
pub const DEFAULT_WORD_URL: &str = "https://random-words-api.vercel.app/word";

/// Default dictionary endpoint; the word is appended as a path segment
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Default number of candidate words tried before giving up
pub const DEFAULT_MAX_HINT_ATTEMPTS: u32 = 20;

/// Endpoints and limits for the remote source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub word_url: String,
    pub dictionary_url: String,
    /// Candidate words tried per fetch; 0 retries forever
    pub max_hint_attempts: u32,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            word_url: DEFAULT_WORD_URL.to_string(),
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            max_hint_attempts: DEFAULT_MAX_HINT_ATTEMPTS,
            timeout: None,
        }
    }
}

/// The two calls the remote source needs
pub trait WordApi {
    /// One candidate word from the word service
    ///
    /// # Errors
    /// Any transport or parse failure, as `FetchError::Terminal`.
    fn random_word(&self) -> Result<String, FetchError>;

    /// The first definition of `word`
    ///
    /// # Errors
    /// Any transport or parse failure, as `FetchError::Transient`.
    fn definition(&self, word: &str) -> Result<String, FetchError>;
}

/// Extract the word from a `[{"word": ...}, ...]` response
///
/// Only the first entry is looked at; later entries may have any shape.
///
/// # Errors
/// `FetchError::Terminal` if the body is not that shape.
pub fn parse_word_response(body: &str) -> Result<String, FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Terminal(e.to_string()))?;

    value
        .pointer("/0/word")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| FetchError::Terminal("word service returned no word".to_string()))
}

/// Extract `[0].meanings[0].definitions[0].definition` from a dictionary response
///
/// # Errors
/// `FetchError::Transient` if the body is not that shape.
pub fn parse_definition_response(body: &str) -> Result<String, FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Transient(e.to_string()))?;

    value
        .pointer("/0/meanings/0/definitions/0/definition")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| FetchError::Transient("dictionary entry has no definition".to_string()))
}

/// `WordApi` over HTTP
pub struct HttpWordApi {
    client: Client,
    word_url: String,
    dictionary_url: String,
}

impl HttpWordApi {
    /// Build the HTTP client
    ///
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &RemoteConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            word_url: config.word_url.clone(),
            dictionary_url: config.dictionary_url.trim_end_matches('/').to_string(),
        })
    }

    fn get_text(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client.get(url).send()?.error_for_status()?.text()
    }
}

impl WordApi for HttpWordApi {
    fn random_word(&self) -> Result<String, FetchError> {
        let body = self
            .get_text(&self.word_url)
            .map_err(|e| FetchError::Terminal(e.to_string()))?;
        parse_word_response(&body)
    }

    fn definition(&self, word: &str) -> Result<String, FetchError> {
        let url = format!("{}/{word}", self.dictionary_url);
        let body = self
            .get_text(&url)
            .map_err(|e| FetchError::Transient(e.to_string()))?;
        parse_definition_response(&body)
    }
}

/// Word source backed by a `WordApi`
pub struct RemoteWordSource<A: WordApi> {
    api: A,
    max_attempts: u32,
}

impl<A: WordApi> RemoteWordSource<A> {
    /// Create a source that tries at most `max_attempts` candidates per fetch
    ///
    /// `max_attempts == 0` keeps asking for new words until one has a usable
    /// hint; a dictionary that never answers then stalls the game.
    pub const fn new(api: A, max_attempts: u32) -> Self {
        Self { api, max_attempts }
    }

    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }
}

impl RemoteWordSource<HttpWordApi> {
    /// Create an HTTP-backed source from config
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &RemoteConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(HttpWordApi::new(config)?, config.max_hint_attempts))
    }
}

impl<A: WordApi> WordSource for RemoteWordSource<A> {
    fn fetch_word_with_hint(&mut self) -> Result<Challenge, FetchError> {
        let mut attempts = 0;

        loop {
            if self.max_attempts != 0 && attempts >= self.max_attempts {
                warn!(attempts, "giving up on finding a word with a usable hint");
                return Err(FetchError::Exhausted(attempts));
            }
            attempts += 1;

            let candidate = self.api.random_word().inspect_err(|e| {
                warn!(error = %e, "word service failed");
            })?;

            let hint = match self.api.definition(&candidate) {
                Ok(hint) => hint,
                Err(e) => {
                    debug!(word = %candidate, error = %e, "no definition, trying another word");
                    continue;
                }
            };

            if hint.trim().is_empty() {
                debug!(word = %candidate, "empty definition, trying another word");
                continue;
            }

            match Word::new(candidate.as_str()) {
                Ok(word) => {
                    info!(attempts, "fetched word");
                    return Ok(Challenge { word, hint });
                }
                Err(e) => {
                    debug!(word = %candidate, error = %e, "unplayable word, trying another");
                }
            }
        }
    }
}
