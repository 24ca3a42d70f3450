//! Error types
//!
//! Lookup and dictionary failures degrade to "no data"; input errors abort the
//! current action before any lookup happens.

use thiserror::Error;

/// Failure talking to the external synonym service
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("service returned HTTP {0}")]
    Status(u16),

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid language code '{0}'")]
    Pattern(String),
}

/// Failure loading a custom dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("cannot read dictionary: {0}")]
    Io(#[from] std::io::Error),

    #[error("dictionary must map words to lists of synonyms: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Rejected user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no input given")]
    Empty,

    #[error("expected a single word, got {0}")]
    MultiWord(usize),
}

/// Top-level error for the crate
#[derive(Debug, Error)]
pub enum SynonymError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias used across the crate
pub type Result<T> = std::result::Result<T, SynonymError>;

/// A non-fatal problem reported alongside a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub word: String,
    pub message: String,
}

impl Warning {
    #[must_use]
    pub fn lookup_failed(word: &str, error: &SourceError) -> Self {
        Self {
            word: word.to_string(),
            message: error.to_string(),
        }
    }
}
