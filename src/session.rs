//! Per-session state
//!
//! A `Session` owns everything that persists between actions for one user:
//! the loaded custom dictionary, the synonym language and the UI locale.

use crate::dictionary::{CustomDictionary, loader};
use crate::error::DictionaryError;
use crate::i18n::{Locale, Messages};
use std::path::Path;
use tracing::{info, warn};

/// Session context passed to every operation
#[derive(Debug, Clone)]
pub struct Session {
    dictionary: CustomDictionary,
    language: String,
    locale: Locale,
}

impl Session {
    /// Start a session with an empty dictionary
    #[must_use]
    pub fn new(language: impl Into<String>, locale: Locale) -> Self {
        Self {
            dictionary: CustomDictionary::new(),
            language: language.into(),
            locale,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &CustomDictionary {
        &self.dictionary
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }

    /// Replace the dictionary wholesale
    pub fn set_dictionary(&mut self, dictionary: CustomDictionary) {
        self.dictionary = dictionary;
    }

    /// Load a dictionary file, replacing the current one on success
    ///
    /// On failure the previously loaded dictionary stays in place.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if the file cannot be read or parsed.
    pub fn load_dictionary<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, DictionaryError> {
        let path = path.as_ref();
        match loader::load_from_file(path) {
            Ok(dictionary) => {
                let count = dictionary.len();
                info!(path = %path.display(), entries = count, "custom dictionary loaded");
                self.dictionary = dictionary;
                Ok(count)
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "keeping previous dictionary");
                Err(error)
            }
        }
    }

    /// Same as `load_dictionary`, from JSON text
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Malformed` for invalid content.
    pub fn load_dictionary_str(&mut self, json: &str) -> Result<usize, DictionaryError> {
        let dictionary = loader::from_json_str(json)?;
        let count = dictionary.len();
        self.dictionary = dictionary;
        Ok(count)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new("uk", Locale::default())
    }
}
