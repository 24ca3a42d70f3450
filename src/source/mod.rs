//! External synonym sources
//!
//! Defines the `SynonymSource` trait and the concrete sources the CLI can pick
//! between at runtime.

mod template;
pub mod wiktionary;

pub use template::SynTemplate;
pub use wiktionary::{DEFAULT_ENDPOINT, WiktionaryClient};

use crate::error::SourceError;

/// A service that can be asked for synonyms of a single word
pub trait SynonymSource {
    /// Fetch unique synonyms for an already lower-cased word
    ///
    /// # Errors
    ///
    /// Returns `SourceError` on transport or response-shape failures. Callers
    /// treat an error as "no synonyms".
    fn fetch(&self, word: &str) -> Result<Vec<String>, SourceError>;
}

impl<S: SynonymSource + ?Sized> SynonymSource for &S {
    fn fetch(&self, word: &str) -> Result<Vec<String>, SourceError> {
        (**self).fetch(word)
    }
}

/// Source that never has any synonyms
///
/// Used for dictionary-only runs without network access.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSource;

impl SynonymSource for OfflineSource {
    fn fetch(&self, _word: &str) -> Result<Vec<String>, SourceError> {
        Ok(Vec::new())
    }
}

/// Enum wrapper for all source types
///
/// Allows runtime selection of the source while keeping static dispatch.
pub enum SourceType {
    /// Live Wiktionary lookups (default)
    Wiktionary(WiktionaryClient),
    /// No external lookups
    Offline(OfflineSource),
}

impl SynonymSource for SourceType {
    fn fetch(&self, word: &str) -> Result<Vec<String>, SourceError> {
        match self {
            Self::Wiktionary(s) => s.fetch(word),
            Self::Offline(s) => s.fetch(word),
        }
    }
}

impl SourceType {
    /// Create a source from its name
    ///
    /// Supported names: "wiktionary", "offline" (alias "none"). Unrecognized
    /// names fall back to Wiktionary.
    ///
    /// # Errors
    ///
    /// Returns an error if the Wiktionary client cannot be built for `language`.
    pub fn from_name(name: &str, endpoint: &str, language: &str) -> Result<Self, SourceError> {
        match name {
            "offline" | "none" => Ok(Self::Offline(OfflineSource)),
            _ => WiktionaryClient::new(endpoint, language).map(Self::Wiktionary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_source_returns_nothing() {
        assert!(OfflineSource.fetch("quick").unwrap().is_empty());
    }

    #[test]
    fn from_name_offline() {
        let source = SourceType::from_name("offline", DEFAULT_ENDPOINT, "en").unwrap();
        assert!(matches!(source, SourceType::Offline(_)));
        assert!(source.fetch("quick").unwrap().is_empty());

        let source = SourceType::from_name("none", DEFAULT_ENDPOINT, "en").unwrap();
        assert!(matches!(source, SourceType::Offline(_)));
    }

    #[test]
    fn from_name_defaults_to_wiktionary() {
        let source = SourceType::from_name("wiktionary", DEFAULT_ENDPOINT, "en").unwrap();
        assert!(matches!(source, SourceType::Wiktionary(_)));

        let source = SourceType::from_name("whatever", DEFAULT_ENDPOINT, "uk").unwrap();
        assert!(matches!(source, SourceType::Wiktionary(_)));
    }

    #[test]
    fn from_name_rejects_bad_language() {
        assert!(SourceType::from_name("wiktionary", DEFAULT_ENDPOINT, "").is_err());
    }

    #[test]
    fn reference_forwards_to_source() {
        let source = OfflineSource;
        let by_ref: &dyn SynonymSource = &source;
        assert!(by_ref.fetch("word").unwrap().is_empty());
    }
}
