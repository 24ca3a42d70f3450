//! Main synonym resolver
//!
//! Queries the custom dictionary and the external source for each word and
//! decides on a replacement.

use crate::core::{Resolution, SynonymCandidates};
use crate::dictionary::CustomDictionary;
use crate::error::Warning;
use crate::source::SynonymSource;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

/// Resolver configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Reuse external results for words already looked up by this resolver
    pub cache_lookups: bool,
}

/// Everything learned about one word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookup {
    pub candidates: SynonymCandidates,
    /// Set when the external source failed and was treated as empty
    pub warning: Option<Warning>,
}

impl Lookup {
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.candidates.decide()
    }
}

/// Synonym resolver for one pass over the input
///
/// Both sources are consulted for every word, even when the dictionary already
/// has an answer, so the report always shows the full external list.
pub struct Resolver<'a, S: SynonymSource> {
    source: S,
    dictionary: &'a CustomDictionary,
    options: ResolveOptions,
    cache: FxHashMap<String, Vec<String>>,
}

impl<'a, S: SynonymSource> Resolver<'a, S> {
    /// Create a resolver over a dictionary and an external source
    pub fn new(source: S, dictionary: &'a CustomDictionary, options: ResolveOptions) -> Self {
        Self {
            source,
            dictionary,
            options,
            cache: FxHashMap::default(),
        }
    }

    /// Collect candidates for `word` from both sources
    ///
    /// The word is lower-cased before either lookup. External failures are
    /// logged and returned as a warning with an empty external list.
    pub fn lookup(&mut self, word: &str) -> Lookup {
        let key = word.to_lowercase();
        let custom = self.dictionary.lookup(&key).to_vec();

        let (external, warning) = match self.fetch_external(&key) {
            Ok(found) => (found, None),
            Err(warning) => (Vec::new(), Some(warning)),
        };

        debug!(
            word = %key,
            custom = custom.len(),
            external = external.len(),
            "resolved candidates"
        );

        Lookup {
            candidates: SynonymCandidates::new(custom, external),
            warning,
        }
    }

    /// Look up `word` and decide on its replacement
    pub fn resolve(&mut self, word: &str) -> (Resolution, Lookup) {
        let lookup = self.lookup(word);
        (lookup.resolution(), lookup)
    }

    fn fetch_external(&mut self, key: &str) -> Result<Vec<String>, Warning> {
        if self.options.cache_lookups
            && let Some(hit) = self.cache.get(key)
        {
            return Ok(hit.clone());
        }

        match self.source.fetch(key) {
            Ok(found) => {
                if self.options.cache_lookups {
                    self.cache.insert(key.to_string(), found.clone());
                }
                Ok(found)
            }
            Err(error) => {
                warn!(word = %key, %error, "external synonym lookup failed");
                Err(Warning::lookup_failed(key, &error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SynonymOrigin;
    use crate::error::SourceError;
    use std::cell::{Cell, RefCell};

    /// Map-backed source that counts calls and can be told to fail
    #[derive(Default)]
    struct FakeSource {
        entries: FxHashMap<String, Vec<String>>,
        failing: Vec<String>,
        calls: Cell<usize>,
        queried: RefCell<Vec<String>>,
    }

    impl FakeSource {
        fn with(mut self, word: &str, synonyms: &[&str]) -> Self {
            self.entries.insert(
                word.to_string(),
                synonyms.iter().map(|s| (*s).to_string()).collect(),
            );
            self
        }

        fn failing_on(mut self, word: &str) -> Self {
            self.failing.push(word.to_string());
            self
        }
    }

    impl SynonymSource for FakeSource {
        fn fetch(&self, word: &str) -> Result<Vec<String>, SourceError> {
            self.calls.set(self.calls.get() + 1);
            self.queried.borrow_mut().push(word.to_string());
            if self.failing.iter().any(|w| w == word) {
                return Err(SourceError::Status(503));
            }
            Ok(self.entries.get(word).cloned().unwrap_or_default())
        }
    }

    fn dictionary(entries: &[(&str, &[&str])]) -> CustomDictionary {
        entries
            .iter()
            .map(|(word, syns)| (*word, syns.iter().copied()))
            .collect()
    }

    #[test]
    fn custom_takes_precedence() {
        let dict = dictionary(&[("quick", &["x", "y"])]);
        let source = FakeSource::default().with("quick", &["z"]);
        let mut resolver = Resolver::new(&source, &dict, ResolveOptions::default());

        let (resolution, lookup) = resolver.resolve("quick");
        assert_eq!(
            resolution,
            Resolution::Replace {
                replacement: "x".to_string(),
                origin: SynonymOrigin::Custom,
            }
        );
        assert_eq!(lookup.candidates.external, vec!["z"]);
    }

    #[test]
    fn custom_list_passes_through_unchanged() {
        let dict = dictionary(&[("quick", &["fast", "fast", "rapid"])]);
        let source = FakeSource::default();
        let mut resolver = Resolver::new(&source, &dict, ResolveOptions::default());

        let lookup = resolver.lookup("quick");
        assert_eq!(lookup.candidates.custom, vec!["fast", "fast", "rapid"]);
    }

    #[test]
    fn external_fallback() {
        let dict = CustomDictionary::new();
        let source = FakeSource::default().with("fox", &["z", "w"]);
        let mut resolver = Resolver::new(&source, &dict, ResolveOptions::default());

        let (resolution, _) = resolver.resolve("fox");
        assert_eq!(
            resolution,
            Resolution::Replace {
                replacement: "z".to_string(),
                origin: SynonymOrigin::External,
            }
        );
    }

    #[test]
    fn external_queried_even_with_custom_hit() {
        let dict = dictionary(&[("quick", &["fast"])]);
        let source = FakeSource::default();
        let mut resolver = Resolver::new(&source, &dict, ResolveOptions::default());

        resolver.lookup("quick");
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn lookups_use_lowercase_key() {
        let dict = dictionary(&[("quick", &["fast"])]);
        let source = FakeSource::default();
        let mut resolver = Resolver::new(&source, &dict, ResolveOptions::default());

        let lookup = resolver.lookup("QuIcK");
        assert_eq!(lookup.candidates.custom, vec!["fast"]);
        assert_eq!(*source.queried.borrow(), vec!["quick"]);
    }

    #[test]
    fn source_failure_degrades_to_empty() {
        let dict = dictionary(&[("quick", &["fast"])]);
        let source = FakeSource::default().failing_on("quick");
        let mut resolver = Resolver::new(&source, &dict, ResolveOptions::default());

        let lookup = resolver.lookup("quick");
        assert!(lookup.candidates.external.is_empty());
        assert_eq!(lookup.candidates.custom, vec!["fast"]);

        let warning = lookup.warning.unwrap();
        assert_eq!(warning.word, "quick");
        assert!(warning.message.contains("503"));
    }

    #[test]
    fn nothing_found_keeps_word() {
        let dict = CustomDictionary::new();
        let source = FakeSource::default();
        let mut resolver = Resolver::new(&source, &dict, ResolveOptions::default());

        let (resolution, lookup) = resolver.resolve("the");
        assert_eq!(resolution, Resolution::Keep);
        assert!(lookup.warning.is_none());
    }

    #[test]
    fn repeated_words_refetched_without_cache() {
        let dict = CustomDictionary::new();
        let source = FakeSource::default().with("fox", &["vixen"]);
        let mut resolver = Resolver::new(&source, &dict, ResolveOptions::default());

        resolver.lookup("fox");
        resolver.lookup("Fox");
        assert_eq!(source.calls.get(), 2);
    }

    #[test]
    fn cache_reuses_external_results() {
        let dict = CustomDictionary::new();
        let source = FakeSource::default().with("fox", &["vixen"]);
        let options = ResolveOptions {
            cache_lookups: true,
        };
        let mut resolver = Resolver::new(&source, &dict, options);

        let first = resolver.lookup("fox");
        let second = resolver.lookup("FOX");
        assert_eq!(first, second);
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn cache_does_not_remember_failures() {
        let dict = CustomDictionary::new();
        let source = FakeSource::default().failing_on("fox");
        let options = ResolveOptions {
            cache_lookups: true,
        };
        let mut resolver = Resolver::new(&source, &dict, options);

        assert!(resolver.lookup("fox").warning.is_some());
        assert!(resolver.lookup("fox").warning.is_some());
        assert_eq!(source.calls.get(), 2);
    }
}
