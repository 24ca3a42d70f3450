//! Single-word lookup command
//!
//! Shows every synonym both sources know for one word, without replacing
//! anything.

use crate::core::SynonymCandidates;
use crate::error::{InputError, Warning};
use crate::resolver::{ResolveOptions, Resolver};
use crate::session::Session;
use crate::source::SynonymSource;

/// Result of looking up a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordResult {
    pub word: String,
    pub candidates: SynonymCandidates,
    pub warnings: Vec<Warning>,
}

impl WordResult {
    #[must_use]
    pub fn custom_synonyms(&self) -> &[String] {
        &self.candidates.custom
    }

    #[must_use]
    pub fn wiki_synonyms(&self) -> &[String] {
        &self.candidates.external
    }
}

/// Check that the input is exactly one word
///
/// Returns the trimmed word.
///
/// # Errors
///
/// Returns `InputError::Empty` for blank input and `InputError::MultiWord` when
/// the input contains whitespace-separated parts.
pub fn validate_word(input: &str) -> Result<&str, InputError> {
    let word = input.trim();
    if word.is_empty() {
        return Err(InputError::Empty);
    }

    let parts = word.split_whitespace().count();
    if parts > 1 {
        return Err(InputError::MultiWord(parts));
    }

    Ok(word)
}

/// Look up synonyms for one word in the session dictionary and the source
///
/// # Errors
///
/// Returns an `InputError` before any lookup if the input is not a single word.
/// Source failures are not errors; they appear in `warnings`.
pub fn process_word<S: SynonymSource>(
    input: &str,
    session: &Session,
    source: S,
) -> Result<WordResult, InputError> {
    let word = validate_word(input)?;

    let mut resolver = Resolver::new(source, session.dictionary(), ResolveOptions::default());
    let lookup = resolver.lookup(word);

    Ok(WordResult {
        word: word.to_string(),
        candidates: lookup.candidates,
        warnings: lookup.warning.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use std::cell::Cell;

    struct CountingSource {
        synonyms: Vec<String>,
        calls: Cell<usize>,
    }

    impl CountingSource {
        fn new(synonyms: &[&str]) -> Self {
            Self {
                synonyms: synonyms.iter().map(|s| (*s).to_string()).collect(),
                calls: Cell::new(0),
            }
        }
    }

    impl SynonymSource for CountingSource {
        fn fetch(&self, _word: &str) -> Result<Vec<String>, SourceError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.synonyms.clone())
        }
    }

    struct BrokenSource;

    impl SynonymSource for BrokenSource {
        fn fetch(&self, _word: &str) -> Result<Vec<String>, SourceError> {
            Err(SourceError::Status(500))
        }
    }

    #[test]
    fn validate_accepts_single_word() {
        assert_eq!(validate_word("  hello \n"), Ok("hello"));
    }

    #[test]
    fn validate_rejects_empty() {
        assert_eq!(validate_word(""), Err(InputError::Empty));
        assert_eq!(validate_word("   \t"), Err(InputError::Empty));
    }

    #[test]
    fn validate_rejects_multiple_words() {
        assert_eq!(validate_word("hello world"), Err(InputError::MultiWord(2)));
    }

    #[test]
    fn multi_word_input_makes_no_lookups() {
        let session = Session::default();
        let source = CountingSource::new(&["greeting"]);

        let result = process_word("hello world", &session, &source);
        assert_eq!(result, Err(InputError::MultiWord(2)));
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn both_lists_reported() {
        let mut session = Session::default();
        session
            .load_dictionary_str(r#"{"hello": ["hi", "hey"]}"#)
            .unwrap();
        let source = CountingSource::new(&["greetings", "hi"]);

        let result = process_word("Hello", &session, &source).unwrap();
        assert_eq!(result.word, "Hello");
        assert_eq!(result.custom_synonyms(), &["hi", "hey"]);
        assert_eq!(result.wiki_synonyms(), &["greetings", "hi"]);
        assert!(result.warnings.is_empty());
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn source_failure_becomes_warning() {
        let mut session = Session::default();
        session.load_dictionary_str(r#"{"hello": ["hi"]}"#).unwrap();

        let result = process_word("hello", &session, BrokenSource).unwrap();
        assert_eq!(result.custom_synonyms(), &["hi"]);
        assert!(result.wiki_synonyms().is_empty());
        assert_eq!(result.warnings.len(), 1);
    }
}
