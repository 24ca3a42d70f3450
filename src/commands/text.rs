//! Whole-text replacement command
//!
//! Tokenizes the input, resolves every replaceable word, and stitches the text
//! back together with the chosen synonyms.

use crate::core::{Resolution, ResolutionRecord, ResolutionReport, tokenize};
use crate::error::{InputError, Warning};
use crate::resolver::{ResolveOptions, Resolver};
use crate::session::Session;
use crate::source::SynonymSource;

/// Result of processing a text
#[derive(Debug, Clone, Default)]
pub struct TextResult {
    pub modified_text: String,
    pub report: ResolutionReport,
    pub warnings: Vec<Warning>,
}

impl TextResult {
    #[must_use]
    pub fn has_replacements(&self) -> bool {
        !self.report.is_empty()
    }
}

/// Number of words in `text` that will be looked up
#[must_use]
pub fn replaceable_word_count(text: &str) -> usize {
    tokenize(text).iter().filter(|t| t.is_replaceable()).count()
}

/// Replace words in `text` with their first synonym
///
/// # Errors
///
/// Returns `InputError::Empty` for blank text, before any lookup.
pub fn process_text<S: SynonymSource>(
    text: &str,
    session: &Session,
    source: S,
    options: ResolveOptions,
) -> Result<TextResult, InputError> {
    process_text_with_progress(text, session, source, options, |_| {})
}

/// Like `process_text`, calling `on_word` before each lookup
///
/// # Errors
///
/// Returns `InputError::Empty` for blank text, before any lookup.
pub fn process_text_with_progress<S, F>(
    text: &str,
    session: &Session,
    source: S,
    options: ResolveOptions,
    mut on_word: F,
) -> Result<TextResult, InputError>
where
    S: SynonymSource,
    F: FnMut(&str),
{
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let mut resolver = Resolver::new(source, session.dictionary(), options);
    let mut result = TextResult {
        modified_text: String::with_capacity(text.len()),
        ..TextResult::default()
    };

    for token in tokenize(text) {
        if !token.is_replaceable() {
            result.modified_text.push_str(token.text());
            continue;
        }

        on_word(token.text());
        let (resolution, lookup) = resolver.resolve(token.text());
        result.warnings.extend(lookup.warning);

        match resolution {
            Resolution::Replace {
                replacement,
                origin,
            } => {
                result.modified_text.push_str(&replacement);
                result.report.insert(ResolutionRecord {
                    original_word: token.text().to_string(),
                    replaced_with: replacement,
                    candidates: lookup.candidates,
                    origin,
                });
            }
            Resolution::Keep => result.modified_text.push_str(token.text()),
        }
    }

    Ok(result)
}
