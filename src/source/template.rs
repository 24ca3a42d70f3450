//! Synonym template extraction
//!
//! Wiktionary annotates synonyms with `{{syn|<lang>|word1|word2|...}}`. This
//! module pulls the word arguments out of raw wikitext.

use crate::core::dedup_preserving_order;
use crate::error::SourceError;
use regex::Regex;

/// Compiled matcher for one language's synonym template
#[derive(Debug, Clone)]
pub struct SynTemplate {
    language: String,
    pattern: Regex,
}

impl SynTemplate {
    /// Build the matcher for a language code such as `en` or `uk`
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Pattern` if the code is empty or contains a pipe or
    /// brace, which would break the template syntax.
    pub fn new(language: &str) -> Result<Self, SourceError> {
        if language.is_empty() || language.contains(['|', '{', '}']) {
            return Err(SourceError::Pattern(language.to_string()));
        }

        let source = format!(r"\{{\{{syn\|{}\|([^}}]+)\}}\}}", regex::escape(language));
        let pattern =
            Regex::new(&source).map_err(|_| SourceError::Pattern(language.to_string()))?;

        Ok(Self {
            language: language.to_string(),
            pattern,
        })
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Collect every synonym named in the markup
    ///
    /// Arguments are trimmed, empty ones dropped, and the result deduplicated
    /// with first occurrence kept.
    ///
    /// # Examples
    /// ```
    /// use synonym_replacer::source::SynTemplate;
    ///
    /// let template = SynTemplate::new("en").unwrap();
    /// let found = template.extract("{{syn|en|fast| rapid |fast}}");
    /// assert_eq!(found, vec!["fast", "rapid"]);
    /// ```
    #[must_use]
    pub fn extract(&self, markup: &str) -> Vec<String> {
        let raw = self
            .pattern
            .captures_iter(markup)
            .filter_map(|caps| caps.get(1))
            .flat_map(|args| args.as_str().split('|'))
            .map(str::trim)
            .filter(|arg| !arg.is_empty())
            .map(str::to_string);

        dedup_preserving_order(raw)
    }
}
