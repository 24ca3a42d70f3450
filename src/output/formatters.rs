//! Formatting utilities for terminal output

use crate::core::{ResolutionRecord, SynonymOrigin};
use crate::error::Warning;
use crate::i18n::Messages;

/// Join synonyms into a comma-separated list
#[must_use]
pub fn join_synonyms(synonyms: &[String]) -> String {
    synonyms.join(", ")
}

/// Localized name of a synonym source
#[must_use]
pub const fn origin_label(origin: SynonymOrigin, messages: &Messages) -> &'static str {
    match origin {
        SynonymOrigin::Custom => messages.custom_source,
        SynonymOrigin::External => messages.external_source,
    }
}

/// One-line summary of a replacement: `word → synonym (source)`
#[must_use]
pub fn record_heading(record: &ResolutionRecord, messages: &Messages) -> String {
    format!(
        "{} → {} ({})",
        record.original_word,
        record.replaced_with,
        origin_label(record.origin, messages)
    )
}

/// Labelled candidate lines for a record, skipping empty sources
#[must_use]
pub fn candidate_lines(record: &ResolutionRecord, messages: &Messages) -> Vec<String> {
    let mut lines = Vec::new();
    if !record.candidates.custom.is_empty() {
        lines.push(format!(
            "{}: {}",
            messages.custom_label,
            join_synonyms(&record.candidates.custom)
        ));
    }
    if !record.candidates.external.is_empty() {
        lines.push(format!(
            "{}: {}",
            messages.external_label,
            join_synonyms(&record.candidates.external)
        ));
    }
    lines
}

/// Human-readable form of a degraded lookup
#[must_use]
pub fn warning_line(warning: &Warning, messages: &Messages) -> String {
    format!(
        "{} ({}): {}",
        messages.lookup_warning, warning.word, warning.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SynonymCandidates;
    use crate::i18n::Locale;

    fn record() -> ResolutionRecord {
        ResolutionRecord {
            original_word: "Quick".to_string(),
            replaced_with: "fast".to_string(),
            candidates: SynonymCandidates::new(
                vec!["fast".to_string()],
                vec!["rapid".to_string(), "speedy".to_string()],
            ),
            origin: SynonymOrigin::Custom,
        }
    }

    #[test]
    fn heading_shows_origin() {
        let messages = Locale::English.messages();
        assert_eq!(record_heading(&record(), messages), "Quick → fast (custom)");
    }

    #[test]
    fn candidate_lines_for_both_sources() {
        let lines = candidate_lines(&record(), Locale::English.messages());
        assert_eq!(
            lines,
            vec![
                "Custom synonyms: fast".to_string(),
                "Wiktionary synonyms: rapid, speedy".to_string(),
            ]
        );
    }

    #[test]
    fn candidate_lines_skip_empty() {
        let mut rec = record();
        rec.candidates.external.clear();
        assert_eq!(candidate_lines(&rec, Locale::English.messages()).len(), 1);
    }

    #[test]
    fn origin_labels_are_localized() {
        let en = Locale::English.messages();
        let uk = Locale::Ukrainian.messages();
        assert_eq!(origin_label(SynonymOrigin::External, en), "wiktionary");
        assert_ne!(
            origin_label(SynonymOrigin::External, en),
            origin_label(SynonymOrigin::External, uk)
        );
    }

    #[test]
    fn warning_line_names_word() {
        let warning = Warning {
            word: "fox".to_string(),
            message: "service returned HTTP 503".to_string(),
        };
        assert_eq!(
            warning_line(&warning, Locale::English.messages()),
            "Wiktionary error (fox): service returned HTTP 503"
        );
    }
}
