//! Plain-text export of results
//!
//! Produces the downloadable artifact for each mode and writes it to disk.

use super::{TextResult, WordResult};
use crate::error::Result;
use crate::i18n::Messages;
use std::fs;
use std::path::Path;

/// Artifact for single-word mode
///
/// One `<source>: <synonyms>` line per source that found something.
#[must_use]
pub fn word_artifact(result: &WordResult, messages: &Messages) -> String {
    let mut lines = Vec::with_capacity(2);
    if !result.custom_synonyms().is_empty() {
        lines.push(format!(
            "{}: {}",
            messages.custom_label,
            result.custom_synonyms().join(", ")
        ));
    }
    if !result.wiki_synonyms().is_empty() {
        lines.push(format!(
            "{}: {}",
            messages.external_label,
            result.wiki_synonyms().join(", ")
        ));
    }
    lines.join("\n")
}

/// Artifact for whole-text mode
///
/// `None` when nothing was replaced, matching the rule that a download is only
/// offered for changed text.
#[must_use]
pub fn text_artifact(result: &TextResult) -> Option<&str> {
    result
        .has_replacements()
        .then_some(result.modified_text.as_str())
}

/// Write an artifact to `path`
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub fn write_artifact<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
