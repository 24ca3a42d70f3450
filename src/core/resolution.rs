//! Synonym candidates and replacement decisions
//!
//! Pure data describing what each source offered for a word and which
//! candidate, if any, was chosen to replace it.

use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Where a replacement came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SynonymOrigin {
    /// The user-supplied dictionary
    Custom,
    /// The external lookup service
    External,
}

impl SynonymOrigin {
    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::External => "external",
        }
    }
}

impl fmt::Display for SynonymOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both candidate lists collected for one word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymCandidates {
    pub custom: Vec<String>,
    pub external: Vec<String>,
}

impl SynonymCandidates {
    #[must_use]
    pub const fn new(custom: Vec<String>, external: Vec<String>) -> Self {
        Self { custom, external }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.custom.is_empty() && self.external.is_empty()
    }

    /// Pick the replacement for this word
    ///
    /// The first custom synonym always wins; the first external synonym is used
    /// only when the dictionary has nothing. An empty chosen synonym keeps the
    /// word.
    #[must_use]
    pub fn decide(&self) -> Resolution {
        let chosen = match (self.custom.first(), self.external.first()) {
            (Some(first), _) => Some((first, SynonymOrigin::Custom)),
            (None, Some(first)) => Some((first, SynonymOrigin::External)),
            (None, None) => None,
        };

        match chosen {
            Some((first, origin)) if !first.is_empty() => Resolution::Replace {
                replacement: first.clone(),
                origin,
            },
            _ => Resolution::Keep,
        }
    }
}

/// Outcome of resolving one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Replace {
        replacement: String,
        origin: SynonymOrigin,
    },
    Keep,
}

/// Audit trail for one replaced word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRecord {
    pub original_word: String,
    pub replaced_with: String,
    pub candidates: SynonymCandidates,
    pub origin: SynonymOrigin,
}

/// Ordered mapping from original word to its record
///
/// Keys keep the position of their first insertion; re-inserting a word
/// overwrites its record in place.
#[derive(Debug, Clone, Default)]
pub struct ResolutionReport {
    records: Vec<ResolutionRecord>,
    index: FxHashMap<String, usize>,
}

impl ResolutionReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: ResolutionRecord) {
        if let Some(&slot) = self.index.get(&record.original_word) {
            self.records[slot] = record;
        } else {
            self.index
                .insert(record.original_word.clone(), self.records.len());
            self.records.push(record);
        }
    }

    #[must_use]
    pub fn get(&self, original_word: &str) -> Option<&ResolutionRecord> {
        self.index.get(original_word).map(|&slot| &self.records[slot])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolutionRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ResolutionReport {
    type Item = &'a ResolutionRecord;
    type IntoIter = std::slice::Iter<'a, ResolutionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Drop repeated entries, keeping the first occurrence of each
///
/// # Examples
/// ```
/// use synonym_replacer::core::dedup_preserving_order;
///
/// let raw = vec!["a", "b", "a", "c"].into_iter().map(String::from);
/// assert_eq!(dedup_preserving_order(raw), vec!["a", "b", "c"]);
/// ```
pub fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = FxHashSet::default();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
