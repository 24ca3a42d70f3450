//! Custom synonym dictionary
//!
//! A flat in-memory mapping from word to synonyms, consulted before the external
//! source. Entries keep the order and duplicates the user supplied.

pub mod loader;

use rustc_hash::FxHashMap;

/// User-supplied word → synonyms mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomDictionary {
    entries: FxHashMap<String, Vec<String>>,
}

impl CustomDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Synonyms stored for `word`, or an empty slice
    ///
    /// Callers pass the lower-cased word; keys are matched exactly as loaded.
    #[inline]
    pub fn lookup(&self, word: &str) -> &[String] {
        self.entries.get(word).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<FxHashMap<String, Vec<String>>> for CustomDictionary {
    fn from(entries: FxHashMap<String, Vec<String>>) -> Self {
        Self { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for CustomDictionary
where
    K: Into<String>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(word, synonyms)| {
                (
                    word.into(),
                    synonyms.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self { entries }
    }
}
