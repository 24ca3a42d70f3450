//! Dictionary loading utilities
//!
//! Reads a JSON object of the shape `{"word": ["synonym1", "synonym2"]}`.

use super::CustomDictionary;
use crate::error::DictionaryError;
use rustc_hash::FxHashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Parse a dictionary from JSON text
///
/// # Errors
///
/// Returns `DictionaryError::Malformed` if the text is not an object whose
/// values are all arrays of strings.
///
/// # Examples
/// ```
/// use synonym_replacer::dictionary::loader::from_json_str;
///
/// let dict = from_json_str(r#"{"quick": ["fast", "rapid"]}"#).unwrap();
/// assert_eq!(dict.lookup("quick"), &["fast", "rapid"]);
/// ```
pub fn from_json_str(json: &str) -> Result<CustomDictionary, DictionaryError> {
    let entries: FxHashMap<String, Vec<String>> = serde_json::from_str(json)?;
    Ok(CustomDictionary::from(entries))
}

/// Parse a dictionary from any reader
///
/// # Errors
///
/// Returns an I/O error if reading fails, or `Malformed` for invalid content.
pub fn from_reader<R: Read>(reader: R) -> Result<CustomDictionary, DictionaryError> {
    let entries: FxHashMap<String, Vec<String>> = serde_json::from_reader(reader)?;
    Ok(CustomDictionary::from(entries))
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or `Malformed` for invalid
/// content.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CustomDictionary, DictionaryError> {
    let content = fs::read_to_string(path)?;
    from_json_str(&content)
}
