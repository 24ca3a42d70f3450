//! User-facing strings
//!
//! One table per supported UI language; everything the CLI and TUI print to a
//! person goes through `Messages`.

use crate::error::InputError;
use std::fmt;
use std::str::FromStr;

/// UI language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    English,
    Ukrainian,
}

impl Locale {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Ukrainian => "uk",
        }
    }

    #[must_use]
    pub fn messages(self) -> &'static Messages {
        match self {
            Self::English => &ENGLISH,
            Self::Ukrainian => &UKRAINIAN,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "uk" | "ua" | "ukrainian" => Ok(Self::Ukrainian),
            other => Err(format!("unsupported locale '{other}' (expected 'en' or 'uk')")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Localized string table
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub custom_label: &'static str,
    pub external_label: &'static str,
    pub custom_source: &'static str,
    pub external_source: &'static str,
    pub modified_text: &'static str,
    pub replaced_words: &'static str,
    pub no_replacements: &'static str,
    pub no_synonyms: &'static str,
    pub empty_word: &'static str,
    pub empty_text: &'static str,
    pub multi_word: &'static str,
    pub lookup_warning: &'static str,
    pub dictionary_loaded: &'static str,
    pub dictionary_error: &'static str,
    pub saved_to: &'static str,
    pub nothing_to_save: &'static str,
}

impl Messages {
    /// "Loaded N entries" style confirmation
    #[must_use]
    pub fn loaded(&self, count: usize) -> String {
        self.dictionary_loaded.replace("{n}", &count.to_string())
    }

    /// Text shown when input is rejected
    #[must_use]
    pub const fn input_error(&self, error: &InputError, word_mode: bool) -> &'static str {
        match error {
            InputError::Empty if word_mode => self.empty_word,
            InputError::Empty => self.empty_text,
            InputError::MultiWord(_) => self.multi_word,
        }
    }
}

static ENGLISH: Messages = Messages {
    title: "Synonym Replacer",
    custom_label: "Custom synonyms",
    external_label: "Wiktionary synonyms",
    custom_source: "custom",
    external_source: "wiktionary",
    modified_text: "Modified text",
    replaced_words: "Replaced words",
    no_replacements: "No words were replaced with synonyms.",
    no_synonyms: "No synonyms found.",
    empty_word: "Please enter a word!",
    empty_text: "Please enter some text!",
    multi_word: "Please enter only one word!",
    lookup_warning: "Wiktionary error",
    dictionary_loaded: "Loaded {n} entries!",
    dictionary_error: "Error loading dictionary",
    saved_to: "Saved to",
    nothing_to_save: "Nothing to save.",
};

static UKRAINIAN: Messages = Messages {
    title: "Пошук синонімів",
    custom_label: "Власні синоніми",
    external_label: "Синоніми з Вікісловника",
    custom_source: "власний словник",
    external_source: "вікісловник",
    modified_text: "Змінений текст",
    replaced_words: "Замінені слова",
    no_replacements: "Жодне слово не було замінено синонімом.",
    no_synonyms: "Синонімів не знайдено.",
    empty_word: "Будь ласка, введіть слово!",
    empty_text: "Будь ласка, введіть текст!",
    multi_word: "Будь ласка, введіть лише одне слово!",
    lookup_warning: "Помилка Вікісловника",
    dictionary_loaded: "Завантажено {n} записів!",
    dictionary_error: "Помилка завантаження словника",
    saved_to: "Збережено у",
    nothing_to_save: "Немає що зберігати.",
};
