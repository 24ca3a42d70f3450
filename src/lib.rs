//! Synonym Replacer
//!
//! Looks up synonyms for words in a user-supplied dictionary and on Wiktionary,
//! and optionally substitutes the first synonym found back into a text.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use synonym_replacer::commands::process_text;
//! use synonym_replacer::resolver::ResolveOptions;
//! use synonym_replacer::session::Session;
//! use synonym_replacer::source::{DEFAULT_ENDPOINT, WiktionaryClient};
//!
//! let mut session = Session::default();
//! session.load_dictionary_str(r#"{"quick": ["fast"]}"#).unwrap();
//!
//! let source = WiktionaryClient::new(DEFAULT_ENDPOINT, session.language()).unwrap();
//! let result = process_text("The quick fox.", &session, &source, ResolveOptions::default()).unwrap();
//! println!("{}", result.modified_text);
//! ```

// Core domain types
pub mod core;

// Custom dictionary store
pub mod dictionary;

// External synonym sources
pub mod source;

// Synonym resolution
pub mod resolver;

// Session state
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod error;
pub mod i18n;
