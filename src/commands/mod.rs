//! Command implementations

pub mod export;
pub mod simple;
pub mod text;
pub mod word;

pub use export::{text_artifact, word_artifact, write_artifact};
pub use simple::run_simple;
pub use text::{TextResult, process_text, process_text_with_progress, replaceable_word_count};
pub use word::{WordResult, process_word, validate_word};
