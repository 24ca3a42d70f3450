//! Core domain types for synonym replacement
//!
//! Tokens, candidate lists and replacement decisions. Nothing here performs I/O.

mod resolution;
mod token;

pub use resolution::{
    Resolution, ResolutionRecord, ResolutionReport, SynonymCandidates, SynonymOrigin,
    dedup_preserving_order,
};
pub use token::{Token, TokenKind, tokenize};
