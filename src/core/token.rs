//! Text tokenization
//!
//! Splits free text into alternating word and separator segments without losing
//! a single character, so the text can be reassembled after substitution.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Coarse split: runs of letters, digits and underscores, or runs of anything else
///
/// Combining marks fall on the separator side.
static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<word>[\p{L}\p{N}_]+)|[^\p{L}\p{N}_]+").expect("segment pattern is valid")
});

static LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+$").expect("letters pattern is valid"));

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Maximal run of letters, digits or underscores
    Word,
    /// Maximal run of whitespace, punctuation and everything else
    Separator,
}

/// A slice of the input text with its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this token may be replaced with a synonym
    ///
    /// Only word tokens made entirely of letters qualify, so `abc123`, `x²`
    /// and `snake_case` pass through untouched.
    #[must_use]
    pub fn is_replaceable(&self) -> bool {
        self.kind == TokenKind::Word && LETTERS.is_match(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Split text into word and separator tokens
///
/// Concatenating the `text` of every returned token reproduces `input` exactly.
/// Empty input yields no tokens.
///
/// # Examples
/// ```
/// use synonym_replacer::core::{tokenize, TokenKind};
///
/// let tokens = tokenize("The quick fox.");
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(tokens[0].text(), "The");
/// assert_eq!(tokens[5].kind(), TokenKind::Separator);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    SEGMENT
        .captures_iter(input)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let kind = if caps.name("word").is_some() {
                TokenKind::Word
            } else {
                TokenKind::Separator
            };
            Some(Token::new(kind, whole.as_str()))
        })
        .collect()
}
