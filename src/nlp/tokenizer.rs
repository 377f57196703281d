//! Whitespace tokenization
//!
//! Text is case-folded and split on runs of Unicode whitespace. There is no
//! stemming and no punctuation stripping: `"escape,"` and `"escape"` are
//! different tokens.

/// Lower-case `text` and split it on whitespace.
///
/// Tokens keep their left-to-right order and duplicates are preserved.
/// Leading, trailing and repeated whitespace never produce empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// A whitespace tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text into normalized word tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize(text)
    }

    /// Tokenize text without allocating a token vector.
    ///
    /// The lower-cased copy of `text` is still allocated once; each token
    /// borrows from it through the callback.
    pub fn for_each_token<F>(&self, text: &str, mut f: F)
    where
        F: FnMut(&str),
    {
        let lowered = text.to_lowercase();
        for token in lowered.split_whitespace() {
            f(token);
        }
    }
}
