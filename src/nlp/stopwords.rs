//! Stopword filtering
//!
//! Stopwords are supplied by the caller; there is no built-in list. Words are
//! normalized the same way the tokenizer normalizes text (lower-cased) so a
//! filter built from `["The"]` removes the token `"the"`.

use rustc_hash::FxHashSet;

/// A set of stopwords removed from queries before matching
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let stopwords = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if a normalized token is a stopword
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Iterate over the stopwords (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.stopwords.iter().map(String::as_str)
    }

    /// Drop every stopword from `tokens`, keeping the survivors in order
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        filter_stop_words(tokens, self)
    }
}

/// Remove every token present in `stop_words`, preserving the relative order
/// of the remaining tokens. An empty filter returns the input unchanged.
pub fn filter_stop_words(tokens: Vec<String>, stop_words: &StopwordFilter) -> Vec<String> {
    if stop_words.is_empty() {
        return tokens;
    }
    tokens
        .into_iter()
        .filter(|token| !stop_words.is_stopword(token))
        .collect()
}

impl<S: AsRef<str>> FromIterator<S> for StopwordFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let stopwords = iter
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { stopwords }
    }
}
