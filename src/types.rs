//! Core types for film_search
//!
//! This module defines the data structures shared by the ranker and the
//! surrounding search layer: documents, scored results, and configuration.

use crate::errors::{Result, SearchError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Document
// ============================================================================

/// A document handed to the ranker: an opaque identifier plus its text body.
///
/// The identifier is never inspected, only cloned into the results, so any
/// `Clone` type works (film ids, strings, JSON values).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document<Id> {
    /// Caller-owned identifier
    pub id: Id,
    /// Searchable text body
    pub text: String,
}

impl<Id> Document<Id> {
    /// Create a new document
    pub fn new(id: Id, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

impl<Id, S: Into<String>> From<(Id, S)> for Document<Id> {
    fn from((id, text): (Id, S)) -> Self {
        Self::new(id, text)
    }
}

// ============================================================================
// Scored Document
// ============================================================================

/// One entry of a ranked result: a document identifier and its relevance.
///
/// Relevance is the number of distinct query terms found in the document,
/// and is always at least 1 for anything the ranker returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredDocument<Id> {
    pub id: Id,
    pub relevance: usize,
}

impl<Id> ScoredDocument<Id> {
    pub fn new(id: Id, relevance: usize) -> Self {
        Self { id, relevance }
    }

    /// Convert into an `(id, relevance)` tuple
    pub fn into_pair(self) -> (Id, usize) {
        (self.id, self.relevance)
    }
}

// ============================================================================
// Match Mode
// ============================================================================

/// How documents are admitted into the ranked output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Any overlap counts; documents are ranked by how many distinct query
    /// terms they contain.
    #[default]
    Any,
    /// Only documents containing every distinct query term are returned.
    All,
}

impl MatchMode {
    /// Whether a document with `relevance` overlapping terms out of
    /// `query_terms` distinct query terms is admitted.
    pub fn admits(self, relevance: usize, query_terms: usize) -> bool {
        match self {
            MatchMode::Any => relevance > 0,
            MatchMode::All => relevance > 0 && relevance == query_terms,
        }
    }
}

impl std::str::FromStr for MatchMode {
    type Err = SearchError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "any" => Ok(MatchMode::Any),
            "all" => Ok(MatchMode::All),
            other => Err(SearchError::invalid_config(format!(
                "unknown match mode '{other}', expected 'any' or 'all'"
            ))),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Corpus size at which scoring moves onto the rayon thread pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

/// Configuration for relevance ranking and keyword search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Document admission rule
    #[serde(default)]
    pub match_mode: MatchMode,
    /// Number of top results to return (0 = all)
    #[serde(default)]
    pub top_n: usize,
    /// Additional stopwords merged into every ranking call
    #[serde(default)]
    pub stopwords: Vec<String>,
    /// Minimum corpus size for parallel scoring (`None` = always sequential)
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: Option<usize>,
    /// Language the query translator is asked to produce
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

fn default_parallel_threshold() -> Option<usize> {
    Some(DEFAULT_PARALLEL_THRESHOLD)
}

fn default_target_language() -> String {
    "en".to_string()
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Any,
            top_n: 0,
            stopwords: Vec::new(),
            parallel_threshold: default_parallel_threshold(),
            target_language: default_target_language(),
        }
    }
}

/// Reject stopwords that are empty or contain whitespace.
///
/// Tokens never contain whitespace, so such a stopword could never match.
pub fn validate_stopwords<S: AsRef<str>>(words: &[S]) -> Result<()> {
    if let Some(word) = words
        .iter()
        .map(AsRef::as_ref)
        .find(|w| w.is_empty() || w.chars().any(char::is_whitespace))
    {
        return Err(SearchError::invalid_config(format!(
            "stopword {word:?} must be a single non-empty word"
        )));
    }
    Ok(())
}

impl RankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == Some(0) {
            return Err(SearchError::invalid_config(
                "parallel_threshold must be > 0 when set",
            ));
        }

        if self.target_language.trim().is_empty() {
            return Err(SearchError::invalid_config(
                "target_language must not be empty",
            ));
        }

        validate_stopwords(&self.stopwords)
    }

    /// Whether a corpus of `corpus_len` documents should be scored in parallel
    pub fn use_parallel(&self, corpus_len: usize) -> bool {
        self.parallel_threshold
            .is_some_and(|threshold| corpus_len >= threshold)
    }

    /// Builder method: set match mode
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Builder method: set top N results to return
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: set additional stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = words.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: set the parallel scoring threshold
    pub fn with_parallel_threshold(mut self, threshold: Option<usize>) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Builder method: set the translation target language
    pub fn with_target_language(mut self, language: impl Into<String>) -> Self {
        self.target_language = language.into();
        self
    }
}
