//! Seams to the collaborators outside this crate.
//!
//! Where the documents come from and how a query gets translated are owned
//! by the host application (a database layer, a localization service). The
//! search layer only sees these two traits.

use crate::errors::{Result, SearchError};
use crate::types::Document;

// ============================================================================
// CorpusProvider
// ============================================================================

/// Supplies the ordered corpus that keyword queries are ranked against.
///
/// # Contract
///
/// - Each document's text is the complete searchable string (for films,
///   title and description joined by a single space).
/// - Order is significant: it is the tie-break order of the ranked output.
/// - Failing to produce the corpus is reported as [`SearchError::Corpus`].
pub trait CorpusProvider {
    /// Identifier carried through to the ranked results
    type Id: Clone + Send + Sync;

    /// Produce the corpus in its canonical order
    fn corpus(&self) -> Result<Vec<Document<Self::Id>>>;
}

impl<Id: Clone + Send + Sync> CorpusProvider for Vec<Document<Id>> {
    type Id = Id;

    fn corpus(&self) -> Result<Vec<Document<Id>>> {
        Ok(self.clone())
    }
}

impl<P: CorpusProvider + ?Sized> CorpusProvider for &P {
    type Id = P::Id;

    fn corpus(&self) -> Result<Vec<Document<Self::Id>>> {
        (**self).corpus()
    }
}

// ============================================================================
// QueryTranslator
// ============================================================================

/// Rewrites a raw user query into the language the corpus is written in.
///
/// The ranker applies no language-specific logic; whatever text the
/// translator returns is what gets tokenized.
pub trait QueryTranslator {
    fn translate(&self, query: &str, target_language: &str) -> Result<String>;
}

/// Passes queries through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl QueryTranslator for IdentityTranslator {
    #[inline]
    fn translate(&self, query: &str, _target_language: &str) -> Result<String> {
        Ok(query.to_string())
    }
}

/// Any `Fn(&str, &str) -> Result<String>` closure is a translator.
impl<F> QueryTranslator for F
where
    F: Fn(&str, &str) -> Result<String>,
{
    fn translate(&self, query: &str, target_language: &str) -> Result<String> {
        self(query, target_language)
    }
}

/// Looks queries up in a fixed phrase table; unknown queries fail.
///
/// Useful for tests and for hosts that pre-translate a closed vocabulary.
#[derive(Debug, Clone, Default)]
pub struct PhraseTableTranslator {
    entries: rustc_hash::FxHashMap<(String, String), String>,
}

impl PhraseTableTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the translation of `query` into `target_language`
    pub fn insert(
        &mut self,
        query: impl Into<String>,
        target_language: impl Into<String>,
        translation: impl Into<String>,
    ) {
        self.entries.insert(
            (query.into(), target_language.into()),
            translation.into(),
        );
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_entry(
        mut self,
        query: impl Into<String>,
        target_language: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.insert(query, target_language, translation);
        self
    }
}

impl QueryTranslator for PhraseTableTranslator {
    fn translate(&self, query: &str, target_language: &str) -> Result<String> {
        self.entries
            .get(&(query.to_string(), target_language.to_string()))
            .cloned()
            .ok_or_else(|| {
                SearchError::translation(format!(
                    "no '{target_language}' translation for {query:?}"
                ))
            })
    }
}
