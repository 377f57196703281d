//! Overlap-based relevance ranker
//!
//! Ranking runs in three stages:
//!
//! 1. **Query terms**: tokenize the query, drop stopwords, collapse to a
//!    [`TermSet`].
//! 2. **Scoring**: for every document, tokenize its text (stopwords are *not*
//!    removed from documents), collapse to a [`TermSet`] and count the overlap.
//!    Documents that the [`MatchMode`] does not admit are dropped.
//! 3. **Ordering**: a stable sort by descending relevance, so documents with
//!    equal scores stay in corpus order.
//!
//! Large corpora are scored on the rayon pool. The parallel collect keeps
//! corpus order, and the sort that follows is the same, so both paths produce
//! identical output.

use crate::nlp::stopwords::{filter_stop_words, StopwordFilter};
use crate::nlp::tokenizer::Tokenizer;
use crate::ranking::terms::TermSet;
use crate::types::{Document, MatchMode, RankConfig, ScoredDocument};
use rayon::prelude::*;

/// Relevance ranker
#[derive(Debug, Clone, Default)]
pub struct RelevanceRanker {
    tokenizer: Tokenizer,
    /// Stopwords from the config, applied on top of each call's stopwords
    stopwords: StopwordFilter,
    config: RankConfig,
}

impl RelevanceRanker {
    /// Create a ranker with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: RankConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            stopwords: StopwordFilter::from_list(&config.stopwords),
            config,
        }
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Distinct, stopword-free terms of a query
    pub fn query_terms(&self, query: &str, stop_words: &StopwordFilter) -> TermSet {
        let tokens = self.tokenizer.tokenize(query);
        let tokens = filter_stop_words(tokens, stop_words);
        let tokens = filter_stop_words(tokens, &self.stopwords);
        TermSet::distinct(tokens)
    }

    /// Number of distinct `query_terms` occurring in `text`
    pub fn score(&self, text: &str, query_terms: &TermSet) -> usize {
        if query_terms.is_empty() {
            return 0;
        }
        let mut document_terms = TermSet::default();
        self.tokenizer
            .for_each_token(text, |token| document_terms.insert(token));
        document_terms.overlap(query_terms)
    }

    /// Rank `corpus` against `query`.
    ///
    /// Returns `(id, relevance)` pairs by descending relevance, ties in corpus
    /// order. Documents without any query term never appear. An empty query,
    /// a query made only of stopwords, or an empty corpus yields an empty
    /// result.
    pub fn rank<Id>(
        &self,
        corpus: &[Document<Id>],
        query: &str,
        stop_words: &StopwordFilter,
    ) -> Vec<ScoredDocument<Id>>
    where
        Id: Clone + Send + Sync,
    {
        let query_terms = {
            trace_stage!("query_terms");
            self.query_terms(query, stop_words)
        };

        if query_terms.is_empty() || corpus.is_empty() {
            trace_event!(
                corpus = corpus.len(),
                query_terms = query_terms.len(),
                "nothing to rank"
            );
            return Vec::new();
        }

        let mut results = {
            trace_stage!("score");
            self.score_corpus(corpus, &query_terms)
        };

        {
            trace_stage!("sort");
            // `sort_by` is stable: equal relevance keeps corpus order.
            results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        }

        if self.config.top_n > 0 {
            results.truncate(self.config.top_n);
        }

        trace_event!(
            corpus = corpus.len(),
            query_terms = query_terms.len(),
            hits = results.len(),
            "ranked corpus"
        );
        results
    }

    /// Score every document and keep the admitted ones, in corpus order
    fn score_corpus<Id>(
        &self,
        corpus: &[Document<Id>],
        query_terms: &TermSet,
    ) -> Vec<ScoredDocument<Id>>
    where
        Id: Clone + Send + Sync,
    {
        let mode: MatchMode = self.config.match_mode;
        let required = query_terms.len();
        let admit = |doc: &Document<Id>| {
            let relevance = self.score(&doc.text, query_terms);
            mode.admits(relevance, required)
                .then(|| ScoredDocument::new(doc.id.clone(), relevance))
        };

        if self.config.use_parallel(corpus.len()) {
            corpus.par_iter().filter_map(admit).collect()
        } else {
            corpus.iter().filter_map(admit).collect()
        }
    }
}

/// Rank `corpus` against `query` with the default configuration.
///
/// Shorthand for `RelevanceRanker::new().rank(corpus, query, stop_words)`.
pub fn rank<Id>(
    corpus: &[Document<Id>],
    query: &str,
    stop_words: &StopwordFilter,
) -> Vec<ScoredDocument<Id>>
where
    Id: Clone + Send + Sync,
{
    RelevanceRanker::new().rank(corpus, query, stop_words)
}
