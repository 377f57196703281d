//! # film_search
//!
//! Keyword relevance ranking for a film catalog, with genre/year lookups and
//! query popularity statistics.
//!
//! The ranking core is small and pure: a query and every document are
//! lower-cased and split on whitespace, stopwords are removed from the query
//! only, and each document scores the number of *distinct* query terms it
//! contains. Documents are returned by descending score, ties in corpus
//! order.
//!
//! ```
//! use film_search::{rank, Document, StopwordFilter};
//!
//! let corpus = vec![
//!     Document::new(1, "the great escape"),
//!     Document::new(2, "great gatsby novel"),
//!     Document::new(3, "space odyssey"),
//! ];
//! let ranked = rank(&corpus, "great adventure", &StopwordFilter::empty());
//! let ids: Vec<_> = ranked.iter().map(|r| (r.id, r.relevance)).collect();
//! assert_eq!(ids, vec![(1, 1), (2, 1)]);
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): spans and debug events around each ranking stage

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a ranking stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("stage", stage = $name).entered();
    };
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

pub mod catalog;
pub mod errors;
pub mod json;
pub mod nlp;
pub mod provider;
pub mod query_log;
pub mod ranking;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SearchError};
pub use types::{Document, MatchMode, RankConfig, ScoredDocument};

// Re-export main functionality
pub use catalog::{Catalog, Film};
pub use nlp::{
    stopwords::{filter_stop_words, StopwordFilter},
    tokenizer::{tokenize, Tokenizer},
};
pub use provider::{CorpusProvider, IdentityTranslator, PhraseTableTranslator, QueryTranslator};
pub use query_log::{
    QueryCount, QueryKind, QueryLog, QueryStatistics, DEFAULT_POPULAR_LIMIT, TOP_QUERIES,
};
pub use ranking::{rank, RelevanceRanker, TermSet};
pub use search::{SearchHit, SearchService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
