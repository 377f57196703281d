//! Relevance ranking
//!
//! A document's relevance to a query is the number of *distinct* query terms
//! it contains. Both sides are reduced to term sets before they are
//! intersected ([`terms::TermSet`]), so repeated words never inflate a score.

pub mod ranker;
pub mod terms;

pub use ranker::{rank, RelevanceRanker};
pub use terms::TermSet;
