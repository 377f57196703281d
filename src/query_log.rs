//! Query log and popularity statistics
//!
//! Every search issued through [`crate::search::SearchService`] is recorded
//! here. The log lives in memory only; persisting it is up to the host.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Number of entries in the "top queries" part of [`QueryStatistics`]
pub const TOP_QUERIES: usize = 5;

/// Default length of a popular-queries listing
pub const DEFAULT_POPULAR_LIMIT: usize = 10;

/// Which kind of search produced a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Free-text keyword search
    Keyword,
    /// Structured genre + release year lookup
    GenreYear,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Keyword => "keyword",
            QueryKind::GenreYear => "genre_year",
        }
    }
}

/// A recorded query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRecord {
    /// 1-based position in the log
    pub id: u64,
    pub text: String,
    pub kind: QueryKind,
}

/// How often a query text was issued
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryCount {
    pub text: String,
    pub count: usize,
}

/// Summary of the log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryStatistics {
    /// Total number of recorded queries
    pub total: usize,
    /// Number of distinct query texts
    pub unique: usize,
    /// Most frequent query texts, at most [`TOP_QUERIES`]
    pub top: Vec<QueryCount>,
}

/// Append-only log of issued queries
#[derive(Debug, Clone, Default)]
pub struct QueryLog {
    entries: Vec<QueryRecord>,
}

impl QueryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a query and return its id
    pub fn record(&mut self, text: impl Into<String>, kind: QueryKind) -> u64 {
        let id = self.entries.len() as u64 + 1;
        self.entries.push(QueryRecord {
            id,
            text: text.into(),
            kind,
        });
        id
    }

    pub fn entries(&self) -> &[QueryRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Query texts grouped by exact text, most frequent first.
    ///
    /// Texts with the same count are ordered by their first appearance in
    /// the log. `limit` of 0 returns every distinct text.
    pub fn popular(&self, limit: usize) -> Vec<QueryCount> {
        // Slot index per text, in first-appearance order.
        let mut slots: FxHashMap<&str, usize> = FxHashMap::default();
        let mut counts: Vec<QueryCount> = Vec::new();

        for entry in &self.entries {
            match slots.get(entry.text.as_str()).copied() {
                Some(slot) => counts[slot].count += 1,
                None => {
                    slots.insert(entry.text.as_str(), counts.len());
                    counts.push(QueryCount {
                        text: entry.text.clone(),
                        count: 1,
                    });
                }
            }
        }

        counts.sort_by(|a, b| b.count.cmp(&a.count));
        if limit > 0 {
            counts.truncate(limit);
        }
        counts
    }

    /// Number of distinct query texts
    pub fn unique_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.text.as_str())
            .collect::<rustc_hash::FxHashSet<_>>()
            .len()
    }

    pub fn statistics(&self) -> QueryStatistics {
        QueryStatistics {
            total: self.len(),
            unique: self.unique_count(),
            top: self.popular(TOP_QUERIES),
        }
    }

    /// Number of recorded queries of the given kind
    pub fn count_kind(&self, kind: QueryKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}
