//! Distinct term sets
//!
//! Scoring is defined over sets, not multisets. Deduplication is its own step
//! here so that the intersection in [`TermSet::overlap`] can only ever count
//! each term once.

use rustc_hash::FxHashSet;

/// A set of distinct normalized terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: FxHashSet<String>,
}

impl TermSet {
    /// Collapse a token sequence into its distinct terms
    pub fn distinct<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            terms: tokens.into_iter().collect(),
        }
    }

    /// Add one term; a repeat is ignored without allocating
    pub fn insert(&mut self, term: &str) {
        if !self.terms.contains(term) {
            self.terms.insert(term.to_owned());
        }
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Cardinality of the intersection of two term sets.
    ///
    /// Probes the larger set with the members of the smaller one.
    pub fn overlap(&self, other: &TermSet) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.terms.iter().filter(|t| large.contains(t)).count()
    }
}

impl FromIterator<String> for TermSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::distinct(iter)
    }
}
