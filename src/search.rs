//! Search service
//!
//! Ties the pieces together: a keyword query is logged, translated, and
//! ranked against the corpus the provider hands out. Catalog-backed services
//! additionally answer genre/year lookups and list the newest films.

use crate::catalog::{Catalog, Film};
use crate::errors::Result;
use crate::nlp::stopwords::StopwordFilter;
use crate::provider::{CorpusProvider, QueryTranslator};
use crate::query_log::{QueryCount, QueryKind, QueryLog, QueryStatistics};
use crate::ranking::RelevanceRanker;
use crate::types::{RankConfig, ScoredDocument};
use serde::{Deserialize, Serialize};

/// A keyword hit hydrated with the film title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub film_id: u32,
    pub title: String,
    pub relevance: usize,
}

/// Keyword and catalog search with query logging
#[derive(Debug)]
pub struct SearchService<P, T> {
    provider: P,
    translator: T,
    ranker: RelevanceRanker,
    stopwords: StopwordFilter,
    log: QueryLog,
}

impl<P, T> SearchService<P, T>
where
    P: CorpusProvider,
    T: QueryTranslator,
{
    /// Create a service; fails if `config` does not validate
    pub fn new(provider: P, translator: T, config: RankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            provider,
            translator,
            ranker: RelevanceRanker::with_config(config),
            stopwords: StopwordFilter::empty(),
            log: QueryLog::new(),
        })
    }

    /// Builder method: stopwords removed from every keyword query
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &RankConfig {
        self.ranker.config()
    }

    /// Rank the corpus against a free-text query.
    ///
    /// The raw query is logged before anything else, so it is counted even
    /// when translation or corpus loading fails.
    pub fn search_keyword(&mut self, query: &str) -> Result<Vec<ScoredDocument<P::Id>>> {
        trace_stage!("keyword_search");
        let translated = self.record_and_translate(query)?;

        let corpus = self.provider.corpus()?;
        let results = self.ranker.rank(&corpus, &translated, &self.stopwords);

        if results.is_empty() {
            trace_event!(query, corpus = corpus.len(), "no films matched");
        }
        Ok(results)
    }

    fn record_and_translate(&mut self, query: &str) -> Result<String> {
        self.log.record(query, QueryKind::Keyword);

        let target = &self.ranker.config().target_language;
        let translated = self.translator.translate(query, target)?;
        trace_event!(query, translated = translated.as_str(), "translated query");
        Ok(translated)
    }

    /// The `limit` most frequent query texts (0 = all); listings usually
    /// pass [`DEFAULT_POPULAR_LIMIT`](crate::query_log::DEFAULT_POPULAR_LIMIT)
    pub fn popular_queries(&self, limit: usize) -> Vec<QueryCount> {
        self.log.popular(limit)
    }

    pub fn statistics(&self) -> QueryStatistics {
        self.log.statistics()
    }

    pub fn query_log(&self) -> &QueryLog {
        &self.log
    }
}

impl<T: QueryTranslator> SearchService<Catalog, T> {
    /// Films of `genre` released in `year`; logged as `"{genre}, {year}"`
    pub fn search_genre_and_year(&mut self, genre: &str, year: u16) -> Vec<&Film> {
        trace_stage!("genre_year_search");
        self.log
            .record(format!("{genre}, {year}"), QueryKind::GenreYear);
        self.provider.by_genre_and_year(genre, year)
    }

    /// Keyword search with each hit carrying its film title.
    ///
    /// Ranks by catalog position, so every hit names the film that actually
    /// matched even when several films share an id.
    pub fn keyword_hits(&mut self, query: &str) -> Result<Vec<SearchHit>> {
        trace_stage!("keyword_search");
        let translated = self.record_and_translate(query)?;

        let corpus = self.provider.indexed_documents();
        let films = self.provider.films();
        let hits: Vec<SearchHit> = self
            .ranker
            .rank(&corpus, &translated, &self.stopwords)
            .into_iter()
            .filter_map(|doc| {
                films.get(doc.id).map(|film| SearchHit {
                    film_id: film.film_id,
                    title: film.title.clone(),
                    relevance: doc.relevance,
                })
            })
            .collect();

        if hits.is_empty() {
            trace_event!(query, corpus = corpus.len(), "no films matched");
        }
        Ok(hits)
    }

    /// Newest films of the catalog; not logged
    pub fn newest(&self, limit: usize) -> Vec<&Film> {
        self.provider.newest(limit)
    }
}
