//! In-memory film catalog
//!
//! Holds the film records a keyword search ranks over, and answers the two
//! structured lookups of the catalog: films of a genre released in a given
//! year, and the newest films.

use crate::errors::Result;
use crate::provider::CorpusProvider;
use crate::types::Document;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Maximum number of films returned by a genre/year lookup
pub const GENRE_YEAR_LIMIT: usize = 10;

/// Default length of the newest-films listing
pub const DEFAULT_NEWEST_LIMIT: usize = 10;

/// A single film record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    pub film_id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub release_year: u16,
    pub genre: String,
}

impl Film {
    pub fn new(
        film_id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        release_year: u16,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            film_id,
            title: title.into(),
            description: description.into(),
            release_year,
            genre: genre.into(),
        }
    }

    /// The text keyword queries are matched against: title, a space, then
    /// the description.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// An ordered collection of films
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    films: Vec<Film>,
}

impl Catalog {
    pub fn new(films: Vec<Film>) -> Self {
        Self { films }
    }

    /// Parse a catalog from a JSON array of films
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a catalog from a JSON array of films
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    /// First film with the given id
    pub fn get(&self, film_id: u32) -> Option<&Film> {
        self.films.iter().find(|f| f.film_id == film_id)
    }

    pub fn push(&mut self, film: Film) {
        self.films.push(film);
    }

    /// Films of `genre` released in `year`, in catalog order, at most
    /// [`GENRE_YEAR_LIMIT`] of them.
    ///
    /// Genre names compare case-insensitively.
    pub fn by_genre_and_year(&self, genre: &str, year: u16) -> Vec<&Film> {
        let genre = genre.trim().to_lowercase();
        self.films
            .iter()
            .filter(|f| f.release_year == year && f.genre.to_lowercase() == genre)
            .take(GENRE_YEAR_LIMIT)
            .collect()
    }

    /// Up to `limit` films, newest release year first; films from the same
    /// year stay in catalog order.
    pub fn newest(&self, limit: usize) -> Vec<&Film> {
        let mut films: Vec<&Film> = self.films.iter().collect();
        films.sort_by(|a, b| b.release_year.cmp(&a.release_year));
        films.truncate(limit);
        films
    }

    /// Documents for the ranker, one per film, in catalog order
    pub fn documents(&self) -> Vec<Document<u32>> {
        self.films
            .iter()
            .map(|f| Document::new(f.film_id, f.searchable_text()))
            .collect()
    }

    /// Documents keyed by catalog position instead of film id.
    ///
    /// Film ids need not be unique; a position always names exactly one film
    /// in [`Catalog::films`].
    pub fn indexed_documents(&self) -> Vec<Document<usize>> {
        self.films
            .iter()
            .enumerate()
            .map(|(idx, f)| Document::new(idx, f.searchable_text()))
            .collect()
    }
}

impl FromIterator<Film> for Catalog {
    fn from_iter<I: IntoIterator<Item = Film>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl CorpusProvider for Catalog {
    type Id = u32;

    fn corpus(&self) -> Result<Vec<Document<u32>>> {
        Ok(self.documents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            Film::new(1, "ACADEMY DINOSAUR", "An Epic Drama of a Feminist", 2006, "Documentary"),
            Film::new(2, "ACE GOLDFINGER", "A Astounding Epistle of a Database", 2004, "Horror"),
            Film::new(3, "ADAPTATION HOLES", "A Astounding Reflection", 2006, "Documentary"),
            Film::new(4, "AFFAIR PREJUDICE", "A Fanciful Documentary", 2010, "Horror"),
        ])
    }

    #[test]
    fn test_searchable_text() {
        let film = Film::new(9, "HEAT", "A heist drama", 1995, "Action");
        assert_eq!(film.searchable_text(), "HEAT A heist drama");
    }

    #[test]
    fn test_by_genre_and_year() {
        let catalog = sample();
        let ids: Vec<u32> = catalog
            .by_genre_and_year("documentary", 2006)
            .iter()
            .map(|f| f.film_id)
            .collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(catalog.by_genre_and_year("Horror", 2006).is_empty());
    }

    #[test]
    fn test_by_genre_and_year_limit() {
        let catalog: Catalog = (0..25)
            .map(|i| Film::new(i, format!("FILM {i}"), "", 2006, "Comedy"))
            .collect();
        let found = catalog.by_genre_and_year("Comedy", 2006);
        assert_eq!(found.len(), GENRE_YEAR_LIMIT);
        assert_eq!(found[0].film_id, 0);
    }

    #[test]
    fn test_newest_is_stable() {
        let catalog = sample();
        let ids: Vec<u32> = catalog.newest(3).iter().map(|f| f.film_id).collect();
        assert_eq!(ids, vec![4, 1, 3]);
        assert_eq!(catalog.newest(DEFAULT_NEWEST_LIMIT).len(), 4);
        assert!(catalog.newest(0).is_empty());
    }

    #[test]
    fn test_documents_follow_catalog_order() {
        let docs = sample().documents();
        assert_eq!(docs.len(), 4);
        assert_eq!(docs[0].id, 1);
        assert_eq!(docs[0].text, "ACADEMY DINOSAUR An Epic Drama of a Feminist");
    }

    #[test]
    fn test_indexed_documents_use_positions() {
        let catalog = Catalog::new(vec![
            Film::new(7, "HEAT", "x", 1995, "Action"),
            Film::new(7, "COLD", "y", 1996, "Drama"),
        ]);
        let docs = catalog.indexed_documents();
        let ids: Vec<usize> = docs.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(docs[1].text, "COLD y");
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"film_id": 7, "title": "HEAT", "description": "A heist", "release_year": 1995, "genre": "Action"},
            {"film_id": 8, "title": "UP", "release_year": 2009, "genre": "Animation"}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(8).unwrap().description, "");
        assert!(catalog.get(99).is_none());

        let catalog = Catalog::from_reader(json.as_bytes()).unwrap();
        assert_eq!(catalog.films()[0].title, "HEAT");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Catalog::from_json_str("{\"films\": 3}").is_err());
    }
}
