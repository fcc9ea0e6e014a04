use serde::{Deserialize, Serialize};

use super::{parse_rating, CatalogDetails, CatalogRecord, NOT_AVAILABLE};

/// Content type a query can ask for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TitleType {
    Movie,
    Series,
}

impl TitleType {
    /// The catalog's spelling of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            TitleType::Movie => "movie",
            TitleType::Series => "series",
        }
    }

    /// Exact (case-insensitive) match against a catalog `Type` field
    pub fn matches(&self, record_type: &str) -> bool {
        record_type.trim().eq_ignore_ascii_case(self.as_str())
    }
}

/// A catalog title projected for ranking and returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedResult {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub title_type: String,
    pub poster: Option<String>,
    /// Only known after enrichment
    pub imdb_rating: Option<f64>,
    pub genre: String,
    pub language: String,
    pub country: String,
    /// Recomputed per search, never persisted
    pub relevance_score: u32,
}

impl RankedResult {
    /// Rating used for sorting; unknown ratings sort as 0.0
    pub fn rating_or_zero(&self) -> f64 {
        self.imdb_rating.unwrap_or(0.0)
    }

    /// Replaces coarse search-result fields with the authoritative detail values
    pub fn enrich(&mut self, details: CatalogDetails) {
        self.imdb_rating = parse_rating(details.imdb_rating.as_deref());
        self.genre = details.genre.unwrap_or_default();
        self.language = details.language.unwrap_or_default();
        self.country = details.country.unwrap_or_default();
        if !details.record.year.is_empty() {
            self.year = details.record.year;
        }
        if self.poster.is_none() {
            self.poster = poster_url(&details.record.poster);
        }
    }
}

impl From<CatalogRecord> for RankedResult {
    fn from(record: CatalogRecord) -> Self {
        RankedResult {
            poster: poster_url(&record.poster),
            imdb_id: record.imdb_id,
            title: record.title,
            year: record.year,
            title_type: record.record_type.to_lowercase(),
            imdb_rating: None,
            genre: String::new(),
            language: String::new(),
            country: String::new(),
            relevance_score: 0,
        }
    }
}

fn poster_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw == NOT_AVAILABLE {
        None
    } else {
        Some(raw.to_string())
    }
}
