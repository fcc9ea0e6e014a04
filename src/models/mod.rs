use serde::{Deserialize, Serialize};

pub mod intent;
pub mod streaming_service;
pub mod title;
pub mod user_preferences;

pub use intent::{RatingRange, RatingTier, SearchIntent};
pub use streaming_service::{LinkKind, MediaLink, SoundtrackLinks, WatchOptions};
pub use title::{RankedResult, TitleType};
pub use user_preferences::{FavoriteMovie, RatingPreference, UserPreferences};

/// Sentinel the catalog uses for missing values
pub const NOT_AVAILABLE: &str = "N/A";

// ============================================================================
// OMDb API Types
// ============================================================================

/// A title as returned by the catalog's title search (`?s=`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogRecord {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    /// One of "movie", "series", "episode"
    #[serde(rename = "Type", default)]
    pub record_type: String,
    /// Poster URL or "N/A"
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

/// A title as returned by the catalog's by-ID lookup (`?i=`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogDetails {
    #[serde(flatten)]
    pub record: CatalogRecord,
    /// Parseable float or "N/A"
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    /// Comma-joined genre list
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    /// Comma-joined language list
    #[serde(rename = "Language", default)]
    pub language: Option<String>,
    /// Comma-joined country list
    #[serde(rename = "Country", default)]
    pub country: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Director", default)]
    pub director: Option<String>,
    #[serde(rename = "Actors", default)]
    pub actors: Option<String>,
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<String>,
}

impl CatalogDetails {
    /// Numeric rating, or `None` for "N/A" and other unparseable values
    pub fn rating(&self) -> Option<f64> {
        parse_rating(self.imdb_rating.as_deref())
    }
}

/// Envelope of a title search response
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<CatalogRecord>>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbSearchResponse {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }
}

/// Envelope of a by-ID lookup response; the title fields are only present on success
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbLookupResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

/// Parses a catalog rating string, treating "N/A" and garbage as missing
pub fn parse_rating(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty() && *value != NOT_AVAILABLE)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}
