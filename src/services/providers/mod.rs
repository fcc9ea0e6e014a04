//! Catalog data provider abstraction
//!
//! The search engine's only data source is an external title catalog reachable
//! by title search and by-ID lookup. Providers hide the wire format and report
//! "nothing found" as an empty `Ok`, keeping `Err` for failures the caller may
//! want to count (transport errors, rejected keys, exhausted quotas).

use crate::{
    error::AppResult,
    models::{CatalogDetails, CatalogRecord},
};

pub mod omdb;

pub use omdb::OmdbProvider;

/// Trait for title catalog providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Search for titles by (partial) name
    ///
    /// Returns an empty list when the catalog has no match for the term.
    async fn search_titles(&self, term: &str) -> AppResult<Vec<CatalogRecord>>;

    /// Fetch the detailed record for one title
    ///
    /// Returns `None` when the catalog does not know the ID.
    async fn lookup_by_id(&self, imdb_id: &str) -> AppResult<Option<CatalogDetails>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
