#![allow(dead_code)]

use std::collections::HashSet;

use cinesearch::{
    error::{AppError, AppResult},
    models::{CatalogDetails, CatalogRecord},
    services::providers::CatalogProvider,
};

/// In-process catalog: title search matches on title or genre, lookups by ID
#[derive(Default)]
pub struct StubCatalog {
    titles: Vec<CatalogDetails>,
    failing_terms: HashSet<String>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(
        mut self,
        imdb_id: &str,
        title: &str,
        genre: &str,
        language: &str,
        country: &str,
        rating: &str,
    ) -> Self {
        self.titles.push(CatalogDetails {
            record: CatalogRecord {
                imdb_id: imdb_id.to_string(),
                title: title.to_string(),
                year: "2021".to_string(),
                record_type: "movie".to_string(),
                poster: "N/A".to_string(),
            },
            imdb_rating: Some(rating.to_string()),
            genre: Some(genre.to_string()),
            language: Some(language.to_string()),
            country: Some(country.to_string()),
            plot: Some("A plot.".to_string()),
            director: None,
            actors: None,
            runtime: Some("120 min".to_string()),
        });
        self
    }

    /// Searches for this term fail as if the network dropped
    pub fn failing_on(mut self, term: &str) -> Self {
        self.failing_terms.insert(term.to_string());
        self
    }
}

#[async_trait::async_trait]
impl CatalogProvider for StubCatalog {
    async fn search_titles(&self, term: &str) -> AppResult<Vec<CatalogRecord>> {
        let term = term.to_lowercase();
        if self.failing_terms.contains(&term) {
            return Err(AppError::ExternalApi(format!("connection reset searching {}", term)));
        }

        Ok(self
            .titles
            .iter()
            .filter(|t| {
                t.record.title.to_lowercase().contains(&term)
                    || t.genre.as_deref().unwrap_or_default().to_lowercase().contains(&term)
            })
            .map(|t| t.record.clone())
            .collect())
    }

    async fn lookup_by_id(&self, imdb_id: &str) -> AppResult<Option<CatalogDetails>> {
        Ok(self
            .titles
            .iter()
            .find(|t| t.record.imdb_id == imdb_id)
            .cloned())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// Five Tamil comedies rated 8.1 to 9.1 plus three in-range comedies from elsewhere
pub fn tamil_comedy_catalog() -> StubCatalog {
    StubCatalog::new()
        .with_title("tt01", "Kadhalikka Neramillai", "Comedy, Romance", "Tamil", "India", "8.1")
        .with_title("tt02", "Michael Madana Kama Rajan", "Comedy", "Tamil", "India", "8.5")
        .with_title("tt03", "Panchathanthiram", "Comedy", "Tamil", "India", "8.6")
        .with_title("tt04", "Thillu Mullu", "Comedy, Family", "Tamil", "India", "8.9")
        .with_title("tt05", "Soodhu Kavvum", "Comedy, Crime", "Tamil", "India", "9.1")
        .with_title("tt06", "The Grand Budapest Hotel", "Adventure, Comedy", "English", "USA", "8.6")
        .with_title("tt07", "Intouchables", "Biography, Comedy", "French", "France", "8.5")
        .with_title("tt08", "Amelie", "Comedy, Romance", "French", "France", "8.3")
}
