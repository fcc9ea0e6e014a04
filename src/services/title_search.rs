use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{RankedResult, SearchIntent},
    services::{classifier, providers::CatalogProvider, search::SearchOrchestrator},
};

/// How a free-text query should be answered
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Pick `Smart` or `Direct` from the query's shape
    #[default]
    Auto,
    /// Classify, then run the multi-seed orchestrator
    Smart,
    /// One catalog title search, no classification
    Direct,
}

fn descriptive_trigger() -> &'static Regex {
    static TRIGGER: OnceLock<Regex> = OnceLock::new();
    TRIGGER.get_or_init(|| {
        Regex::new(
            r"(?i)\b(netflix|prime|disney|hbo|hulu|best|top|rated|rating|series|show|movies|films|korean|japanese|hindi|tamil|telugu|malayalam|kannada|bollywood|tollywood|like|similar|with|without)\b|\d",
        )
        .expect("descriptive trigger regex must compile")
    })
}

impl SearchMode {
    /// Resolves `Auto` for a concrete query; forced modes pass through.
    ///
    /// More than two words or any descriptive trigger means `Smart`.
    pub fn resolve(self, query: &str) -> SearchMode {
        match self {
            SearchMode::Auto => {
                let words = query.split_whitespace().count();
                if words > 2 || descriptive_trigger().is_match(query) {
                    SearchMode::Smart
                } else {
                    SearchMode::Direct
                }
            }
            forced => forced,
        }
    }
}

/// Outcome of a routed search
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub mode: SearchMode,
    /// Only present for smart searches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<SearchIntent>,
    pub results: Vec<RankedResult>,
}

/// Single catalog title search, results in catalog order
pub async fn search_titles(
    provider: Arc<dyn CatalogProvider>,
    query: &str,
) -> AppResult<Vec<RankedResult>> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::InvalidInput("Search query cannot be empty".to_string()));
    }

    let records = provider.search_titles(query).await?;
    tracing::info!(query = %query, results = records.len(), "Direct search completed");

    if records.is_empty() {
        return Err(AppError::no_matches());
    }

    Ok(records.into_iter().map(RankedResult::from).collect())
}

/// Routes a query to direct or smart search.
///
/// `adjust` lets the caller fold stored preferences into the intent before
/// the orchestrator sees it.
pub async fn routed_search(
    orchestrator: &SearchOrchestrator,
    provider: Arc<dyn CatalogProvider>,
    query: &str,
    mode: SearchMode,
    adjust: impl FnOnce(SearchIntent) -> SearchIntent,
) -> AppResult<SearchOutcome> {
    if query.trim().is_empty() {
        return Err(AppError::InvalidInput("Search query cannot be empty".to_string()));
    }

    match mode.resolve(query) {
        SearchMode::Direct => {
            let results = search_titles(provider, query).await?;
            Ok(SearchOutcome {
                mode: SearchMode::Direct,
                intent: None,
                results,
            })
        }
        _ => {
            let intent = adjust(classifier::classify(query));
            let results = orchestrator.search(&intent).await?;
            Ok(SearchOutcome {
                mode: SearchMode::Smart,
                intent: Some(intent),
                results,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchSettings;
    use crate::models::CatalogRecord;
    use crate::services::providers::MockCatalogProvider;

    fn record(id: &str, title: &str) -> CatalogRecord {
        CatalogRecord {
            imdb_id: id.to_string(),
            title: title.to_string(),
            year: "2014".to_string(),
            record_type: "movie".to_string(),
            poster: "https://img/poster.jpg".to_string(),
        }
    }

    #[test]
    fn test_auto_mode_routing() {
        assert_eq!(SearchMode::Auto.resolve("Interstellar"), SearchMode::Direct);
        assert_eq!(SearchMode::Auto.resolve("the matrix"), SearchMode::Direct);
        assert_eq!(
            SearchMode::Auto.resolve("dark sci-fi space movie"),
            SearchMode::Smart
        );
        assert_eq!(SearchMode::Auto.resolve("korean thriller"), SearchMode::Smart);
        assert_eq!(SearchMode::Auto.resolve("rating 8"), SearchMode::Smart);
        assert_eq!(SearchMode::Auto.resolve("netflix"), SearchMode::Smart);
    }

    #[test]
    fn test_forced_modes_pass_through() {
        assert_eq!(
            SearchMode::Direct.resolve("dark sci-fi space movie"),
            SearchMode::Direct
        );
        assert_eq!(SearchMode::Smart.resolve("Dune"), SearchMode::Smart);
    }

    #[test]
    fn test_mode_deserializes_lowercase() {
        let mode: SearchMode = serde_json::from_str("\"direct\"").unwrap();
        assert_eq!(mode, SearchMode::Direct);
    }

    #[tokio::test]
    async fn test_direct_search_keeps_catalog_order() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_search_titles()
            .withf(|term: &str| term == "Interstellar")
            .times(1)
            .returning(|_: &str| Ok(vec![record("tt0816692", "Interstellar"), record("tt1", "Interstellar 2")]));

        let results = search_titles(Arc::new(provider), "  Interstellar ").await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].imdb_id, "tt0816692");
        assert_eq!(results[0].poster.as_deref(), Some("https://img/poster.jpg"));
    }

    #[tokio::test]
    async fn test_direct_search_rejects_blank_query() {
        let provider = MockCatalogProvider::new();
        let result = search_titles(Arc::new(provider), "   ").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_direct_search_empty_is_no_matches() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_search_titles()
            .returning(|_: &str| Ok(Vec::new()));

        let result = search_titles(Arc::new(provider), "zzzz").await;
        assert!(matches!(result, Err(AppError::NoMatches(_))));
    }

    #[tokio::test]
    async fn test_routed_smart_search_applies_adjustment() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_search_titles()
            .returning(|_: &str| Ok(vec![record("tt2", "Space Odyssey")]));
        let provider: Arc<dyn CatalogProvider> = Arc::new(provider);
        let orchestrator = SearchOrchestrator::new(Arc::clone(&provider), SearchSettings::default());

        let outcome = routed_search(
            &orchestrator,
            provider,
            "space adventure odyssey",
            SearchMode::Auto,
            |mut intent| {
                intent.exclude_keywords.push("remake".to_string());
                intent
            },
        )
        .await
        .unwrap();

        assert_eq!(outcome.mode, SearchMode::Smart);
        let intent = outcome.intent.unwrap();
        assert_eq!(intent.exclude_keywords, vec!["remake".to_string()]);
        assert_eq!(outcome.results[0].imdb_id, "tt2");
    }
}
