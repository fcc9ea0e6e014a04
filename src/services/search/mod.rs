//! Multi-seed search orchestration.
//!
//! Turns a [`SearchIntent`] into a ranked list of titles using the catalog's
//! title search as the only data source:
//!
//! 1. Pick seed terms from the intent
//! 2. Search every term in parallel; a failed term contributes nothing
//! 3. Merge by IMDB ID (first occurrence wins) and score relevance
//! 4. Fetch details for the first N candidates when rating, language or
//!    genre-exclusion constraints need them; a failed lookup drops the candidate
//! 5. Filter
//! 6. Rank
//!
//! Every call owns its working set; nothing is shared between searches.

pub mod filters;
pub mod ranking;
pub mod scoring;
pub mod seeds;

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::{
    config::SearchSettings,
    error::{AppError, AppResult},
    models::{CatalogRecord, RankedResult, SearchIntent},
    services::providers::CatalogProvider,
};
use filters::{CandidateFilter, ExcludeKeywordFilter, FilterPipeline};

pub struct SearchOrchestrator {
    provider: Arc<dyn CatalogProvider>,
    settings: SearchSettings,
}

impl SearchOrchestrator {
    pub fn new(provider: Arc<dyn CatalogProvider>, settings: SearchSettings) -> Self {
        Self { provider, settings }
    }

    /// Runs the full pipeline for one intent.
    ///
    /// Returns `AppError::NoMatches` when nothing survives, and
    /// `AppError::ExternalApi` only when every seed search failed.
    pub async fn search(&self, intent: &SearchIntent) -> AppResult<Vec<RankedResult>> {
        let start = Instant::now();
        let terms = seeds::seed_terms(intent, self.settings.max_keyword_seeds);

        tracing::info!(
            terms = ?terms,
            provider = self.provider.name(),
            "Starting smart search"
        );

        let batches = self.search_terms(&terms).await?;
        let mut candidates = merge(batches, intent);

        tracing::info!(candidates = candidates.len(), "Seed results merged");

        if !intent.exclude_keywords.is_empty() {
            candidates = ExcludeKeywordFilter::new(intent.exclude_keywords.clone()).apply(candidates);
        }

        if intent.needs_enrichment() && !candidates.is_empty() {
            candidates = self.enrich(candidates).await;
            scoring::apply_rating_boost(&mut candidates, intent);
        }

        let mut results = FilterPipeline::for_intent(intent).apply(candidates);
        ranking::rank(&mut results, intent.has_rating_constraint());

        tracing::info!(
            results = results.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Smart search completed"
        );

        if results.is_empty() {
            return Err(AppError::no_matches());
        }

        Ok(results)
    }

    /// Stage 2: one title search per term, all in parallel.
    ///
    /// Batches come back in term order so the merge stays deterministic.
    async fn search_terms(&self, terms: &[String]) -> AppResult<Vec<Vec<CatalogRecord>>> {
        let mut tasks = Vec::with_capacity(terms.len());

        for term in terms {
            let provider = Arc::clone(&self.provider);
            let term = term.clone();
            let timeout = self.settings.request_timeout;
            let task = tokio::spawn(async move {
                let label = format!("Title search for '{}'", term);
                bounded(timeout, label, provider.search_titles(&term)).await
            });
            tasks.push(task);
        }

        let mut batches = Vec::new();
        let mut errors = Vec::new();

        for (term, task) in terms.iter().zip(tasks) {
            match task.await {
                Ok(Ok(records)) => batches.push(records),
                Ok(Err(e)) => {
                    tracing::warn!(term = %term, error = %e, "Seed search failed");
                    errors.push(e);
                }
                Err(e) => {
                    tracing::error!(term = %term, error = %e, "Task join error");
                    errors.push(AppError::Internal(e.to_string()));
                }
            }
        }

        if !errors.is_empty() {
            tracing::warn!(
                success_count = batches.len(),
                error_count = errors.len(),
                "Partial seed search failure"
            );
        }

        if batches.is_empty() && !errors.is_empty() {
            return Err(AppError::ExternalApi(
                "Failed to reach the catalog for any search term".to_string(),
            ));
        }

        Ok(batches)
    }

    /// Stage 4: replace coarse fields with detail data for the first candidates.
    ///
    /// The cap applies in merge order, before ranking. Candidates past the cap
    /// and candidates whose lookup fails are dropped.
    async fn enrich(&self, candidates: Vec<RankedResult>) -> Vec<RankedResult> {
        let total = candidates.len();
        let limit = self.settings.enrichment_limit;
        let mut tasks = Vec::with_capacity(total.min(limit));

        for candidate in candidates.into_iter().take(limit) {
            let provider = Arc::clone(&self.provider);
            let timeout = self.settings.request_timeout;
            let task = tokio::spawn(async move {
                let label = format!("Detail lookup for {}", candidate.imdb_id);
                let lookup = bounded(timeout, label, provider.lookup_by_id(&candidate.imdb_id)).await;
                (candidate, lookup)
            });
            tasks.push(task);
        }

        let requested = tasks.len();
        let mut enriched = Vec::with_capacity(requested);

        for task in tasks {
            match task.await {
                Ok((mut candidate, Ok(Some(details)))) => {
                    candidate.enrich(details);
                    enriched.push(candidate);
                }
                Ok((candidate, Ok(None))) => {
                    tracing::debug!(imdb_id = %candidate.imdb_id, "Catalog has no details, dropping");
                }
                Ok((candidate, Err(e))) => {
                    tracing::warn!(imdb_id = %candidate.imdb_id, error = %e, "Detail lookup failed, dropping");
                }
                Err(e) => {
                    tracing::error!(error = %e, "Task join error");
                }
            }
        }

        tracing::info!(
            candidates = total,
            requested,
            enriched = enriched.len(),
            "Enrichment completed"
        );

        enriched
    }
}

/// Stage 3: union by IMDB ID in batch order, scoring each record once
fn merge(batches: Vec<Vec<CatalogRecord>>, intent: &SearchIntent) -> Vec<RankedResult> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::new();

    for record in batches.into_iter().flatten() {
        if !seen.insert(record.imdb_id.clone()) {
            continue;
        }
        let mut result = RankedResult::from(record);
        result.relevance_score = scoring::relevance_score(&result, intent);
        merged.push(result);
    }

    merged
}

/// Bounds a catalog call so one hung request cannot stall a barrier
async fn bounded<T>(
    timeout: Duration,
    label: String,
    call: impl Future<Output = AppResult<T>>,
) -> AppResult<T> {
    tokio::time::timeout(timeout, call)
        .await
        .unwrap_or_else(|_| {
            Err(AppError::ExternalApi(format!(
                "{} timed out after {:?}",
                label, timeout
            )))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogDetails, RatingRange};
    use crate::services::providers::MockCatalogProvider;

    fn record(id: &str, title: &str) -> CatalogRecord {
        CatalogRecord {
            imdb_id: id.to_string(),
            title: title.to_string(),
            year: "2022".to_string(),
            record_type: "movie".to_string(),
            poster: "N/A".to_string(),
        }
    }

    fn details(id: &str, rating: &str, language: &str) -> CatalogDetails {
        CatalogDetails {
            record: record(id, id),
            imdb_rating: Some(rating.to_string()),
            genre: Some("Comedy".to_string()),
            language: Some(language.to_string()),
            country: Some("India".to_string()),
            plot: None,
            director: None,
            actors: None,
            runtime: None,
        }
    }

    fn mock_provider() -> MockCatalogProvider {
        let mut provider = MockCatalogProvider::new();
        provider.expect_name().return_const("mock");
        provider
    }

    fn orchestrator(provider: MockCatalogProvider) -> SearchOrchestrator {
        SearchOrchestrator::new(Arc::new(provider), SearchSettings::default())
    }

    fn intent_with_keywords(keywords: &[&str]) -> SearchIntent {
        SearchIntent {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            ..SearchIntent::from_query(keywords.join(" "))
        }
    }

    #[tokio::test]
    async fn test_partial_failure_is_absorbed() {
        let mut provider = mock_provider();
        provider
            .expect_search_titles()
            .times(3)
            .returning(|term: &str| match term {
                "gamma" => Ok(vec![record("tt3", "Gamma Rays")]),
                _ => Err(AppError::ExternalApi("connection reset".to_string())),
            });

        let results = orchestrator(provider)
            .search(&intent_with_keywords(&["alpha", "beta", "gamma"]))
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].imdb_id, "tt3");
    }

    #[tokio::test]
    async fn test_total_failure_is_distinct_from_no_matches() {
        let mut provider = mock_provider();
        provider
            .expect_search_titles()
            .returning(|_: &str| Err(AppError::ExternalApi("offline".to_string())));

        let result = orchestrator(provider)
            .search(&intent_with_keywords(&["alpha"]))
            .await;

        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }

    #[tokio::test]
    async fn test_empty_catalog_is_no_matches() {
        let mut provider = mock_provider();
        provider
            .expect_search_titles()
            .returning(|_: &str| Ok(Vec::new()));

        let result = orchestrator(provider)
            .search(&intent_with_keywords(&["alpha"]))
            .await;

        assert!(matches!(result, Err(AppError::NoMatches(_))));
    }

    #[tokio::test]
    async fn test_duplicates_are_merged_once() {
        let mut provider = mock_provider();
        provider
            .expect_search_titles()
            .returning(|term: &str| match term {
                "nights" => Ok(vec![record("tt1", "Comedy Nights")]),
                _ => Ok(vec![record("tt1", "Comedy Nights (Re-release)"), record("tt2", "Other")]),
            });

        let intent = SearchIntent {
            detected_genres: vec!["comedy".to_string()],
            keywords: vec!["nights".to_string()],
            ..SearchIntent::from_query("comedy nights")
        };

        let results = orchestrator(provider).search(&intent).await.unwrap();

        let first: Vec<&RankedResult> = results.iter().filter(|r| r.imdb_id == "tt1").collect();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].title, "Comedy Nights");
        assert_eq!(
            first[0].relevance_score,
            scoring::GENRE_WEIGHT + scoring::KEYWORD_WEIGHT
        );
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_enrichment_is_capped_and_failures_dropped() {
        let mut provider = mock_provider();
        provider.expect_search_titles().returning(|_: &str| {
            Ok(vec![
                record("tt1", "One"),
                record("tt2", "Two"),
                record("tt3", "Three"),
                record("tt4", "Four"),
            ])
        });
        provider
            .expect_lookup_by_id()
            .times(3)
            .returning(|id: &str| match id {
                "tt2" => Err(AppError::ExternalApi("boom".to_string())),
                "tt3" => Ok(None),
                other => Ok(Some(details(other, "8.0", "Tamil"))),
            });

        let settings = SearchSettings {
            enrichment_limit: 3,
            ..SearchSettings::default()
        };
        let orchestrator = SearchOrchestrator::new(Arc::new(provider), settings);

        let intent = SearchIntent {
            keywords: vec!["tamil".to_string()],
            detected_languages: vec!["tamil".to_string()],
            ..SearchIntent::from_query("tamil")
        };

        let results = orchestrator.search(&intent).await.unwrap();
        let ids: Vec<&str> = results.iter().map(|r| r.imdb_id.as_str()).collect();
        assert_eq!(ids, vec!["tt1"]);
        assert_eq!(results[0].imdb_rating, Some(8.0));
    }

    #[tokio::test]
    async fn test_rating_constraint_orders_by_rating() {
        let mut provider = mock_provider();
        provider.expect_search_titles().returning(|_: &str| {
            Ok(vec![record("tt1", "Low"), record("tt2", "High"), record("tt3", "Mid")])
        });
        provider.expect_lookup_by_id().returning(|id: &str| {
            let rating = match id {
                "tt1" => "6.0",
                "tt2" => "9.1",
                _ => "7.4",
            };
            Ok(Some(details(id, rating, "English")))
        });

        let intent = SearchIntent {
            rating_range: Some(RatingRange::at_least(7.0)),
            ..intent_with_keywords(&["anything"])
        };

        let results = orchestrator(provider).search(&intent).await.unwrap();
        let ids: Vec<&str> = results.iter().map(|r| r.imdb_id.as_str()).collect();
        assert_eq!(ids, vec!["tt2", "tt3"]);
    }

    #[tokio::test]
    async fn test_no_enrichment_without_constraints() {
        let mut provider = mock_provider();
        provider
            .expect_search_titles()
            .returning(|_: &str| Ok(vec![record("tt1", "Arrival")]));
        provider.expect_lookup_by_id().never();

        let results = orchestrator(provider)
            .search(&intent_with_keywords(&["arrival"]))
            .await
            .unwrap();

        assert_eq!(results[0].imdb_rating, None);
        assert_eq!(results[0].relevance_score, scoring::KEYWORD_WEIGHT);
    }

    #[tokio::test]
    async fn test_excluded_keywords_skip_lookup() {
        let mut provider = mock_provider();
        provider.expect_search_titles().returning(|_: &str| {
            Ok(vec![record("tt1", "Love Today"), record("tt2", "Jigarthanda")])
        });
        provider
            .expect_lookup_by_id()
            .times(1)
            .returning(|id: &str| Ok(Some(details(id, "8.4", "Tamil"))));

        let intent = SearchIntent {
            exclude_keywords: vec!["love".to_string()],
            detected_languages: vec!["tamil".to_string()],
            ..intent_with_keywords(&["tamil"])
        };

        let results = orchestrator(provider).search(&intent).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].imdb_id, "tt2");
    }
}
