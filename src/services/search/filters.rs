//! Stage 5: composable candidate filters.
//!
//! Each filter owns the slice of the intent it checks, so a pipeline is built
//! once per search and applied to the merged candidate list in order.

use crate::models::{RankedResult, RatingRange, RatingTier, SearchIntent, TitleType};
use crate::services::classifier::taxonomy;

/// A single narrowing step over the candidate list.
///
/// Filters take ownership of the candidates and return the survivors in their
/// original order; they never reorder.
pub trait CandidateFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    fn apply(&self, candidates: Vec<RankedResult>) -> Vec<RankedResult>;
}

/// Chains filters together using the builder pattern
pub struct FilterPipeline {
    filters: Vec<Box<dyn CandidateFilter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    pub fn add_filter(mut self, filter: impl CandidateFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// The post-enrichment filters an intent asks for
    pub fn for_intent(intent: &SearchIntent) -> Self {
        let mut pipeline = Self::new();

        if intent.has_rating_constraint() {
            pipeline = pipeline.add_filter(RatingFilter::new(intent.rating_range, intent.rating_tier));
        }
        if intent.has_language_constraint() {
            pipeline = pipeline.add_filter(LanguageFilter::new(intent.detected_languages.clone()));
        }
        if !intent.excluded_genres.is_empty() {
            pipeline = pipeline.add_filter(GenreExclusionFilter::new(intent.excluded_genres.clone()));
        }
        if let Some(year) = intent.year {
            pipeline = pipeline.add_filter(YearFilter::new(year));
        }
        if !intent.detected_types.is_empty() {
            pipeline = pipeline.add_filter(ContentTypeFilter::new(intent.detected_types.clone()));
        }

        pipeline
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn apply(&self, candidates: Vec<RankedResult>) -> Vec<RankedResult> {
        let mut current = candidates;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current);
            tracing::debug!(
                filter = filter.name(),
                before,
                after = current.len(),
                "Filter applied"
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps records whose numeric rating satisfies the range, or the tier when no range is set.
/// Unrated records ("N/A") are always dropped.
pub struct RatingFilter {
    range: Option<RatingRange>,
    tier: Option<RatingTier>,
}

impl RatingFilter {
    pub fn new(range: Option<RatingRange>, tier: Option<RatingTier>) -> Self {
        Self { range, tier }
    }

    fn accepts(&self, rating: f64) -> bool {
        match (&self.range, &self.tier) {
            (Some(range), _) => range.contains(rating),
            (None, Some(tier)) => tier.accepts(rating),
            (None, None) => true,
        }
    }
}

impl CandidateFilter for RatingFilter {
    fn name(&self) -> &str {
        "RatingFilter"
    }

    fn apply(&self, candidates: Vec<RankedResult>) -> Vec<RankedResult> {
        candidates
            .into_iter()
            .filter(|c| c.imdb_rating.is_some_and(|rating| self.accepts(rating)))
            .collect()
    }
}

/// Keeps records in any of the requested languages.
///
/// The catalog's language field is unreliable for regional cinema, so some
/// languages also match through the production country.
pub struct LanguageFilter {
    languages: Vec<String>,
}

impl LanguageFilter {
    pub fn new(languages: Vec<String>) -> Self {
        Self { languages }
    }

    fn matches(&self, candidate: &RankedResult) -> bool {
        let language = candidate.language.to_lowercase();
        let country = candidate.country.to_lowercase();

        self.languages.iter().any(|tag| {
            language.contains(tag.as_str())
                || taxonomy::country_fallbacks(tag)
                    .iter()
                    .any(|fallback| country.contains(fallback))
        })
    }
}

impl CandidateFilter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn apply(&self, candidates: Vec<RankedResult>) -> Vec<RankedResult> {
        candidates.into_iter().filter(|c| self.matches(c)).collect()
    }
}

/// Drops records whose enriched genre list contains an avoided genre
pub struct GenreExclusionFilter {
    genres: Vec<String>,
}

impl GenreExclusionFilter {
    pub fn new(genres: Vec<String>) -> Self {
        Self {
            genres: genres.into_iter().map(|g| g.to_lowercase()).collect(),
        }
    }
}

impl CandidateFilter for GenreExclusionFilter {
    fn name(&self) -> &str {
        "GenreExclusionFilter"
    }

    fn apply(&self, candidates: Vec<RankedResult>) -> Vec<RankedResult> {
        candidates
            .into_iter()
            .filter(|c| {
                let genre = c.genre.to_lowercase();
                !self.genres.iter().any(|avoided| genre.contains(avoided.as_str()))
            })
            .collect()
    }
}

/// Keeps records whose year field mentions the requested year ("2019–2021" matches 2019)
pub struct YearFilter {
    year: String,
}

impl YearFilter {
    pub fn new(year: u16) -> Self {
        Self {
            year: year.to_string(),
        }
    }
}

impl CandidateFilter for YearFilter {
    fn name(&self) -> &str {
        "YearFilter"
    }

    fn apply(&self, candidates: Vec<RankedResult>) -> Vec<RankedResult> {
        candidates
            .into_iter()
            .filter(|c| c.year.contains(self.year.as_str()))
            .collect()
    }
}

/// Keeps records whose type exactly matches one of the requested types
pub struct ContentTypeFilter {
    types: Vec<TitleType>,
}

impl ContentTypeFilter {
    pub fn new(types: Vec<TitleType>) -> Self {
        Self { types }
    }
}

impl CandidateFilter for ContentTypeFilter {
    fn name(&self) -> &str {
        "ContentTypeFilter"
    }

    fn apply(&self, candidates: Vec<RankedResult>) -> Vec<RankedResult> {
        candidates
            .into_iter()
            .filter(|c| self.types.iter().any(|t| t.matches(&c.title_type)))
            .collect()
    }
}

/// Drops records whose title (or enriched genre) mentions an excluded keyword.
/// Runs before enrichment to save detail lookups.
pub struct ExcludeKeywordFilter {
    keywords: Vec<String>,
}

impl ExcludeKeywordFilter {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl CandidateFilter for ExcludeKeywordFilter {
    fn name(&self) -> &str {
        "ExcludeKeywordFilter"
    }

    fn apply(&self, candidates: Vec<RankedResult>) -> Vec<RankedResult> {
        candidates
            .into_iter()
            .filter(|c| {
                let title = c.title.to_lowercase();
                let genre = c.genre.to_lowercase();
                !self
                    .keywords
                    .iter()
                    .any(|k| title.contains(k.as_str()) || genre.contains(k.as_str()))
            })
            .collect()
    }
}
