//! Stage 3: additive relevance scoring.
//!
//! Weights keep the ordering genre > type match > platform > keyword > theme
//! so scores stay comparable across records found by different seed terms.

use crate::models::{RankedResult, RatingTier, SearchIntent};

pub const GENRE_WEIGHT: u32 = 10;
pub const TYPE_MATCH_WEIGHT: u32 = 8;
pub const PLATFORM_WEIGHT: u32 = 6;
pub const KEYWORD_WEIGHT: u32 = 4;
pub const THEME_WEIGHT: u32 = 2;

/// Bonus for enriched records when the user asked for highly rated titles
pub const HIGH_RATING_BOOST: u32 = 2;
const HIGH_RATING_BOOST_THRESHOLD: f64 = 7.5;

/// Relevance of a freshly merged record, from its title and type only
pub fn relevance_score(result: &RankedResult, intent: &SearchIntent) -> u32 {
    let title = result.title.to_lowercase();
    let record_type = result.title_type.to_lowercase();
    let mut score = 0;

    for genre in &intent.detected_genres {
        if title.contains(genre.as_str()) || record_type.contains(genre.as_str()) {
            score += GENRE_WEIGHT;
        }
    }

    for theme in &intent.themes {
        if title.contains(theme.as_str()) {
            score += THEME_WEIGHT;
        }
    }

    for keyword in &intent.keywords {
        if title.contains(keyword.as_str()) {
            score += KEYWORD_WEIGHT;
        }
    }

    if intent
        .detected_types
        .iter()
        .any(|title_type| title_type.matches(&record_type))
    {
        score += TYPE_MATCH_WEIGHT;
    }

    for platform in &intent.detected_platforms {
        if title.contains(platform.as_str()) {
            score += PLATFORM_WEIGHT;
        }
    }

    score
}

/// Adds the high-rating boost once ratings are known
pub fn apply_rating_boost(results: &mut [RankedResult], intent: &SearchIntent) {
    if intent.rating_tier != Some(RatingTier::High) {
        return;
    }
    for result in results.iter_mut() {
        if result
            .imdb_rating
            .is_some_and(|rating| rating >= HIGH_RATING_BOOST_THRESHOLD)
        {
            result.relevance_score += HIGH_RATING_BOOST;
        }
    }
}
