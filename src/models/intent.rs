use serde::{Deserialize, Serialize};

use super::{RatingPreference, TitleType, UserPreferences};

/// Inclusive rating window on the 0.0-10.0 scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RatingRange {
    pub min: f64,
    pub max: f64,
}

impl RatingRange {
    /// Builds a range clamped to the rating scale, rounded to one decimal
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: round_tenth(min.clamp(0.0, 10.0)),
            max: round_tenth(max.clamp(0.0, 10.0)),
        }
    }

    /// Symmetric window around a target value
    pub fn around(center: f64, radius: f64) -> Self {
        Self::new(center - radius, center + radius)
    }

    /// `[floor, 10.0]`
    pub fn at_least(floor: f64) -> Self {
        Self::new(floor, 10.0)
    }

    /// `[0.0, ceiling]`
    pub fn at_most(ceiling: f64) -> Self {
        Self::new(0.0, ceiling)
    }

    pub fn contains(&self, rating: f64) -> bool {
        self.min <= rating && rating <= self.max
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Qualitative rating constraint used when no numeric range was given
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RatingTier {
    /// rating >= 7.0
    High,
    /// 5.0 <= rating < 7.0
    Medium,
}

impl RatingTier {
    pub fn accepts(&self, rating: f64) -> bool {
        match self {
            RatingTier::High => rating >= 7.0,
            RatingTier::Medium => (5.0..7.0).contains(&rating),
        }
    }

    /// The window implied by a qualitative phrase
    pub fn range(&self) -> RatingRange {
        match self {
            RatingTier::High => RatingRange::new(7.0, 10.0),
            RatingTier::Medium => RatingRange::new(5.0, 7.0),
        }
    }
}

/// Structured intent extracted from a free-text query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchIntent {
    /// Canonical genre tags in detection order
    pub detected_genres: Vec<String>,
    /// Mood/tone tags, scored lower than genres
    pub themes: Vec<String>,
    pub detected_languages: Vec<String>,
    /// Streaming platform hints ("netflix", "prime", ...)
    pub detected_platforms: Vec<String>,
    /// Empty means no type constraint
    pub detected_types: Vec<TitleType>,
    /// Free-text title seeds, deduplicated in first-seen order
    #[serde(alias = "title_seeds")]
    pub keywords: Vec<String>,
    /// Words the user asked to avoid ("without romance")
    pub exclude_keywords: Vec<String>,
    /// Genres to drop after enrichment, usually from user preferences
    pub excluded_genres: Vec<String>,
    pub rating_range: Option<RatingRange>,
    pub rating_tier: Option<RatingTier>,
    pub year: Option<u16>,
    pub original_query: String,
}

impl SearchIntent {
    /// An intent carrying only the raw query; everything else unconstrained
    pub fn from_query(query: impl Into<String>) -> Self {
        Self {
            original_query: query.into(),
            ..Self::default()
        }
    }

    pub fn has_rating_constraint(&self) -> bool {
        self.rating_range.is_some() || self.rating_tier.is_some()
    }

    pub fn has_language_constraint(&self) -> bool {
        !self.detected_languages.is_empty()
    }

    /// Rating, language and genre-exclusion filters all need detail data
    pub fn needs_enrichment(&self) -> bool {
        self.has_rating_constraint()
            || self.has_language_constraint()
            || !self.excluded_genres.is_empty()
    }

    /// Folds stored user preferences into the intent.
    ///
    /// The query always wins: a preferred rating only applies when the query
    /// expressed no rating constraint of its own.
    pub fn with_preferences(mut self, preferences: &UserPreferences) -> Self {
        if !self.has_rating_constraint() {
            self.rating_tier = match preferences.preferred_rating {
                RatingPreference::High => Some(RatingTier::High),
                RatingPreference::Medium => Some(RatingTier::Medium),
                RatingPreference::All | RatingPreference::Family => None,
            };
        }

        for genre in &preferences.avoid_genres {
            let genre = genre.trim().to_lowercase();
            if genre.is_empty() || self.detected_genres.contains(&genre) {
                continue;
            }
            if !self.excluded_genres.contains(&genre) {
                self.excluded_genres.push(genre);
            }
        }

        self
    }
}
