use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rating preference chosen on the personalization screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RatingPreference {
    #[default]
    All,
    /// High rated (7+)
    High,
    /// Medium (5-7)
    Medium,
    /// Family friendly (G, PG). The catalog search cannot filter on certificates,
    /// so this one is stored but not applied to searches.
    Family,
}

/// User preferences used to personalize searches
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserPreferences {
    #[serde(default)]
    pub favorite_genres: Vec<String>,
    /// e.g. "1990s", "2010s"
    #[serde(default)]
    pub favorite_decades: Vec<String>,
    #[serde(default)]
    pub preferred_rating: RatingPreference,
    #[serde(default)]
    pub favorite_actors: String,
    #[serde(default)]
    pub avoid_genres: Vec<String>,
}

impl UserPreferences {
    /// Creates empty user preferences
    pub fn new() -> Self {
        Self::default()
    }

    /// Trims entries and drops blanks and duplicates, keeping first-seen order
    pub fn normalized(mut self) -> Self {
        self.favorite_genres = dedupe(self.favorite_genres);
        self.favorite_decades = dedupe(self.favorite_decades);
        self.avoid_genres = dedupe(self.avoid_genres);
        self.favorite_actors = self.favorite_actors.trim().to_string();
        self
    }
}

fn dedupe(values: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim().to_string();
        if value.is_empty() || seen.iter().any(|s| s.eq_ignore_ascii_case(&value)) {
            continue;
        }
        seen.push(value);
    }
    seen
}

/// A title saved to the user's favorites
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteMovie {
    pub imdb_id: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default = "Utc::now")]
    pub added_at: DateTime<Utc>,
}
