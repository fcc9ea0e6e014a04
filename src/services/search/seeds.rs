//! Stage 1: choosing the terms sent to the catalog's title search.

use crate::models::SearchIntent;
use crate::services::classifier::FALLBACK_SEED;

/// Ordered, deduplicated seed terms for one search.
///
/// Priority: the first `max_keywords` free keywords, every genre, every
/// theme, languages (only when neither keywords nor genres exist, since the
/// catalog cannot filter by language), then platform hints. Never empty.
pub fn seed_terms(intent: &SearchIntent, max_keywords: usize) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();

    let keywords = intent.keywords.iter().take(max_keywords);
    let genres = intent.detected_genres.iter();
    let themes = intent.themes.iter();
    let languages = intent
        .detected_languages
        .iter()
        .filter(|_| intent.keywords.is_empty() && intent.detected_genres.is_empty());
    let platforms = intent.detected_platforms.iter();

    for term in keywords
        .chain(genres)
        .chain(themes)
        .chain(languages)
        .chain(platforms)
    {
        push_unique(&mut terms, term);
    }

    if terms.is_empty() {
        push_unique(&mut terms, &intent.original_query);
    }
    if terms.is_empty() {
        terms.push(FALLBACK_SEED.to_string());
    }

    terms
}

fn push_unique(terms: &mut Vec<String>, term: &str) {
    let term = term.trim();
    if term.is_empty() {
        return;
    }
    if !terms.iter().any(|t| t.eq_ignore_ascii_case(term)) {
        terms.push(term.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_priority_order_and_keyword_cap() {
        let intent = SearchIntent {
            keywords: strings(&["batman", "joker", "gotham", "arkham"]),
            detected_genres: strings(&["action"]),
            themes: strings(&["dark"]),
            detected_languages: strings(&["english"]),
            detected_platforms: strings(&["hbo"]),
            ..SearchIntent::from_query("batman joker gotham arkham dark action english hbo")
        };

        assert_eq!(
            seed_terms(&intent, 3),
            strings(&["batman", "joker", "gotham", "action", "dark", "hbo"])
        );
    }

    #[test]
    fn test_languages_broaden_when_no_genre_or_keyword() {
        let intent = SearchIntent {
            themes: strings(&["feel-good"]),
            detected_languages: strings(&["tamil", "telugu"]),
            ..SearchIntent::from_query("feel good tamil telugu")
        };

        assert_eq!(
            seed_terms(&intent, 3),
            strings(&["feel-good", "tamil", "telugu"])
        );
    }

    #[test]
    fn test_duplicates_are_dropped() {
        let intent = SearchIntent {
            keywords: strings(&["netflix"]),
            detected_platforms: strings(&["netflix"]),
            ..SearchIntent::from_query("netflix")
        };

        assert_eq!(seed_terms(&intent, 3), strings(&["netflix"]));
    }

    #[test]
    fn test_falls_back_to_original_query_then_generic_term() {
        assert_eq!(
            seed_terms(&SearchIntent::from_query("Dune"), 3),
            strings(&["Dune"])
        );
        assert_eq!(
            seed_terms(&SearchIntent::from_query("   "), 3),
            strings(&[FALLBACK_SEED])
        );
    }
}
