//! Rule-based intent classifier.
//!
//! Maps free text such as "comedy romantic around 8.6 in tamil" to a
//! [`SearchIntent`]. Pure and total: no I/O, no hidden state, and every input
//! produces an intent with at least one title seed.

pub mod rating;
pub mod taxonomy;

use chrono::{Datelike, Utc};
use regex::Regex;
use std::sync::OnceLock;

use crate::models::SearchIntent;
use taxonomy::{CONTENT_TYPES, GENRES, LANGUAGES, PLATFORMS, THEMES};

/// Seed used when the query is blank
pub const FALLBACK_SEED: &str = "movie";

/// Shortest token kept as a free keyword
const MIN_KEYWORD_LEN: usize = 3;

static EXCLUSION_PATTERN: OnceLock<Regex> = OnceLock::new();

fn exclusion_pattern() -> &'static Regex {
    EXCLUSION_PATTERN.get_or_init(|| {
        Regex::new(r"\b(?P<lead>without|except|excluding|exclude|not|no)\s+(?P<word>[a-z0-9][a-z0-9'+-]*)")
            .expect("exclusion regex must compile")
    })
}

/// Classifies a raw query into a structured search intent
pub fn classify(query: &str) -> SearchIntent {
    let current_year = Utc::now().year();
    let lowered = query.to_lowercase();
    let mut intent = SearchIntent::from_query(query);

    // Exclusions are cut out first so "no horror" does not detect horror
    let (text, exclude_keywords) = strip_exclusions(&lowered);
    intent.exclude_keywords = exclude_keywords;

    let mut consumed: Vec<&'static str> = Vec::new();

    for (title_type, triggers) in CONTENT_TYPES {
        let matched: Vec<&'static str> = triggers
            .iter()
            .copied()
            .filter(|trigger| text.contains(trigger))
            .collect();
        if !matched.is_empty() {
            intent.detected_types.push(*title_type);
            consumed.extend(matched);
        }
    }

    let (genres, genre_phrases) = taxonomy::detect(GENRES, &text);
    let (themes, theme_phrases) = taxonomy::detect(THEMES, &text);
    let (languages, language_phrases) = taxonomy::detect(LANGUAGES, &text);
    let (platforms, platform_phrases) = taxonomy::detect(PLATFORMS, &text);
    intent.detected_genres = genres;
    intent.themes = themes;
    intent.detected_languages = languages;
    intent.detected_platforms = platforms;
    consumed.extend(genre_phrases);
    consumed.extend(theme_phrases);
    consumed.extend(language_phrases);
    consumed.extend(platform_phrases);

    let signals = rating::detect_in(&text, current_year);
    intent.rating_range = signals.range;
    intent.rating_tier = signals.tier;
    intent.year = signals.year;
    consumed.extend(signals.consumed);

    intent.keywords = extract_keywords(&text, &consumed, current_year);
    apply_fallback(&mut intent, &lowered);

    tracing::debug!(
        query = %query,
        genres = ?intent.detected_genres,
        languages = ?intent.detected_languages,
        keywords = ?intent.keywords,
        rating = ?intent.rating_range,
        "Query classified"
    );

    intent
}

/// Removes "without X"-style phrases, returning the remaining text and the excluded words
fn strip_exclusions(text: &str) -> (String, Vec<String>) {
    let mut excluded: Vec<String> = Vec::new();

    for caps in exclusion_pattern().captures_iter(text) {
        let Some(word) = excluded_word(&caps) else {
            continue;
        };
        if !excluded.iter().any(|w| w == word) {
            excluded.push(word.to_string());
        }
    }

    if excluded.is_empty() {
        return (text.to_string(), excluded);
    }

    let remaining = exclusion_pattern()
        .replace_all(text, |caps: &regex::Captures| match excluded_word(caps) {
            Some(_) => " ".to_string(),
            None => caps[0].to_string(),
        })
        .into_owned();

    (remaining, excluded)
}

/// The word an exclusion match removes, if it qualifies.
///
/// "no" and "not" open many titles ("No Time to Die"), so they only exclude
/// a known genre, theme or language.
fn excluded_word<'t>(caps: &regex::Captures<'t>) -> Option<&'t str> {
    let word = caps.name("word")?.as_str();
    if word.len() < MIN_KEYWORD_LEN || taxonomy::is_stop_word(word) {
        return None;
    }
    let lead = caps.name("lead").map(|m| m.as_str()).unwrap_or_default();
    if matches!(lead, "no" | "not") && !taxonomy::is_tag_word(word) {
        return None;
    }
    Some(word)
}

/// Whitespace tokens that carry no category, rating, or stop-word meaning
fn extract_keywords(text: &str, consumed: &[&'static str], current_year: i32) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    for raw in text.split_whitespace() {
        let token = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '-' && c != '+');
        let token = token.trim_end_matches('+');

        if token.chars().count() < MIN_KEYWORD_LEN
            || taxonomy::is_stop_word(token)
            || (is_numeric(token) && !rating::is_title_number(token, current_year))
            || is_consumed(token, consumed)
        {
            continue;
        }

        if !keywords.iter().any(|k| k == token) {
            keywords.push(token.to_string());
        }
    }

    keywords
}

fn is_numeric(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '+')
}

/// A token is consumed when it is a word of a fired phrase, or a plural of one.
/// Tokens that merely contain a phrase ("ghostbusters") stay keywords.
fn is_consumed(token: &str, consumed: &[&'static str]) -> bool {
    consumed.iter().any(|phrase| {
        phrase
            .split_whitespace()
            .any(|word| taxonomy::is_word_form(token, word))
    })
}

/// Guarantees at least one title seed
fn apply_fallback(intent: &mut SearchIntent, lowered: &str) {
    let nothing_detected = intent.detected_genres.is_empty()
        && intent.themes.is_empty()
        && intent.keywords.is_empty();

    if !nothing_detected {
        return;
    }

    if let Some(language) = intent.detected_languages.first() {
        intent.keywords.push(language.clone());
        return;
    }

    let trimmed = lowered.trim();
    let seed = if trimmed.is_empty() {
        FALLBACK_SEED
    } else {
        trimmed
    };
    intent.keywords.push(seed.to_string());
}
