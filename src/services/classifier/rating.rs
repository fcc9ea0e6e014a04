//! Rating and release-year detection.
//!
//! A 4-digit integer from 1900 up to a couple of years past the current one
//! is always a year and never a rating. Other numbers are rating candidates
//! only when they fall on the 0-10 scale; the first such candidate wins.

use chrono::{Datelike, Utc};
use regex::Regex;
use std::sync::OnceLock;

use super::taxonomy::RATING_PHRASES;
use crate::models::{RatingRange, RatingTier};

/// Half-width of the window for "around 8.6"
const AROUND_RADIUS: f64 = 0.3;
/// Half-width of the window for a bare "8.6"
const BARE_RADIUS: f64 = 0.2;

const EARLIEST_YEAR: i32 = 1900;
/// Announced releases; anything later reads as part of a title ("blade runner 2049")
const FUTURE_YEAR_MARGIN: i32 = 2;

static NUMBER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn number_pattern() -> &'static Regex {
    NUMBER_PATTERN.get_or_init(|| {
        Regex::new(
            r"(?:\b(?P<lead>around|about|near|approximately|roughly|above|over|at least|more than|below|under|less than)\s+)?\b(?P<num>\d+(?:\.\d+)?)(?P<plus>\s*\+)?",
        )
        .expect("rating regex must compile")
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum LeadIn {
    Around,
    Floor,
    Ceiling,
}

impl LeadIn {
    fn parse(word: &str) -> Self {
        match word {
            "above" | "over" | "at least" | "more than" => LeadIn::Floor,
            "below" | "under" | "less than" => LeadIn::Ceiling,
            _ => LeadIn::Around,
        }
    }
}

/// Rating and year signals found in a query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingSignals {
    pub range: Option<RatingRange>,
    pub tier: Option<RatingTier>,
    pub year: Option<u16>,
    /// Qualitative phrases that fired, excluded from free keywords
    pub consumed: Vec<&'static str>,
}

/// Extracts the rating window and year from lower-cased text.
///
/// Numeric patterns take priority over qualitative phrases; a qualitative
/// phrase is only consulted when no number on the rating scale was found.
pub fn detect(text: &str) -> RatingSignals {
    detect_in(text, Utc::now().year())
}

/// [`detect`] against an explicit current year
pub fn detect_in(text: &str, current_year: i32) -> RatingSignals {
    let mut signals = RatingSignals::default();

    for caps in number_pattern().captures_iter(text) {
        let Some(number) = caps.name("num") else {
            continue;
        };
        let raw = number.as_str();

        if let Some(year) = parse_year(raw, current_year) {
            signals.year.get_or_insert(year);
            continue;
        }

        if signals.range.is_some() {
            continue;
        }

        let Ok(value) = raw.parse::<f64>() else {
            continue;
        };
        if !(0.0..=10.0).contains(&value) {
            continue;
        }

        let lead = caps.name("lead").map(|m| LeadIn::parse(m.as_str()));
        let plus = caps.name("plus").is_some();

        // "top 10" is a count, not a rating
        if lead.is_none() && !plus && text[..number.start()].trim_end().ends_with("top") {
            continue;
        }

        signals.range = Some(match (lead, plus) {
            (Some(LeadIn::Around), _) => RatingRange::around(value, AROUND_RADIUS),
            (Some(LeadIn::Floor), _) | (None, true) => RatingRange::at_least(value),
            (Some(LeadIn::Ceiling), _) => RatingRange::at_most(value),
            (None, false) => RatingRange::around(value, BARE_RADIUS),
        });
    }

    for (tier, phrases) in RATING_PHRASES {
        let matched: Vec<&'static str> = phrases
            .iter()
            .copied()
            .filter(|phrase| text.contains(phrase))
            .collect();
        if matched.is_empty() {
            continue;
        }

        signals.consumed.extend(matched);
        if signals.range.is_none() && signals.tier.is_none() {
            signals.tier = Some(*tier);
            signals.range = Some(tier.range());
        }
    }

    signals
}

fn is_four_digits(raw: &str) -> bool {
    raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit())
}

/// 4-digit integers from 1900 to a little past `current_year`
fn parse_year(raw: &str, current_year: i32) -> Option<u16> {
    if !is_four_digits(raw) {
        return None;
    }
    raw.parse::<i32>()
        .ok()
        .filter(|year| (EARLIEST_YEAR..=current_year + FUTURE_YEAR_MARGIN).contains(year))
        .and_then(|year| u16::try_from(year).ok())
}

/// A 4-digit number that cannot be a release year, so it belongs to a title
pub fn is_title_number(token: &str, current_year: i32) -> bool {
    is_four_digits(token) && parse_year(token, current_year).is_none()
}
