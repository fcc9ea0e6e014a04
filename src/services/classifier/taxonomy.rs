//! Trigger-phrase tables for intent detection.
//!
//! Every table maps a canonical tag to the phrases that imply it. Matching is
//! plain substring containment on the lower-cased query, so multi-word
//! phrases ("martial arts") need no tokenizer. New tags or synonyms are data
//! changes only.

use crate::models::{RatingTier, TitleType};

/// Canonical tag → trigger phrases, in detection order
pub type Taxonomy = &'static [(&'static str, &'static [&'static str])];

pub const GENRES: Taxonomy = &[
    (
        "action",
        &["action", "fight", "battle", "martial arts", "kung fu", "shootout", "explosive"],
    ),
    (
        "comedy",
        &["comedy", "comedies", "funny", "hilarious", "comic", "laugh", "humor", "humour"],
    ),
    ("drama", &["drama", "emotional", "tearjerker"]),
    ("horror", &["horror", "ghost", "scary", "haunted", "creepy", "zombie", "slasher"]),
    ("thriller", &["thriller", "suspense", "plot twist", "twisty"]),
    ("romance", &["romance", "romantic", "love story", "love"]),
    (
        "sci-fi",
        &["sci-fi", "science fiction", "scifi", "space", "alien", "futuristic", "robot"],
    ),
    ("fantasy", &["fantasy", "magic", "dragon", "wizard"]),
    ("animation", &["animation", "animated", "cartoon", "anime", "pixar"]),
    ("crime", &["crime", "gangster", "heist", "mafia", "detective", "cop"]),
    ("mystery", &["mystery", "mysteries", "whodunit"]),
    ("adventure", &["adventure", "quest", "treasure"]),
    ("documentary", &["documentary", "documentaries", "docuseries"]),
    ("family", &["family", "kids", "children"]),
    ("war", &["war film", "war movie", "wartime", "soldier", "military"]),
    ("western", &["western", "cowboy"]),
    ("musical", &["musical", "singing"]),
    ("biography", &["biography", "biopic", "based on a true story"]),
    ("sport", &["sport", "football", "cricket", "boxing"]),
];

pub const THEMES: Taxonomy = &[
    ("dark", &["dark", "gritty", "noir", "bleak", "disturbing"]),
    ("epic", &["epic", "saga", "grand scale"]),
    (
        "feel-good",
        &["feel good", "feel-good", "feelgood", "uplifting", "wholesome", "heartwarming"],
    ),
    (
        "mind-bending",
        &["mind bending", "mind-bending", "mindbending", "trippy", "psychological"],
    ),
    ("inspirational", &["inspiring", "inspirational", "motivational", "true story"]),
    ("nostalgic", &["nostalgic", "nostalgia", "retro", "classic"]),
    ("lighthearted", &["light-hearted", "lighthearted", "chill", "relaxing", "cozy"]),
    ("intense", &["intense", "edge of my seat", "edge of the seat", "gripping", "adrenaline"]),
    ("revenge", &["revenge", "vengeance"]),
    ("survival", &["survival", "stranded"]),
];

pub const LANGUAGES: Taxonomy = &[
    ("tamil", &["tamil", "kollywood"]),
    ("hindi", &["hindi", "bollywood"]),
    ("telugu", &["telugu", "tollywood"]),
    ("malayalam", &["malayalam", "mollywood"]),
    ("kannada", &["kannada", "sandalwood"]),
    ("korean", &["korean", "k-drama", "kdrama"]),
    ("japanese", &["japanese", "j-drama"]),
    ("chinese", &["chinese", "mandarin", "cantonese"]),
    ("english", &["english", "hollywood"]),
    ("spanish", &["spanish"]),
    ("french", &["french"]),
    ("german", &["german"]),
    ("italian", &["italian"]),
];

pub const PLATFORMS: Taxonomy = &[
    ("netflix", &["netflix"]),
    ("prime", &["prime video", "amazon prime", "prime"]),
    ("disney", &["disney+", "disney plus", "disney", "hotstar"]),
    ("hbo", &["hbo"]),
    ("hulu", &["hulu"]),
    ("apple tv", &["apple tv"]),
];

/// Content-type triggers; series is checked first and both may match
pub const CONTENT_TYPES: &[(TitleType, &[&str])] = &[
    (TitleType::Series, &["series", "show", "tv"]),
    (TitleType::Movie, &["movie", "film"]),
];

/// Qualitative rating phrases, used only when no number was given
pub const RATING_PHRASES: &[(RatingTier, &[&str])] = &[
    (
        RatingTier::High,
        &[
            "top rated",
            "top-rated",
            "highly rated",
            "high rated",
            "highest rated",
            "best rated",
            "well rated",
            "critically acclaimed",
        ],
    ),
    (
        RatingTier::Medium,
        &[
            "decent rating",
            "decently rated",
            "average rating",
            "average rated",
            "moderately rated",
            "mid rated",
        ],
    ),
];

/// Languages the catalog rarely tags directly, matched through the production country instead
pub const LANGUAGE_COUNTRY_FALLBACKS: &[(&str, &[&str])] = &[
    ("tamil", &["india"]),
    ("hindi", &["india"]),
    ("telugu", &["india"]),
    ("malayalam", &["india"]),
    ("kannada", &["india"]),
    ("korean", &["korea"]),
    ("japanese", &["japan"]),
    ("chinese", &["china", "hong kong", "taiwan"]),
];

/// Words never emitted as free keywords
pub const STOP_WORDS: &[&str] = &[
    "movie", "movies", "film", "films", "show", "shows", "series", "tv",
    "best", "top", "latest", "only", "like", "in", "of", "above", "over", "under", "below",
    "imdb", "the", "and", "for", "with", "about", "around", "near", "approximately", "roughly",
    "rated", "rating", "ratings", "some", "good", "great", "watch", "want", "from", "that",
    "this", "something", "any", "give", "find", "recommend", "recommendations", "high",
    "highly", "decent", "average", "language", "languages", "are", "was", "who", "has",
    "have", "least", "more", "less", "than", "released", "made", "year", "years", "stars",
    "star", "score", "where", "which", "new", "please", "looking", "very",
];

/// Tags from `table` whose phrases occur in `text`, with the phrases that fired
pub fn detect(table: Taxonomy, text: &str) -> (Vec<String>, Vec<&'static str>) {
    let mut tags = Vec::new();
    let mut consumed = Vec::new();

    for (tag, phrases) in table {
        let matched: Vec<&'static str> = phrases
            .iter()
            .copied()
            .filter(|phrase| text.contains(phrase))
            .collect();

        if !matched.is_empty() {
            tags.push((*tag).to_string());
            consumed.extend(matched);
        }
    }

    (tags, consumed)
}

/// Country substrings that stand in for `language` when the catalog omits it
pub fn country_fallbacks(language: &str) -> &'static [&'static str] {
    LANGUAGE_COUNTRY_FALLBACKS
        .iter()
        .find(|(tag, _)| *tag == language)
        .map(|(_, countries)| *countries)
        .unwrap_or(&[])
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// `word` is `phrase` itself or a simple plural of it ("zombies", "comedies")
pub fn is_word_form(word: &str, phrase: &str) -> bool {
    if word == phrase {
        return true;
    }
    let Some(suffix) = word.strip_prefix(phrase) else {
        return phrase
            .strip_suffix('y')
            .and_then(|stem| word.strip_prefix(stem))
            .is_some_and(|rest| rest == "ies");
    };
    suffix == "s" || suffix == "es"
}

/// Whether a single word names a genre, theme or language on its own
pub fn is_tag_word(word: &str) -> bool {
    [GENRES, THEMES, LANGUAGES].iter().any(|table| {
        table.iter().any(|(tag, phrases)| {
            is_word_form(word, tag) || phrases.iter().any(|phrase| is_word_form(word, phrase))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_multi_word_phrase() {
        let (tags, consumed) = detect(GENRES, "martial arts epic");
        assert_eq!(tags, vec!["action"]);
        assert_eq!(consumed, vec!["martial arts"]);
    }

    #[test]
    fn test_detect_keeps_table_order() {
        let (tags, _) = detect(GENRES, "a funny horror flick");
        assert_eq!(tags, vec!["comedy", "horror"]);
    }

    #[test]
    fn test_detect_no_match() {
        let (tags, consumed) = detect(LANGUAGES, "xyzzy");
        assert!(tags.is_empty());
        assert!(consumed.is_empty());
    }

    #[test]
    fn test_country_fallbacks() {
        assert_eq!(country_fallbacks("tamil"), &["india"]);
        assert_eq!(country_fallbacks("chinese").len(), 3);
        assert!(country_fallbacks("english").is_empty());
    }

    #[test]
    fn test_word_forms() {
        assert!(is_word_form("zombie", "zombie"));
        assert!(is_word_form("zombies", "zombie"));
        assert!(is_word_form("witches", "witch"));
        assert!(is_word_form("comedies", "comedy"));
        assert!(!is_word_form("ghostbusters", "ghost"));
        assert!(!is_word_form("robocop", "cop"));
    }

    #[test]
    fn test_tag_words() {
        assert!(is_tag_word("horror"));
        assert!(is_tag_word("zombies"));
        assert!(is_tag_word("tamil"));
        assert!(!is_tag_word("time"));
        assert!(!is_tag_word("another"));
    }

    #[test]
    fn test_tags_are_unique_per_table() {
        for table in [GENRES, THEMES, LANGUAGES, PLATFORMS] {
            let mut tags: Vec<&str> = table.iter().map(|(tag, _)| *tag).collect();
            let total = tags.len();
            tags.sort_unstable();
            tags.dedup();
            assert_eq!(tags.len(), total);
        }
    }
}
