//! Outbound search links for watching, renting and listening.
//!
//! Links are built locally; no third-party API is called.

use chrono::{Datelike, Utc};
use reqwest::Url;

use crate::{
    error::{AppError, AppResult},
    models::{CatalogRecord, LinkKind, MediaLink, SoundtrackLinks, WatchOptions},
};

/// (name, base url, query parameter, extra fixed parameters)
type SearchSite = (&'static str, &'static str, &'static str, &'static [(&'static str, &'static str)]);

const STREAMING_SITES: &[SearchSite] = &[
    ("Netflix", "https://www.netflix.com/search", "q", &[]),
    ("Prime Video", "https://www.amazon.com/s", "k", &[("i", "instant-video")]),
    ("Disney+", "https://www.disneyplus.com/search", "q", &[]),
    ("HBO Max", "https://www.max.com/search", "q", &[]),
    ("Hulu", "https://www.hulu.com/search", "q", &[]),
    ("Apple TV+", "https://tv.apple.com/search", "q", &[]),
];

const RENTAL_SITES: &[SearchSite] = &[
    ("Google Play", "https://play.google.com/store/search", "q", &[("c", "movies")]),
    ("iTunes", "https://tv.apple.com/search", "q", &[]),
];

const YOUTUBE_SEARCH: &str = "https://www.youtube.com/results";
const YOUTUBE_MUSIC_SEARCH: &str = "https://music.youtube.com/search";
const SPOTIFY_SEARCH: &str = "https://open.spotify.com/search";
const THEATER_SEARCH: &str = "https://www.google.com/search";

/// Streaming, rental and (for recent releases) theater links for a title
pub fn watch_options(record: &CatalogRecord) -> AppResult<WatchOptions> {
    watch_options_in(record, Utc::now().year())
}

/// Same as [`watch_options`] with an explicit current year
pub fn watch_options_in(record: &CatalogRecord, current_year: i32) -> AppResult<WatchOptions> {
    let title = record.title.as_str();

    let streaming = STREAMING_SITES
        .iter()
        .map(|site| site_link(site, title, LinkKind::Streaming))
        .collect::<AppResult<Vec<_>>>()?;

    let mut rental = vec![MediaLink {
        name: "YouTube".to_string(),
        kind: LinkKind::Rental,
        url: youtube_search(&format!("{} rent", title))?,
    }];
    for site in RENTAL_SITES {
        rental.push(site_link(site, title, LinkKind::Rental)?);
    }

    let theater = if is_recent_release(&record.year, current_year) {
        let showtimes = format!("{} movie showtimes near me", title);
        Some(MediaLink {
            name: "Showtimes".to_string(),
            kind: LinkKind::Theater,
            url: with_query(THEATER_SEARCH, &[("q", showtimes.as_str())])?,
        })
    } else {
        None
    };

    Ok(WatchOptions {
        imdb_id: record.imdb_id.clone(),
        title: record.title.clone(),
        year: record.year.clone(),
        theater,
        streaming,
        rental,
    })
}

/// Soundtrack search links plus a trailer search
pub fn soundtrack_links(record: &CatalogRecord) -> AppResult<SoundtrackLinks> {
    let soundtrack_query = format!("{} soundtrack", record.title);

    let mut spotify = parse(SPOTIFY_SEARCH)?;
    spotify
        .path_segments_mut()
        .map_err(|_| AppError::Internal("Spotify search URL cannot take segments".to_string()))?
        .push(&soundtrack_query);

    let soundtrack = vec![
        MediaLink {
            name: "YouTube".to_string(),
            kind: LinkKind::Music,
            url: youtube_search(&soundtrack_query)?,
        },
        MediaLink {
            name: "YouTube Music".to_string(),
            kind: LinkKind::Music,
            url: with_query(YOUTUBE_MUSIC_SEARCH, &[("q", soundtrack_query.as_str())])?,
        },
        MediaLink {
            name: "Spotify".to_string(),
            kind: LinkKind::Music,
            url: spotify.to_string(),
        },
    ];

    let trailer = MediaLink {
        name: "YouTube".to_string(),
        kind: LinkKind::Video,
        url: youtube_search(&format!("{} {} official trailer", record.title, record.year))?,
    };

    Ok(SoundtrackLinks {
        imdb_id: record.imdb_id.clone(),
        title: record.title.clone(),
        soundtrack,
        trailer,
    })
}

/// Released this year or last. Series ranges like "2019–2022" use their start year.
fn is_recent_release(year: &str, current_year: i32) -> bool {
    let start: String = year.chars().take_while(|c| c.is_ascii_digit()).collect();
    start
        .parse::<i32>()
        .map(|release| current_year - release <= 1)
        .unwrap_or(false)
}

fn site_link(site: &SearchSite, title: &str, kind: LinkKind) -> AppResult<MediaLink> {
    let (name, base, param, extra) = *site;
    let mut params = vec![(param, title)];
    params.extend(extra.iter().copied());
    Ok(MediaLink {
        name: name.to_string(),
        kind,
        url: with_query(base, &params)?,
    })
}

fn youtube_search(query: &str) -> AppResult<String> {
    with_query(YOUTUBE_SEARCH, &[("search_query", query)])
}

fn with_query(base: &str, params: &[(&str, &str)]) -> AppResult<String> {
    Url::parse_with_params(base, params)
        .map(String::from)
        .map_err(|e| AppError::Internal(format!("Invalid link base {}: {}", base, e)))
}

fn parse(base: &str) -> AppResult<Url> {
    Url::parse(base).map_err(|e| AppError::Internal(format!("Invalid link base {}: {}", base, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, year: &str) -> CatalogRecord {
        CatalogRecord {
            imdb_id: "tt15239678".to_string(),
            title: title.to_string(),
            year: year.to_string(),
            record_type: "movie".to_string(),
            poster: "N/A".to_string(),
        }
    }

    #[test]
    fn test_watch_options_cover_all_services() {
        let options = watch_options_in(&record("Dune: Part Two", "2024"), 2030).unwrap();

        let names: Vec<&str> = options.streaming.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Netflix", "Prime Video", "Disney+", "HBO Max", "Hulu", "Apple TV+"]
        );
        assert_eq!(options.rental.len(), 3);
        assert!(options.theater.is_none());
        assert_eq!(
            options.streaming[0].url,
            "https://www.netflix.com/search?q=Dune%3A+Part+Two"
        );
        assert_eq!(
            options.streaming[1].url,
            "https://www.amazon.com/s?k=Dune%3A+Part+Two&i=instant-video"
        );
    }

    #[test]
    fn test_theater_link_only_for_recent_releases() {
        let recent = watch_options_in(&record("Sinners", "2025"), 2026).unwrap();
        let theater = recent.theater.unwrap();
        assert_eq!(theater.kind, LinkKind::Theater);
        assert!(theater.url.contains("showtimes"));

        let old = watch_options_in(&record("Heat", "1995"), 2026).unwrap();
        assert!(old.theater.is_none());
    }

    #[test]
    fn test_recent_release_parsing() {
        assert!(is_recent_release("2026", 2026));
        assert!(is_recent_release("2025–", 2026));
        assert!(!is_recent_release("2019–2022", 2026));
        assert!(!is_recent_release("N/A", 2026));
    }

    #[test]
    fn test_soundtrack_and_trailer_links() {
        let links = soundtrack_links(&record("Interstellar", "2014")).unwrap();

        assert_eq!(links.soundtrack.len(), 3);
        assert_eq!(
            links.soundtrack[0].url,
            "https://www.youtube.com/results?search_query=Interstellar+soundtrack"
        );
        assert_eq!(
            links.soundtrack[2].url,
            "https://open.spotify.com/search/Interstellar%20soundtrack"
        );
        assert_eq!(
            links.trailer.url,
            "https://www.youtube.com/results?search_query=Interstellar+2014+official+trailer"
        );
        assert_eq!(links.trailer.kind, LinkKind::Video);
    }
}
