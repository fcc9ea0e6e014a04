use serde::{Deserialize, Serialize};

/// How a title can be watched through a linked service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Streaming,
    Rental,
    Theater,
    Music,
    Video,
}

/// A named outbound search link (Netflix search, Spotify search, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaLink {
    /// Display name of the service (e.g., "Netflix", "Spotify")
    pub name: String,
    pub kind: LinkKind,
    pub url: String,
}

/// Where a title can be watched
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchOptions {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    /// Only present for releases from the last year
    pub theater: Option<MediaLink>,
    pub streaming: Vec<MediaLink>,
    pub rental: Vec<MediaLink>,
}

/// Soundtrack and trailer links for a title
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoundtrackLinks {
    pub imdb_id: String,
    pub title: String,
    pub soundtrack: Vec<MediaLink>,
    pub trailer: MediaLink,
}
