// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// Recording (track) as returned by the MusicBrainz search endpoint.
///
/// Every field is optional on the wire; missing values deserialize to
/// their defaults so a sparse search hit never fails the whole page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Recording {
    /// MusicBrainz recording ID (MBID), kept opaque.
    #[serde(default)]
    pub id: Option<String>,
    /// Recording title.
    #[serde(default)]
    pub title: Option<String>,
    /// Relevance score assigned by the search engine (0-100).
    #[serde(default)]
    pub score: Option<u32>,
    /// Length in milliseconds.
    #[serde(default)]
    pub length: Option<u64>,
    /// Artist credit for the recording, in credit order.
    #[serde(rename = "artist-credit", default)]
    pub artist_credit: Vec<ArtistCredit>,
    /// Releases the recording appears on.
    #[serde(default)]
    pub releases: Vec<ReleaseRef>,
}

/// Artist credit entry (artist contribution to a recording).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ArtistCredit {
    /// Name as credited on the recording.
    #[serde(default)]
    pub name: String,
    /// Artist details.
    #[serde(default)]
    pub artist: Option<ArtistRef>,
    /// Join phrase (e.g., " & ", " feat. ").
    #[serde(default)]
    pub joinphrase: Option<String>,
}

/// Reference to an artist (minimal info).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "sort-name", default)]
    pub sort_name: Option<String>,
}

/// Reference to a release a recording appears on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReleaseRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Release date (YYYY, YYYY-MM, or YYYY-MM-DD).
    #[serde(default)]
    pub date: Option<String>,
}

/// Search query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Search query string.
    pub query: String,
    /// Maximum number of results (server default 25, max 100).
    pub limit: Option<u32>,
    /// Offset for pagination (default 0).
    pub offset: Option<u32>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
            offset: None,
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Page of recording search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RecordingSearchResponse {
    /// Creation timestamp.
    #[serde(default)]
    pub created: Option<String>,
    /// Total number of matches, not just the ones on this page.
    #[serde(default)]
    pub count: u32,
    /// Offset used for this page.
    #[serde(default)]
    pub offset: u32,
    /// Results for this page, ranked by relevance.
    #[serde(default)]
    pub recordings: Vec<Recording>,
}
