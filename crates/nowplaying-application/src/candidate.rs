// SPDX-License-Identifier: GPL-3.0-or-later

use nowplaying_fingerprint::FingerprintMatch;
use nowplaying_musicbrainz::Recording;
use serde::{Deserialize, Serialize};

/// Placeholder shown when a result carries no title or no artist.
pub const UNKNOWN: &str = "Unknown";

/// One ranked result returned by a recognition stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    /// Contributing artist names in credit order.
    pub artists: Vec<String>,
    /// Identifier assigned by the source (MusicBrainz recording ID).
    pub source_id: Option<String>,
    /// Position in the source's response, 0 for the top hit.
    pub rank: usize,
    /// Source confidence normalized to 0.0-1.0.
    pub score: Option<f32>,
    /// Title of the first release the recording appears on.
    pub album: Option<String>,
    pub length_ms: Option<u64>,
}

impl Candidate {
    /// Build a candidate from a raw MusicBrainz search hit.
    pub fn from_recording(rank: usize, recording: &Recording) -> Self {
        Self {
            title: display_title(recording.title.as_deref()),
            artists: recording
                .artist_credit
                .iter()
                .map(|credit| credit.name.clone())
                .collect(),
            source_id: recording.id.clone(),
            rank,
            score: recording.score.map(|s| s as f32 / 100.0),
            album: recording
                .releases
                .first()
                .and_then(|release| release.title.clone()),
            length_ms: recording.length,
        }
    }

    /// Build a candidate from a fingerprint match.
    pub fn from_fingerprint(rank: usize, matched: &FingerprintMatch) -> Self {
        Self {
            title: display_title(matched.title.as_deref()),
            artists: matched.artists.clone(),
            source_id: matched.recording_id.clone(),
            rank,
            score: Some(matched.score),
            album: matched.album.clone(),
            length_ms: None,
        }
    }

    /// Artist names joined for display, or [`UNKNOWN`] when there are none.
    pub fn artist_display(&self) -> String {
        join_artist_names(self.artists.iter().map(String::as_str))
    }
}

/// Join credited artist names with `", "`, keeping their order. Blank names
/// are dropped; if nothing is left the result is [`UNKNOWN`].
pub fn join_artist_names<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names
        .into_iter()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        UNKNOWN.to_string()
    } else {
        names.join(", ")
    }
}

fn display_title(title: Option<&str>) -> String {
    match title.map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => UNKNOWN.to_string(),
    }
}
