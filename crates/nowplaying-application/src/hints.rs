// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// Which hint a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintField {
    Artist,
    Album,
    Track,
}

impl HintField {
    /// Field name in the MusicBrainz recording search index.
    pub fn search_field(&self) -> &'static str {
        match self {
            HintField::Artist => "artist",
            HintField::Album => "release",
            HintField::Track => "recording",
        }
    }
}

/// Partial, user-supplied identifying text for a piece of music.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hints {
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub track: Option<String>,
}

impl Hints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn with_track(mut self, track: impl Into<String>) -> Self {
        self.track = Some(track.into());
        self
    }

    /// Usable values in artist, album, track order. Values are trimmed and
    /// blank ones are skipped.
    pub fn values(&self) -> impl Iterator<Item = (HintField, &str)> {
        [
            (HintField::Artist, self.artist.as_deref()),
            (HintField::Album, self.album.as_deref()),
            (HintField::Track, self.track.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            let value = value?.trim();
            (!value.is_empty()).then_some((field, value))
        })
    }

    /// True when no hint carries a usable value.
    pub fn is_empty(&self) -> bool {
        self.values().next().is_none()
    }
}
