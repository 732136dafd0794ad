// SPDX-License-Identifier: GPL-3.0-or-later

//! MusicBrainz API client for recording search.
//!
//! This crate wraps the `/ws/2/recording` search endpoint: it sends a
//! Lucene-style query with the caller's client identification and maps
//! transport problems (non-success status, timeouts, undecodable bodies)
//! onto [`MusicBrainzError`].

pub mod client;
pub mod error;
pub mod models;

pub use client::{MusicBrainzClient, MusicBrainzClientBuilder};
pub use error::{MusicBrainzError, Result};
pub use models::{
    ArtistCredit, ArtistRef, Recording, RecordingSearchResponse, ReleaseRef, SearchQuery,
};
