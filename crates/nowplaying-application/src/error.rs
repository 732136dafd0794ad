// SPDX-License-Identifier: GPL-3.0-or-later

use nowplaying_fingerprint::FingerprintError;
use nowplaying_musicbrainz::MusicBrainzError;
use thiserror::Error;

/// Why a recognition stage failed. The `Display` text is what ends up in
/// the trace as the attempt's error reason.
#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("No metadata provided: at least one of artist, album or track is required")]
    MissingHints,

    #[error("{0}")]
    Transport(#[from] MusicBrainzError),

    #[error("No matches found")]
    NoMatches,

    #[error("No fingerprint matches")]
    NoFingerprintMatches,

    #[error("{0}")]
    Fingerprint(#[from] FingerprintError),
}
