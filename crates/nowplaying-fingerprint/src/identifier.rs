// SPDX-License-Identifier: GPL-3.0-or-later

use crate::audio::AudioReference;
use crate::error::{FingerprintError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Recording identified from an audio fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FingerprintMatch {
    /// MusicBrainz recording ID, when the service links one.
    pub recording_id: Option<String>,
    pub title: Option<String>,
    /// Artist names in credit order.
    #[serde(default)]
    pub artists: Vec<String>,
    /// Title of a release the recording appears on.
    #[serde(default)]
    pub album: Option<String>,
    /// Match score (0-1), higher is more confident.
    pub score: f32,
}

/// Audio fingerprint identification service.
///
/// Implementations return matches ordered best first. An empty list means
/// the service answered but knows no recording for the sample.
#[async_trait]
pub trait FingerprintIdentifier: Send + Sync {
    async fn identify(&self, audio: &AudioReference) -> Result<Vec<FingerprintMatch>>;
}

/// Identifier used when no fingerprint service is configured; it never
/// produces a match.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnimplementedIdentifier;

#[async_trait]
impl FingerprintIdentifier for UnimplementedIdentifier {
    async fn identify(&self, audio: &AudioReference) -> Result<Vec<FingerprintMatch>> {
        debug!(target: "fingerprint", audio = %audio, "no fingerprint service configured");
        Err(FingerprintError::NotImplemented)
    }
}
