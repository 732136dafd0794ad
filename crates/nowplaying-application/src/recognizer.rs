// SPDX-License-Identifier: GPL-3.0-or-later

//! Recognition orchestration with enforced precedence.
//!
//! The standard pipeline is:
//! 1. **Fingerprint**: only when a resolvable audio reference is given
//! 2. **Metadata**: structured search on the hints
//! 3. **Heuristics**: relaxed search on the same hints
//!
//! Stages run one at a time in that order and the run stops at the first
//! success. Failures never escape [`Recognizer::recognize`]; they are
//! recorded in the returned trace instead.
//!
//! ## Usage
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use nowplaying_application::{Hints, Recognizer};
//! # use nowplaying_fingerprint::UnimplementedIdentifier;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = nowplaying_config::load(None)?;
//! let recognizer = Recognizer::from_config(&config, Arc::new(UnimplementedIdentifier))?;
//!
//! let hints = Hints::new().with_artist("Led Zeppelin").with_track("Stairway");
//! let outcome = recognizer.recognize(None, &hints).await;
//!
//! if let Some(best) = outcome.best_match() {
//!     println!("matched by {}", best.method);
//! }
//! # Ok(())
//! # }
//! ```

use crate::fingerprint::FingerprintStrategy;
use crate::heuristics::HeuristicStrategy;
use crate::hints::Hints;
use crate::metadata::MetadataStrategy;
use crate::outcome::{RecognitionMethod, RecognitionOutcome};
use crate::strategy::{RecognitionRequest, RecognitionStrategy};
use nowplaying_config::{AppConfig, RecognitionConfig};
use nowplaying_fingerprint::{AudioReference, FingerprintIdentifier};
use nowplaying_musicbrainz::{MusicBrainzClient, MusicBrainzError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Runs recognition strategies in priority order until one succeeds.
///
/// Holds only immutable strategy configuration; concurrent callers can
/// share one instance and each call gets its own outcome.
#[derive(Clone)]
pub struct Recognizer {
    strategies: Vec<Arc<dyn RecognitionStrategy>>,
}

impl Recognizer {
    /// Create a recognizer over an explicit strategy order.
    pub fn new(strategies: Vec<Arc<dyn RecognitionStrategy>>) -> Self {
        Self { strategies }
    }

    /// Fingerprint, then metadata, then heuristics, sharing one MusicBrainz client.
    pub fn standard(
        client: MusicBrainzClient,
        identifier: Arc<dyn FingerprintIdentifier>,
        settings: &RecognitionConfig,
    ) -> Self {
        let metadata = MetadataStrategy::new(client.clone())
            .with_limit(settings.metadata_limit)
            .with_strict(settings.strict);
        let heuristics = HeuristicStrategy::new(client)
            .with_limit(settings.heuristics_limit)
            .with_strict(settings.strict);

        let fingerprint =
            FingerprintStrategy::new(identifier).with_limit(settings.fingerprint_limit);

        let strategies: Vec<Arc<dyn RecognitionStrategy>> = vec![
            Arc::new(fingerprint),
            Arc::new(metadata),
            Arc::new(heuristics),
        ];
        Self::new(strategies)
    }

    /// Build the standard pipeline from loaded configuration.
    pub fn from_config(
        config: &AppConfig,
        identifier: Arc<dyn FingerprintIdentifier>,
    ) -> Result<Self, MusicBrainzError> {
        let client = MusicBrainzClient::builder(config.musicbrainz.user_agent.clone())
            .base_url(config.musicbrainz.base_url.clone())
            .timeout(Duration::from_secs(config.musicbrainz.timeout_secs))
            .build()?;

        Ok(Self::standard(client, identifier, &config.recognition))
    }

    /// Configured stage order.
    pub fn methods(&self) -> Vec<RecognitionMethod> {
        self.strategies.iter().map(|s| s.method()).collect()
    }

    /// Identify music from an optional audio sample and textual hints.
    ///
    /// Always returns the full trace; check
    /// [`RecognitionOutcome::best_match`] for the decision.
    pub async fn recognize(
        &self,
        audio: Option<&AudioReference>,
        hints: &Hints,
    ) -> RecognitionOutcome {
        let request = RecognitionRequest::new(audio, hints);
        let mut outcome = RecognitionOutcome::new();

        info!(
            target: "recognition",
            audio = ?audio.map(|a| a.path()),
            artist = hints.artist.as_deref(),
            album = hints.album.as_deref(),
            track = hints.track.as_deref(),
            "starting recognition"
        );

        for strategy in &self.strategies {
            let method = strategy.method();

            if !strategy.applies_to(&request) {
                debug!(target: "recognition", method = %method, "stage not applicable, skipping");
                continue;
            }

            debug!(target: "recognition", method = %method, "attempting stage");
            let attempt = strategy.attempt(&request).await;

            if !attempt.success {
                debug!(
                    target: "recognition",
                    method = %method,
                    error = attempt.error.as_deref().unwrap_or_default(),
                    "stage failed, falling back"
                );
            }

            if outcome.record(attempt) {
                info!(
                    target: "recognition",
                    method = %method,
                    count = outcome.best_match().and_then(|m| m.data.count),
                    "recognition succeeded"
                );
                return outcome;
            }
        }

        warn!(
            target: "recognition",
            methods_tried = outcome.methods_tried().len(),
            "all recognition stages exhausted without success"
        );

        outcome
    }
}
