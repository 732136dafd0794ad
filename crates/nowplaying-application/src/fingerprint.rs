// SPDX-License-Identifier: GPL-3.0-or-later

//! Audio fingerprint stage (highest confidence, runs first).

use crate::candidate::Candidate;
use crate::error::RecognitionError;
use crate::outcome::{MethodAttempt, RecognitionMethod};
use crate::strategy::{RecognitionRequest, RecognitionStrategy};
use async_trait::async_trait;
use nowplaying_config::MAX_SEARCH_LIMIT;
use nowplaying_fingerprint::{FingerprintError, FingerprintIdentifier};
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_FINGERPRINT_LIMIT: u32 = 5;

/// Adapts a [`FingerprintIdentifier`] to the recognition pipeline.
///
/// The stage only applies when the request carries an audio reference that
/// resolves to a readable file.
#[derive(Clone)]
pub struct FingerprintStrategy {
    identifier: Arc<dyn FingerprintIdentifier>,
    limit: u32,
}

impl FingerprintStrategy {
    pub fn new(identifier: Arc<dyn FingerprintIdentifier>) -> Self {
        Self {
            identifier,
            limit: DEFAULT_FINGERPRINT_LIMIT,
        }
    }

    /// Cap on candidates kept from one identification, clamped to `1..=100`.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.clamp(1, MAX_SEARCH_LIMIT);
        self
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

#[async_trait]
impl RecognitionStrategy for FingerprintStrategy {
    fn method(&self) -> RecognitionMethod {
        RecognitionMethod::Fingerprint
    }

    fn applies_to(&self, request: &RecognitionRequest<'_>) -> bool {
        request.audio.is_some_and(|audio| audio.is_resolvable())
    }

    async fn attempt(&self, request: &RecognitionRequest<'_>) -> MethodAttempt {
        let Some(audio) = request.audio else {
            return MethodAttempt::failed(
                self.method(),
                RecognitionError::from(FingerprintError::Unresolvable(
                    "no audio reference".to_string(),
                )),
            );
        };

        match self.identifier.identify(audio).await {
            Ok(matches) if matches.is_empty() => {
                debug!(target: "recognition", audio = %audio, "fingerprint service found no match");
                MethodAttempt::failed(self.method(), RecognitionError::NoFingerprintMatches)
            }
            Ok(matches) => {
                let candidates: Vec<Candidate> = matches
                    .iter()
                    .take(self.limit as usize)
                    .enumerate()
                    .map(|(rank, matched)| Candidate::from_fingerprint(rank, matched))
                    .collect();
                MethodAttempt::succeeded(self.method(), matches.len() as u32, candidates)
            }
            Err(e) => {
                debug!(
                    target: "recognition",
                    audio = %audio,
                    error = %e,
                    "fingerprint identification failed"
                );
                MethodAttempt::failed(self.method(), RecognitionError::from(e))
            }
        }
    }
}
