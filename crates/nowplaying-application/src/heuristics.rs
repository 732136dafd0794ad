// SPDX-License-Identifier: GPL-3.0-or-later

//! Relaxed phrase search (last hint-based stage).
//!
//! Any single hint matching anywhere is enough, so this casts a wider net
//! than [`MetadataStrategy`](crate::MetadataStrategy) at lower precision.
//! It has no ordering dependency of its own; the recognizer runs it after
//! the structured search.

use crate::error::RecognitionError;
use crate::outcome::{MethodAttempt, RecognitionMethod};
use crate::query;
use crate::search::RecordingSearch;
use crate::strategy::{RecognitionRequest, RecognitionStrategy};
use async_trait::async_trait;
use nowplaying_musicbrainz::MusicBrainzClient;
use tracing::debug;

pub const DEFAULT_HEURISTICS_LIMIT: u32 = 10;

#[derive(Debug, Clone)]
pub struct HeuristicStrategy {
    search: RecordingSearch,
}

impl HeuristicStrategy {
    pub fn new(client: MusicBrainzClient) -> Self {
        Self {
            search: RecordingSearch::new(client, DEFAULT_HEURISTICS_LIMIT),
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.search.set_limit(limit);
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.search.set_strict(strict);
        self
    }

    pub fn limit(&self) -> u32 {
        self.search.limit()
    }

    pub fn is_strict(&self) -> bool {
        self.search.strict()
    }
}

#[async_trait]
impl RecognitionStrategy for HeuristicStrategy {
    fn method(&self) -> RecognitionMethod {
        RecognitionMethod::Heuristics
    }

    async fn attempt(&self, request: &RecognitionRequest<'_>) -> MethodAttempt {
        if request.hints.is_empty() {
            debug!(target: "recognition", "heuristic search skipped: no usable hints");
            return MethodAttempt::failed(self.method(), RecognitionError::MissingHints);
        }

        self.search
            .run(self.method(), query::relaxed(request.hints))
            .await
    }
}
