// SPDX-License-Identifier: GPL-3.0-or-later

//! Recording search shared by the metadata and heuristic stages.

use crate::candidate::Candidate;
use crate::error::RecognitionError;
use crate::outcome::{MethodAttempt, RecognitionMethod};
use nowplaying_config::MAX_SEARCH_LIMIT;
use nowplaying_musicbrainz::{MusicBrainzClient, SearchQuery};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub(crate) struct RecordingSearch {
    client: MusicBrainzClient,
    limit: u32,
    strict: bool,
}

impl RecordingSearch {
    pub(crate) fn new(client: MusicBrainzClient, limit: u32) -> Self {
        Self {
            client,
            limit: clamp_limit(limit),
            strict: false,
        }
    }

    pub(crate) fn limit(&self) -> u32 {
        self.limit
    }

    pub(crate) fn set_limit(&mut self, limit: u32) {
        self.limit = clamp_limit(limit);
    }

    pub(crate) fn strict(&self) -> bool {
        self.strict
    }

    pub(crate) fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Run one search round trip and fold the response into an attempt.
    ///
    /// Outside strict mode any successful response counts as a success,
    /// including one reporting zero matches.
    pub(crate) async fn run(&self, method: RecognitionMethod, query: String) -> MethodAttempt {
        debug!(
            target: "recognition",
            method = %method,
            query = %query,
            limit = self.limit,
            "searching recordings"
        );

        let response = match self
            .client
            .search_recordings(SearchQuery::new(query).limit(self.limit))
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    target: "recognition",
                    method = %method,
                    status = ?e.status(),
                    error = %e,
                    "recording search failed"
                );
                return MethodAttempt::failed(method, RecognitionError::from(e));
            }
        };

        if self.strict && response.count == 0 {
            debug!(
                target: "recognition",
                method = %method,
                "strict mode: empty result is a failure"
            );
            return MethodAttempt {
                count: Some(0),
                ..MethodAttempt::failed(method, RecognitionError::NoMatches)
            };
        }

        let candidates: Vec<Candidate> = response
            .recordings
            .iter()
            .take(self.limit as usize)
            .enumerate()
            .map(|(rank, recording)| Candidate::from_recording(rank, recording))
            .collect();

        debug!(
            target: "recognition",
            method = %method,
            count = response.count,
            kept = candidates.len(),
            "recording search succeeded"
        );

        MethodAttempt::succeeded(method, response.count, candidates)
    }
}

fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_SEARCH_LIMIT)
}
