// SPDX-License-Identifier: GPL-3.0-or-later

//! Structured metadata search (first hint-based stage).

use crate::error::RecognitionError;
use crate::outcome::{MethodAttempt, RecognitionMethod};
use crate::query;
use crate::search::RecordingSearch;
use crate::strategy::{RecognitionRequest, RecognitionStrategy};
use async_trait::async_trait;
use nowplaying_musicbrainz::MusicBrainzClient;
use tracing::debug;

pub const DEFAULT_METADATA_LIMIT: u32 = 5;

/// Field-scoped conjunctive search: every hint must match its own field.
#[derive(Debug, Clone)]
pub struct MetadataStrategy {
    search: RecordingSearch,
}

impl MetadataStrategy {
    pub fn new(client: MusicBrainzClient) -> Self {
        Self {
            search: RecordingSearch::new(client, DEFAULT_METADATA_LIMIT),
        }
    }

    /// Cap on both the requested page size and the candidates kept.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.search.set_limit(limit);
        self
    }

    /// Require at least one match for the stage to succeed.
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
impl RecognitionStrategy for MetadataStrategy {
    fn method(&self) -> RecognitionMethod {
        RecognitionMethod::Metadata
    }

    async fn attempt(&self, request: &RecognitionRequest<'_>) -> MethodAttempt {
        if request.hints.is_empty() {
            debug!(target: "recognition", "metadata search skipped: no usable hints");
            return MethodAttempt::failed(self.method(), RecognitionError::MissingHints);
        }

        self.search
            .run(self.method(), query::structured(request.hints))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::Hints;
    use std::time::Duration;
    use wiremock::matchers::{any, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const USER_AGENT: &str = "NowPlayingTests/0.1 ( tests@example.com )";

    fn recordings(count: u32, n: usize) -> serde_json::Value {
        let recordings: Vec<_> = (0..n)
            .map(|i| {
                serde_json::json!({
                    "id": format!("rec-{i}"),
                    "title": format!("Stairway to Heaven #{i}"),
                    "score": 100 - i,
                    "artist-credit": [{"name": "Led Zeppelin"}]
                })
            })
            .collect();
        serde_json::json!({ "count": count, "offset": 0, "recordings": recordings })
    }

    fn client(server: &MockServer) -> MusicBrainzClient {
        MusicBrainzClient::builder(USER_AGENT)
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn sends_structured_query_with_identification() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recording"))
            .and(query_param("query", r#"artist:"Led Zeppelin" AND recording:"Stairway""#))
            .and(query_param("fmt", "json"))
            .and(query_param("limit", "5"))
            .and(header("User-Agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(recordings(2, 2)))
            .expect(1)
            .mount(&server)
            .await;

        let hints = Hints::new().with_artist("Led Zeppelin").with_track("Stairway");
        let attempt = MetadataStrategy::new(client(&server))
            .attempt(&RecognitionRequest::from_hints(&hints))
            .await;

        assert!(attempt.success);
        assert_eq!(attempt.method, RecognitionMethod::Metadata);
        assert_eq!(attempt.count, Some(2));
        let candidates = attempt.candidates.unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].rank, 0);
        assert_eq!(candidates[0].title, "Stairway to Heaven #0");
        assert_eq!(candidates[1].rank, 1);
    }

    #[tokio::test]
    async fn keeps_only_configured_number_of_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recording"))
            .and(query_param("limit", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recordings(40, 6)))
            .mount(&server)
            .await;

        let hints = Hints::new().with_album("Led Zeppelin IV");
        let attempt = MetadataStrategy::new(client(&server))
            .with_limit(3)
            .attempt(&RecognitionRequest::from_hints(&hints))
            .await;

        assert!(attempt.success);
        assert_eq!(attempt.count, Some(40));
        let titles: Vec<_> = attempt
            .candidates
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Stairway to Heaven #0",
                "Stairway to Heaven #1",
                "Stairway to Heaven #2"
            ]
        );
    }

    #[tokio::test]
    async fn sparse_artist_and_release_refs_still_succeed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recording"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 1,
                "recordings": [{
                    "title": "Stairway to Heaven",
                    "artist-credit": [{"name": "Led Zeppelin", "artist": {"name": "Led Zeppelin"}}],
                    "releases": [{"title": "Led Zeppelin IV"}]
                }]
            })))
            .mount(&server)
            .await;

        let hints = Hints::new().with_artist("Led Zeppelin").with_track("Stairway");
        let attempt = MetadataStrategy::new(client(&server))
            .attempt(&RecognitionRequest::from_hints(&hints))
            .await;

        assert!(attempt.success, "error: {:?}", attempt.error);
        let top = attempt.top_candidate().unwrap();
        assert_eq!(top.artist_display(), "Led Zeppelin");
        assert_eq!(top.album.as_deref(), Some("Led Zeppelin IV"));
    }

    #[tokio::test]
    async fn missing_hints_fail_without_network_call() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_json(recordings(1, 1)))
            .expect(0)
            .mount(&server)
            .await;

        let hints = Hints::new().with_artist("  ");
        let attempt = MetadataStrategy::new(client(&server))
            .attempt(&RecognitionRequest::from_hints(&hints))
            .await;

        assert!(!attempt.success);
        assert!(attempt.error.unwrap().starts_with("No metadata provided"));
        assert!(attempt.candidates.is_none());
    }

    #[tokio::test]
    async fn non_ok_status_becomes_failure_with_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let hints = Hints::new().with_track("Hotel California");
        let attempt = MetadataStrategy::new(client(&server))
            .attempt(&RecognitionRequest::from_hints(&hints))
            .await;

        assert!(!attempt.success);
        assert!(attempt.error.unwrap().contains("503"));
        assert_eq!(attempt.count, None);
    }

    #[tokio::test]
    async fn timeout_becomes_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(recordings(1, 1))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = MusicBrainzClient::builder(USER_AGENT)
            .base_url(server.uri())
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let hints = Hints::new().with_track("Hotel California");
        let attempt = MetadataStrategy::new(client)
            .attempt(&RecognitionRequest::from_hints(&hints))
            .await;

        assert!(!attempt.success);
        assert!(attempt.error.unwrap().contains("timed out"));
    }

    #[tokio::test]
    async fn zero_count_is_success_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recordings(0, 0)))
            .mount(&server)
            .await;

        let hints = Hints::new().with_artist("Nobody At All");
        let attempt = MetadataStrategy::new(client(&server))
            .attempt(&RecognitionRequest::from_hints(&hints))
            .await;

        assert!(attempt.success);
        assert_eq!(attempt.count, Some(0));
        assert_eq!(attempt.candidates, Some(vec![]));
    }

    #[tokio::test]
    async fn zero_count_fails_in_strict_mode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recordings(0, 0)))
            .mount(&server)
            .await;

        let hints = Hints::new().with_artist("Nobody At All");
        let strategy = MetadataStrategy::new(client(&server)).with_strict(true);
        assert!(strategy.is_strict());
        let attempt = strategy
            .attempt(&RecognitionRequest::from_hints(&hints))
            .await;

        assert!(!attempt.success);
        assert_eq!(attempt.count, Some(0));
        assert_eq!(attempt.error.as_deref(), Some("No matches found"));
    }

    #[tokio::test]
    async fn repeated_attempts_are_identical() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recordings(2, 2)))
            .mount(&server)
            .await;

        let strategy = MetadataStrategy::new(client(&server));
        let hints = Hints::new().with_artist("Led Zeppelin").with_track("Stairway");
        let request = RecognitionRequest::from_hints(&hints);

        let first = strategy.attempt(&request).await;
        let second = strategy.attempt(&request).await;
        assert_eq!(first, second);
    }

    #[test]
    fn limit_is_clamped_to_search_bounds() {
        let client = MusicBrainzClient::builder(USER_AGENT).build().unwrap();
        assert_eq!(MetadataStrategy::new(client.clone()).limit(), DEFAULT_METADATA_LIMIT);
        assert_eq!(MetadataStrategy::new(client.clone()).with_limit(0).limit(), 1);
        assert_eq!(MetadataStrategy::new(client).with_limit(500).limit(), 100);
    }
}
