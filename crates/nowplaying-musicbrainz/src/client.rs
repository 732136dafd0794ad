// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{MusicBrainzError, Result};
use crate::models::{RecordingSearchResponse, SearchQuery};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

const MUSICBRAINZ_API_BASE: &str = "https://musicbrainz.org/ws/2";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// MusicBrainz API client.
///
/// Holds only immutable settings, so one instance can be cloned and shared
/// between concurrent callers.
#[derive(Debug, Clone)]
pub struct MusicBrainzClient {
    client: Client,
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl MusicBrainzClient {
    /// Create a client builder. MusicBrainz rejects anonymous clients, so
    /// the identification string is mandatory.
    pub fn builder(user_agent: impl Into<String>) -> MusicBrainzClientBuilder {
        MusicBrainzClientBuilder::new(user_agent)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Search for recordings with a Lucene-style query.
    ///
    /// # Example
    /// ```no_run
    /// # use nowplaying_musicbrainz::{MusicBrainzClient, SearchQuery};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = MusicBrainzClient::builder("MyApp/1.0 ( me@example.com )").build()?;
    /// let query = SearchQuery::new(r#"artist:"Radiohead" AND recording:"Airbag""#).limit(5);
    /// let response = client.search_recordings(query).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_recordings(&self, query: SearchQuery) -> Result<RecordingSearchResponse> {
        let mut url = Url::parse(&format!("{}/recording", self.base_url))?;

        url.query_pairs_mut()
            .append_pair("query", &query.query)
            .append_pair("fmt", "json");

        if let Some(limit) = query.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }

        if let Some(offset) = query.offset {
            url.query_pairs_mut()
                .append_pair("offset", &offset.to_string());
        }

        self.get(url.as_str()).await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        trace!(target: "musicbrainz", "GET {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        debug!(target: "musicbrainz", "response status: {}", status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MusicBrainzError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        trace!(target: "musicbrainz", "response body: {}", body);

        serde_json::from_str(&body).map_err(|e| {
            MusicBrainzError::InvalidResponse(format!("Failed to parse response: {}", e))
        })
    }

    fn classify(&self, error: reqwest::Error) -> MusicBrainzError {
        if error.is_timeout() {
            MusicBrainzError::Timeout(self.timeout)
        } else {
            MusicBrainzError::RequestFailed(error)
        }
    }
}

/// Builder for configuring a MusicBrainz client.
#[derive(Debug)]
pub struct MusicBrainzClientBuilder {
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl MusicBrainzClientBuilder {
    fn new(user_agent: impl Into<String>) -> Self {
        Self {
            base_url: MUSICBRAINZ_API_BASE.to_string(),
            user_agent: user_agent.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the bound for one request round trip.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the MusicBrainz client.
    pub fn build(self) -> Result<MusicBrainzClient> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()?;

        Ok(MusicBrainzClient {
            client,
            base_url: self.base_url,
            user_agent: self.user_agent,
            timeout: self.timeout,
        })
    }
}
