// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::Path;

use anyhow::{ensure, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Largest page size the MusicBrainz search endpoint accepts.
pub const MAX_SEARCH_LIMIT: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicBrainzConfig {
    pub base_url: String,
    /// Sent as the `User-Agent` header; MusicBrainz asks for an application
    /// name, version and contact.
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for MusicBrainzConfig {
    fn default() -> Self {
        Self {
            base_url: "https://musicbrainz.org/ws/2".to_string(),
            user_agent: concat!(
                "nowplaying/",
                env!("CARGO_PKG_VERSION"),
                " ( https://github.com/nowplaying/nowplaying )"
            )
            .to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionConfig {
    /// Candidate cap for fingerprint matches.
    pub fingerprint_limit: u32,
    /// Result cap for the structured metadata search.
    pub metadata_limit: u32,
    /// Result cap for the relaxed heuristic search.
    pub heuristics_limit: u32,
    /// Require at least one match before a search stage counts as a success.
    pub strict: bool,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            fingerprint_limit: 5,
            metadata_limit: 5,
            heuristics_limit: 10,
            strict: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub musicbrainz: MusicBrainzConfig,
    pub recognition: RecognitionConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.musicbrainz.user_agent.trim().is_empty(),
            "musicbrainz.user_agent must not be empty"
        );
        ensure!(
            self.musicbrainz.timeout_secs > 0,
            "musicbrainz.timeout_secs must be greater than zero"
        );
        for (name, limit) in [
            ("recognition.fingerprint_limit", self.recognition.fingerprint_limit),
            ("recognition.metadata_limit", self.recognition.metadata_limit),
            ("recognition.heuristics_limit", self.recognition.heuristics_limit),
        ] {
            ensure!(
                (1..=MAX_SEARCH_LIMIT).contains(&limit),
                "{name} must be between 1 and {MAX_SEARCH_LIMIT}, got {limit}"
            );
        }
        Ok(())
    }
}

/// Load configuration from defaults, optional TOML file, and environment overrides (prefix: NOWPLAYING_).
pub fn load(config_path: Option<&Path>) -> Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("NOWPLAYING_").split("__"));

    let config: AppConfig = figment.extract()?;
    config.validate()?;
    info!(target: "config", "configuration loaded");
    Ok(config)
}
