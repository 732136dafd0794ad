// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MusicBrainzError>;

#[derive(Debug, Error)]
pub enum MusicBrainzError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response from MusicBrainz API: {0}")]
    InvalidResponse(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl MusicBrainzError {
    /// HTTP status code carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::RequestFailed(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
