// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FingerprintError>;

#[derive(Debug, Error)]
pub enum FingerprintError {
    #[error("Audio fingerprinting is not implemented")]
    NotImplemented,

    #[error("Audio reference cannot be resolved: {0}")]
    Unresolvable(String),

    #[error("Fingerprint identification failed: {0}")]
    Identification(String),
}
