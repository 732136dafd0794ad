// SPDX-License-Identifier: GPL-3.0-or-later

//! Audio fingerprint identification boundary.
//!
//! Fingerprint extraction and matching live outside this workspace. This
//! crate defines what the recognizer needs from such a service:
//! - [`AudioReference`]: where the captured audio sample lives
//! - [`FingerprintIdentifier`]: the pluggable identification capability
//! - [`UnimplementedIdentifier`]: the stand-in used when no service is wired

pub mod audio;
pub mod error;
pub mod identifier;

pub use audio::AudioReference;
pub use error::{FingerprintError, Result};
pub use identifier::{FingerprintIdentifier, FingerprintMatch, UnimplementedIdentifier};
