// SPDX-License-Identifier: GPL-3.0-or-later

//! Hybrid music recognition.
//!
//! A [`Recognizer`] runs an ordered list of [`RecognitionStrategy`]
//! implementations and stops at the first one that succeeds:
//! 1. **Fingerprint**: audio sample lookup, only when a readable sample is given
//! 2. **Metadata**: structured MusicBrainz search built from the hints
//! 3. **Heuristics**: relaxed MusicBrainz search over the same hints
//!
//! Every stage that runs leaves a [`MethodAttempt`] in the returned
//! [`RecognitionOutcome`], so callers always get the full trace, match or
//! not.

pub mod candidate;
pub mod error;
pub mod fingerprint;
pub mod heuristics;
pub mod hints;
pub mod metadata;
pub mod outcome;
pub mod query;
pub mod recognizer;
#[cfg(test)]
mod recognizer_tests;
mod search;
pub mod strategy;

pub use candidate::{join_artist_names, Candidate, UNKNOWN};
pub use error::RecognitionError;
pub use fingerprint::{FingerprintStrategy, DEFAULT_FINGERPRINT_LIMIT};
pub use heuristics::{HeuristicStrategy, DEFAULT_HEURISTICS_LIMIT};
pub use hints::{HintField, Hints};
pub use metadata::{MetadataStrategy, DEFAULT_METADATA_LIMIT};
pub use outcome::{BestMatch, MethodAttempt, RecognitionMethod, RecognitionOutcome};
pub use recognizer::Recognizer;
pub use strategy::{RecognitionRequest, RecognitionStrategy};
