// SPDX-License-Identifier: GPL-3.0-or-later

use crate::candidate::Candidate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Identification method behind a recognition stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionMethod {
    /// Audio fingerprint lookup
    Fingerprint,
    /// Structured search on artist/album/track fields
    Metadata,
    /// Relaxed search over the bare hint phrases
    Heuristics,
}

impl RecognitionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecognitionMethod::Fingerprint => "fingerprint",
            RecognitionMethod::Metadata => "metadata",
            RecognitionMethod::Heuristics => "heuristics",
        }
    }
}

impl fmt::Display for RecognitionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running one recognition stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodAttempt {
    pub method: RecognitionMethod,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Total matches reported by the source, which can exceed the candidates kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
}

impl MethodAttempt {
    pub fn succeeded(method: RecognitionMethod, count: u32, candidates: Vec<Candidate>) -> Self {
        Self {
            method,
            success: true,
            error: None,
            count: Some(count),
            candidates: Some(candidates),
        }
    }

    pub fn failed(method: RecognitionMethod, reason: impl fmt::Display) -> Self {
        Self {
            method,
            success: false,
            error: Some(reason.to_string()),
            count: None,
            candidates: None,
        }
    }

    /// Highest ranked candidate, if the stage kept any.
    pub fn top_candidate(&self) -> Option<&Candidate> {
        self.candidates.as_ref().and_then(|c| c.first())
    }
}

/// The attempt that ended a recognition run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestMatch {
    pub method: RecognitionMethod,
    pub data: MethodAttempt,
}

/// Trace of one recognition run: every stage that ran, in order, and the
/// successful one if any.
///
/// The trace only grows through [`RecognitionOutcome::record`], and stops
/// accepting attempts once a success has been recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecognitionOutcome {
    methods_tried: Vec<RecognitionMethod>,
    attempts: Vec<MethodAttempt>,
    best_match: Option<BestMatch>,
}

impl RecognitionOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attempt. Returns `true` when the outcome is now terminal.
    pub(crate) fn record(&mut self, attempt: MethodAttempt) -> bool {
        if self.is_match() {
            warn!(
                target: "recognition",
                method = %attempt.method,
                "attempt recorded after a successful stage was ignored"
            );
            return true;
        }

        self.methods_tried.push(attempt.method);
        if attempt.success {
            self.best_match = Some(BestMatch {
                method: attempt.method,
                data: attempt.clone(),
            });
        }
        self.attempts.push(attempt);
        self.is_match()
    }

    pub fn methods_tried(&self) -> &[RecognitionMethod] {
        &self.methods_tried
    }

    pub fn attempts(&self) -> &[MethodAttempt] {
        &self.attempts
    }

    pub fn attempt(&self, method: RecognitionMethod) -> Option<&MethodAttempt> {
        self.attempts.iter().find(|a| a.method == method)
    }

    pub fn best_match(&self) -> Option<&BestMatch> {
        self.best_match.as_ref()
    }

    pub fn is_match(&self) -> bool {
        self.best_match.is_some()
    }

    /// Top candidate of the best match.
    pub fn top_candidate(&self) -> Option<&Candidate> {
        self.best_match.as_ref().and_then(|m| m.data.top_candidate())
    }
}
