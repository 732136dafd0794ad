// SPDX-License-Identifier: GPL-3.0-or-later

use crate::hints::Hints;
use crate::outcome::{MethodAttempt, RecognitionMethod};
use async_trait::async_trait;
use nowplaying_fingerprint::AudioReference;

/// Evidence available for one recognition run.
#[derive(Debug, Clone, Copy)]
pub struct RecognitionRequest<'a> {
    pub audio: Option<&'a AudioReference>,
    pub hints: &'a Hints,
}

impl<'a> RecognitionRequest<'a> {
    pub fn new(audio: Option<&'a AudioReference>, hints: &'a Hints) -> Self {
        Self { audio, hints }
    }

    pub fn from_hints(hints: &'a Hints) -> Self {
        Self { audio: None, hints }
    }
}

/// One identification method the [`Recognizer`](crate::Recognizer) can fall back through.
///
/// `attempt` never fails: every problem is reported as an unsuccessful
/// [`MethodAttempt`] carrying a reason.
#[async_trait]
pub trait RecognitionStrategy: Send + Sync {
    fn method(&self) -> RecognitionMethod;

    /// Whether the stage should run at all for this request. A stage that
    /// does not apply is skipped without leaving a trace entry.
    fn applies_to(&self, _request: &RecognitionRequest<'_>) -> bool {
        true
    }

    async fn attempt(&self, request: &RecognitionRequest<'_>) -> MethodAttempt;
}
