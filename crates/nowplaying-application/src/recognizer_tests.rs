// SPDX-License-Identifier: GPL-3.0-or-later

//! Precedence tests for the recognizer, using scripted stages in place of
//! network-backed ones.

#[cfg(test)]
mod precedence_tests {
    use crate::outcome::{MethodAttempt, RecognitionMethod};
    use crate::strategy::{RecognitionRequest, RecognitionStrategy};
    use crate::{Hints, Recognizer};
    use async_trait::async_trait;
    use nowplaying_fingerprint::AudioReference;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct ScriptedStage {
        method: RecognitionMethod,
        succeeds: bool,
        needs_audio: bool,
        calls: AtomicUsize,
    }

    impl ScriptedStage {
        fn new(method: RecognitionMethod, succeeds: bool) -> Arc<Self> {
            Arc::new(Self {
                method,
                succeeds,
                needs_audio: method == RecognitionMethod::Fingerprint,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RecognitionStrategy for ScriptedStage {
        fn method(&self) -> RecognitionMethod {
            self.method
        }

        fn applies_to(&self, request: &RecognitionRequest<'_>) -> bool {
            !self.needs_audio || request.audio.is_some()
        }

        async fn attempt(&self, _request: &RecognitionRequest<'_>) -> MethodAttempt {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.succeeds {
                MethodAttempt::succeeded(self.method, 1, vec![])
            } else {
                MethodAttempt::failed(self.method, "scripted failure")
            }
        }
    }

    struct Pipeline {
        fingerprint: Arc<ScriptedStage>,
        metadata: Arc<ScriptedStage>,
        heuristics: Arc<ScriptedStage>,
        recognizer: Recognizer,
    }

    fn pipeline(fingerprint_ok: bool, metadata_ok: bool, heuristics_ok: bool) -> Pipeline {
        let fingerprint = ScriptedStage::new(RecognitionMethod::Fingerprint, fingerprint_ok);
        let metadata = ScriptedStage::new(RecognitionMethod::Metadata, metadata_ok);
        let heuristics = ScriptedStage::new(RecognitionMethod::Heuristics, heuristics_ok);
        let recognizer = Recognizer::new(vec![
            fingerprint.clone() as Arc<dyn RecognitionStrategy>,
            metadata.clone() as Arc<dyn RecognitionStrategy>,
            heuristics.clone() as Arc<dyn RecognitionStrategy>,
        ]);
        Pipeline {
            fingerprint,
            metadata,
            heuristics,
            recognizer,
        }
    }

    fn hints() -> Hints {
        Hints::new().with_artist("Led Zeppelin")
    }

    #[tokio::test]
    async fn fingerprint_success_short_circuits() {
        let p = pipeline(true, true, true);
        let audio = AudioReference::new("sample.wav");

        let outcome = p.recognizer.recognize(Some(&audio), &hints()).await;

        assert_eq!(outcome.methods_tried(), &[RecognitionMethod::Fingerprint]);
        assert_eq!(outcome.best_match().unwrap().method, RecognitionMethod::Fingerprint);
        assert_eq!(p.metadata.calls(), 0);
        assert_eq!(p.heuristics.calls(), 0);
    }

    #[tokio::test]
    async fn no_audio_skips_fingerprint_without_trace_entry() {
        let p = pipeline(true, true, true);

        let outcome = p.recognizer.recognize(None, &hints()).await;

        assert_eq!(p.fingerprint.calls(), 0);
        assert_eq!(outcome.methods_tried(), &[RecognitionMethod::Metadata]);
        assert_eq!(outcome.best_match().unwrap().method, RecognitionMethod::Metadata);
    }

    #[tokio::test]
    async fn falls_back_in_order() {
        let p = pipeline(false, false, true);
        let audio = AudioReference::new("sample.wav");

        let outcome = p.recognizer.recognize(Some(&audio), &hints()).await;

        assert_eq!(
            outcome.methods_tried(),
            &[
                RecognitionMethod::Fingerprint,
                RecognitionMethod::Metadata,
                RecognitionMethod::Heuristics
            ]
        );
        assert_eq!(outcome.best_match().unwrap().method, RecognitionMethod::Heuristics);
    }

    #[tokio::test]
    async fn metadata_success_skips_heuristics() {
        let p = pipeline(false, true, true);

        let outcome = p.recognizer.recognize(None, &hints()).await;

        assert_eq!(outcome.methods_tried(), &[RecognitionMethod::Metadata]);
        assert_eq!(p.heuristics.calls(), 0);
    }

    #[tokio::test]
    async fn exhaustion_keeps_full_trace_without_best_match() {
        let p = pipeline(false, false, false);
        let audio = AudioReference::new("sample.wav");

        let outcome = p.recognizer.recognize(Some(&audio), &hints()).await;

        assert!(outcome.best_match().is_none());
        assert_eq!(outcome.attempts().len(), 3);
        assert!(outcome.attempts().iter().all(|a| !a.success));
    }

    #[tokio::test]
    async fn trace_invariants_hold_for_every_combination() {
        for mask in 0..8u8 {
            for with_audio in [false, true] {
                let p = pipeline(mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
                let audio = AudioReference::new("sample.wav");
                let audio = with_audio.then_some(&audio);

                let outcome = p.recognizer.recognize(audio, &hints()).await;
                let invoked = p.fingerprint.calls() + p.metadata.calls() + p.heuristics.calls();

                assert!((1..=3).contains(&outcome.methods_tried().len()));
                assert_eq!(outcome.methods_tried().len(), invoked);
                assert_eq!(outcome.attempts().len(), invoked);

                // Metadata is never bypassed when fingerprinting did not succeed.
                if outcome.attempt(RecognitionMethod::Fingerprint).map_or(true, |a| !a.success) {
                    assert_eq!(p.metadata.calls(), 1);
                }

                // Nothing follows a success, and the best match is that success.
                if let Some(best) = outcome.best_match() {
                    let last = outcome.attempts().last().unwrap();
                    assert!(last.success);
                    assert_eq!(&best.data, last);
                    assert_eq!(outcome.attempts().iter().filter(|a| a.success).count(), 1);
                } else {
                    assert!(outcome.attempts().iter().all(|a| !a.success));
                }
            }
        }
    }

    #[tokio::test]
    async fn custom_order_is_respected() {
        let heuristics = ScriptedStage::new(RecognitionMethod::Heuristics, false);
        let metadata = ScriptedStage::new(RecognitionMethod::Metadata, false);
        let recognizer = Recognizer::new(vec![
            heuristics.clone() as Arc<dyn RecognitionStrategy>,
            metadata.clone() as Arc<dyn RecognitionStrategy>,
        ]);

        assert_eq!(
            recognizer.methods(),
            vec![RecognitionMethod::Heuristics, RecognitionMethod::Metadata]
        );

        let outcome = recognizer.recognize(None, &hints()).await;
        assert_eq!(
            outcome.methods_tried(),
            &[RecognitionMethod::Heuristics, RecognitionMethod::Metadata]
        );
    }

    #[tokio::test]
    async fn shared_recognizer_serves_concurrent_callers() {
        let p = pipeline(false, false, true);
        let recognizer = Arc::new(p.recognizer);

        let mut handles = Vec::new();
        for _ in 0..4 {
            let recognizer = Arc::clone(&recognizer);
            handles.push(tokio::spawn(async move {
                recognizer.recognize(None, &hints()).await
            }));
        }

        for handle in handles {
            let outcome = handle.await.unwrap();
            assert_eq!(
                outcome.methods_tried(),
                &[RecognitionMethod::Metadata, RecognitionMethod::Heuristics]
            );
        }
        assert_eq!(p.metadata.calls(), 4);
    }
}
