// src/verifier/dispatcher.rs
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use super::client::VerifierBackend;
use super::stats::compute_stats;
use super::types::{Stats, Verdict, VerificationOutcome, VerifyMode};
use crate::models::Result;

/// Snapshot receiver invoked after every chunk: (processed, total, stats).
/// Fired once up front with processed = 0 and all-zero stats.
pub type ProgressCallback = Box<dyn Fn(usize, usize, &Stats) + Send + Sync>;

pub struct BatchDispatcher {
    backend: Box<dyn VerifierBackend>,
    chunk_size: usize,
    chunk_delay_ms: u64,
}

impl BatchDispatcher {
    pub fn new(backend: Box<dyn VerifierBackend>, chunk_size: usize, chunk_delay_ms: u64) -> Self {
        Self {
            backend,
            chunk_size,
            chunk_delay_ms,
        }
    }

    /// Sole pipeline entry point. Expects emails already split, trimmed,
    /// and filtered to non-empty by the caller. Empty input is rejected
    /// before any request goes out.
    pub async fn process_emails(
        &self,
        emails: &[String],
        mode: VerifyMode,
        progress: Option<ProgressCallback>,
    ) -> Result<VerificationOutcome> {
        if emails.is_empty() {
            return Err("No emails supplied".into());
        }

        match mode {
            VerifyMode::Bulk => self.run_bulk(emails, progress).await,
            VerifyMode::Single => self.run_single(emails).await,
        }
    }

    /// Submits chunks strictly one after another. A failed chunk degrades
    /// into error verdicts for its emails and the run moves on; the result
    /// list always ends up as long as the input.
    async fn run_bulk(
        &self,
        emails: &[String],
        progress: Option<ProgressCallback>,
    ) -> Result<VerificationOutcome> {
        let run_id = Uuid::new_v4().to_string();
        let total = emails.len();
        let chunk_count = total.div_ceil(self.chunk_size);

        info!(
            "Starting bulk run {}: {} emails in {} chunks",
            run_id, total, chunk_count
        );

        let mut results: Vec<Verdict> = Vec::with_capacity(total);
        let mut processed = 0usize;

        if let Some(ref callback) = progress {
            callback(0, total, &Stats::default());
        }

        for (i, chunk) in emails.chunks(self.chunk_size).enumerate() {
            match self.backend.verify_chunk(chunk).await {
                Ok(verdicts) => {
                    if verdicts.len() != chunk.len() {
                        warn!(
                            "Chunk {}/{} returned {} verdicts for {} emails",
                            i + 1,
                            chunk_count,
                            verdicts.len(),
                            chunk.len()
                        );
                    }
                    results.extend(verdicts);
                }
                Err(e) => {
                    warn!("Chunk {}/{} failed: {}", i + 1, chunk_count, e);
                    results.extend(chunk.iter().map(|email| Verdict::chunk_error(email)));
                }
            }

            processed += chunk.len();
            let stats = compute_stats(&results);
            if let Some(ref callback) = progress {
                callback(processed, total, &stats);
            }

            if self.chunk_delay_ms > 0 && processed < total {
                tokio::time::sleep(Duration::from_millis(self.chunk_delay_ms)).await;
            }
        }

        let stats = compute_stats(&results);
        info!(
            "Bulk run {} complete: {}/{} processed, {} valid",
            run_id, processed, total, stats.valid
        );

        Ok(VerificationOutcome {
            run_id,
            results,
            stats: Some(stats),
            completed_at: Utc::now().to_rfc3339(),
        })
    }

    /// One email, one request, no chunking and no stats.
    async fn run_single(&self, emails: &[String]) -> Result<VerificationOutcome> {
        if emails.len() != 1 {
            return Err(format!(
                "Single mode expects exactly one email, got {}",
                emails.len()
            )
            .into());
        }

        let verdict = self.backend.verify_one(&emails[0]).await;

        Ok(VerificationOutcome {
            run_id: Uuid::new_v4().to_string(),
            results: vec![verdict],
            stats: None,
            completed_at: Utc::now().to_rfc3339(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verifier::types::VerdictStatus;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct ScriptedBackend {
        failing_chunks: Vec<usize>,
        chunk_calls: Arc<Mutex<Vec<usize>>>,
        single_calls: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedBackend {
        fn new(failing_chunks: Vec<usize>) -> Self {
            Self {
                failing_chunks,
                chunk_calls: Arc::new(Mutex::new(Vec::new())),
                single_calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn deliverable(email: &str) -> Verdict {
            Verdict {
                email: email.to_string(),
                status: VerdictStatus::Valid,
                score: 100,
                risk_level: Some("Low".to_string()),
                provider: Some("Google Workspace".to_string()),
                reason: "Deliverable".to_string(),
                checks: None,
            }
        }
    }

    #[async_trait]
    impl VerifierBackend for ScriptedBackend {
        async fn verify_one(&self, email: &str) -> Verdict {
            self.single_calls.lock().unwrap().push(email.to_string());
            Self::deliverable(email)
        }

        async fn verify_chunk(
            &self,
            emails: &[String],
        ) -> crate::models::Result<Vec<Verdict>> {
            let index = {
                let mut calls = self.chunk_calls.lock().unwrap();
                calls.push(emails.len());
                calls.len() - 1
            };

            if self.failing_chunks.contains(&index) {
                return Err("connection refused".into());
            }

            Ok(emails.iter().map(|email| Self::deliverable(email)).collect())
        }
    }

    fn addresses(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("user{}@example.com", i)).collect()
    }

    #[tokio::test]
    async fn bulk_preserves_order_and_length() {
        let backend = ScriptedBackend::new(vec![]);
        let chunk_calls = backend.chunk_calls.clone();
        let dispatcher = BatchDispatcher::new(Box::new(backend), 5, 0);

        let emails = addresses(6);
        let outcome = dispatcher
            .process_emails(&emails, VerifyMode::Bulk, None)
            .await
            .unwrap();

        assert_eq!(*chunk_calls.lock().unwrap(), vec![5, 1]);
        assert_eq!(outcome.results.len(), 6);
        for (verdict, email) in outcome.results.iter().zip(&emails) {
            assert_eq!(&verdict.email, email);
        }
        assert_eq!(outcome.stats.unwrap().total, 6);
    }

    #[tokio::test]
    async fn failing_chunk_degrades_to_error_verdicts() {
        let backend = ScriptedBackend::new(vec![0]);
        let chunk_calls = backend.chunk_calls.clone();
        let dispatcher = BatchDispatcher::new(Box::new(backend), 5, 0);

        let emails = addresses(6);
        let outcome = dispatcher
            .process_emails(&emails, VerifyMode::Bulk, None)
            .await
            .unwrap();

        // The second chunk is still attempted after the first one fails.
        assert_eq!(chunk_calls.lock().unwrap().len(), 2);
        assert_eq!(outcome.results.len(), 6);

        for verdict in &outcome.results[..5] {
            assert_eq!(verdict.status, VerdictStatus::Error);
            assert_eq!(verdict.reason, "Network/Server Error");
        }
        assert_eq!(outcome.results[5].status, VerdictStatus::Valid);
    }

    #[tokio::test]
    async fn run_completes_when_every_chunk_fails() {
        let backend = ScriptedBackend::new(vec![0, 1]);
        let dispatcher = BatchDispatcher::new(Box::new(backend), 5, 0);

        let emails = addresses(6);
        let outcome = dispatcher
            .process_emails(&emails, VerifyMode::Bulk, None)
            .await
            .unwrap();

        assert_eq!(outcome.results.len(), 6);
        let stats = outcome.stats.unwrap();
        assert_eq!(stats.total, 6);
        assert_eq!(stats.risky, 6);
        assert_eq!(stats.valid, 0);
    }

    #[tokio::test]
    async fn progress_counter_is_monotonic_and_complete() {
        let backend = ScriptedBackend::new(vec![]);
        let dispatcher = BatchDispatcher::new(Box::new(backend), 5, 0);

        let snapshots: Arc<Mutex<Vec<(usize, usize, Stats)>>> = Arc::new(Mutex::new(Vec::new()));
        let captured = snapshots.clone();
        let progress: ProgressCallback = Box::new(move |processed, total, stats| {
            captured.lock().unwrap().push((processed, total, *stats));
        });

        dispatcher
            .process_emails(&addresses(6), VerifyMode::Bulk, Some(progress))
            .await
            .unwrap();

        let snapshots = snapshots.lock().unwrap();
        let processed: Vec<usize> = snapshots.iter().map(|(p, _, _)| *p).collect();
        assert_eq!(processed, vec![0, 5, 6]);
        assert!(snapshots.iter().all(|(_, total, _)| *total == 6));

        assert_eq!(snapshots[0].2, Stats::default());
        assert_eq!(snapshots[1].2.total, 5);
        assert_eq!(snapshots[2].2.total, 6);
    }

    #[tokio::test]
    async fn empty_input_is_rejected() {
        let backend = ScriptedBackend::new(vec![]);
        let chunk_calls = backend.chunk_calls.clone();
        let dispatcher = BatchDispatcher::new(Box::new(backend), 5, 0);

        let result = dispatcher.process_emails(&[], VerifyMode::Bulk, None).await;
        assert!(result.is_err());
        assert!(chunk_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn single_mode_makes_one_backend_call() {
        let backend = ScriptedBackend::new(vec![]);
        let chunk_calls = backend.chunk_calls.clone();
        let single_calls = backend.single_calls.clone();
        let dispatcher = BatchDispatcher::new(Box::new(backend), 5, 0);

        let outcome = dispatcher
            .process_emails(&["a@x.com".to_string()], VerifyMode::Single, None)
            .await
            .unwrap();

        assert_eq!(outcome.results.len(), 1);
        assert!(outcome.stats.is_none());
        assert_eq!(*single_calls.lock().unwrap(), vec!["a@x.com".to_string()]);
        assert!(chunk_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn single_mode_rejects_multiple_emails() {
        let backend = ScriptedBackend::new(vec![]);
        let dispatcher = BatchDispatcher::new(Box::new(backend), 5, 0);

        let result = dispatcher
            .process_emails(&addresses(2), VerifyMode::Single, None)
            .await;
        assert!(result.is_err());
    }
}
