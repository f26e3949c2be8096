// src/verifier/stats.rs
use super::types::{Stats, Verdict, VerdictStatus};

/// Derives summary counts from the full verdict list. Recomputed from
/// scratch after every chunk, never updated incrementally.
pub fn compute_stats(results: &[Verdict]) -> Stats {
    let mut stats = Stats::default();

    for verdict in results {
        stats.total += 1;
        match verdict.status {
            VerdictStatus::Valid => stats.valid += 1,
            VerdictStatus::Invalid => stats.invalid += 1,
            VerdictStatus::CatchAll => stats.catch_all += 1,
            VerdictStatus::Unknown | VerdictStatus::Risky | VerdictStatus::Error => {
                stats.risky += 1
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(status: VerdictStatus) -> Verdict {
        Verdict {
            email: "someone@example.com".to_string(),
            status,
            score: 0,
            risk_level: None,
            provider: None,
            reason: String::new(),
            checks: None,
        }
    }

    #[test]
    fn empty_list_yields_zero_stats() {
        assert_eq!(compute_stats(&[]), Stats::default());
    }

    #[test]
    fn every_status_lands_in_exactly_one_bucket() {
        let results = vec![
            verdict(VerdictStatus::Valid),
            verdict(VerdictStatus::Invalid),
            verdict(VerdictStatus::Unknown),
            verdict(VerdictStatus::Risky),
            verdict(VerdictStatus::CatchAll),
            verdict(VerdictStatus::Error),
        ];

        let stats = compute_stats(&results);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.valid, 1);
        assert_eq!(stats.invalid, 1);
        assert_eq!(stats.catch_all, 1);
        assert_eq!(stats.risky, 3);
        assert_eq!(
            stats.valid + stats.invalid + stats.risky + stats.catch_all,
            stats.total
        );
    }

    #[test]
    fn recomputing_is_idempotent() {
        let results = vec![
            verdict(VerdictStatus::Valid),
            verdict(VerdictStatus::Error),
            verdict(VerdictStatus::CatchAll),
        ];

        assert_eq!(compute_stats(&results), compute_stats(&results));
    }
}
