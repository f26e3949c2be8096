// src/verifier/types.rs
use serde::{Deserialize, Serialize};

/// Classification tag assigned by the backend. Anything that is not
/// clearly deliverable or undeliverable ends up in the risky bucket
/// when statistics are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    Valid,
    Invalid,
    Unknown,
    Risky,
    #[serde(rename = "catch-all")]
    CatchAll,
    Error,
}

impl std::fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            VerdictStatus::Valid => "valid",
            VerdictStatus::Invalid => "invalid",
            VerdictStatus::Unknown => "unknown",
            VerdictStatus::Risky => "risky",
            VerdictStatus::CatchAll => "catch-all",
            VerdictStatus::Error => "error",
        };
        write!(f, "{}", tag)
    }
}

/// Diagnostic sub-results reported by the backend. `mx: None` means the
/// check was not evaluated. Extra fields in the payload are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checks {
    #[serde(default)]
    pub syntax: bool,
    #[serde(default)]
    pub mx: Option<bool>,
    #[serde(default)]
    pub smtp_status: Option<String>,
    #[serde(default)]
    pub catch_all: bool,
}

/// The result record for one email, passed through from the backend
/// unmodified, or synthesized locally when a request fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub email: String,
    pub status: VerdictStatus,
    #[serde(default)]
    pub score: u8,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub checks: Option<Checks>,
}

impl Verdict {
    /// Synthetic verdict for a failed single-item request.
    pub fn backend_error(email: &str) -> Self {
        Self::synthetic_error(email, "Backend Error")
    }

    /// Synthetic verdict for every email of a failed chunk request.
    pub fn chunk_error(email: &str) -> Self {
        Self::synthetic_error(email, "Network/Server Error")
    }

    fn synthetic_error(email: &str, reason: &str) -> Self {
        Self {
            email: email.to_string(),
            status: VerdictStatus::Error,
            score: 0,
            risk_level: None,
            provider: None,
            reason: reason.to_string(),
            checks: None,
        }
    }
}

/// Summary counts over a verdict list. Every verdict lands in exactly one
/// of the four buckets, so the buckets always sum to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub risky: usize,
    pub catch_all: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyMode {
    Bulk,
    Single,
}

/// What a completed run leaves behind. Single-mode runs carry no stats.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationOutcome {
    pub run_id: String,
    pub results: Vec<Verdict>,
    pub stats: Option<Stats>,
    pub completed_at: String,
}
