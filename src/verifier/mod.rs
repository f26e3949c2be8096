// src/verifier/mod.rs
pub mod client;
pub mod dispatcher;
pub mod stats;
pub mod types;

// Re-export main types for convenience
pub use client::{HttpVerifier, VerifierBackend};
pub use dispatcher::{BatchDispatcher, ProgressCallback};
pub use stats::compute_stats;
pub use types::{Checks, Stats, Verdict, VerdictStatus, VerificationOutcome, VerifyMode};
