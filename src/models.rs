use std::sync::Mutex;

use crate::{
    config::Config,
    input::EmailInputParser,
    verifier::{BatchDispatcher, VerificationOutcome},
};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub struct CliApp {
    pub config: Config,
    pub dispatcher: BatchDispatcher,
    pub parser: EmailInputParser,
    /// Emails extracted from an uploaded file, waiting for the next bulk run.
    pub staged_emails: Mutex<Option<Vec<String>>>,
    /// Outcome of the most recent verification run. Replaced wholesale by
    /// the next run, never merged.
    pub last_run: Mutex<Option<VerificationOutcome>>,
}
