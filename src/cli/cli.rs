use std::sync::Mutex;

use tracing::info;

use crate::config::Config;
use crate::input::EmailInputParser;
use crate::models::CliApp;
use crate::verifier::{BatchDispatcher, HttpVerifier};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Clone)]
pub enum MenuAction {
    VerifyBulk,
    VerifySingle,
    LoadEmailFile,
    ExportResults,
    ShowRunStats,
    Exit,
}

impl std::fmt::Display for MenuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuAction::VerifyBulk => write!(f, "📬 Verify a batch of emails"),
            MenuAction::VerifySingle => write!(f, "✉️  Verify a single email"),
            MenuAction::LoadEmailFile => write!(f, "📂 Load emails from a file"),
            MenuAction::ExportResults => write!(f, "📤 Export results to CSV"),
            MenuAction::ShowRunStats => write!(f, "📊 Show last run statistics"),
            MenuAction::Exit => write!(f, "🚪 Exit"),
        }
    }
}

impl CliApp {
    pub async fn new(config: Config) -> Result<Self> {
        // Initialize the backend client
        let verifier = HttpVerifier::new(&config.backend)?;
        let dispatcher = BatchDispatcher::new(
            Box::new(verifier),
            config.backend.chunk_size,
            config.backend.chunk_delay_ms,
        );

        info!("Verifier client ready for {}", config.backend.endpoint);

        Ok(Self {
            config,
            dispatcher,
            parser: EmailInputParser::new(),
            staged_emails: Mutex::new(None),
            last_run: Mutex::new(None),
        })
    }
}
