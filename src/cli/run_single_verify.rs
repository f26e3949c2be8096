use dialoguer::{theme::ColorfulTheme, Input};

use crate::models::CliApp;
use crate::verifier::VerifyMode;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

impl CliApp {
    pub async fn run_single_verify(&self) -> Result<()> {
        println!("\n✉️  Single Email Verification");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let email: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email address")
            .interact_text()?;

        let email = email.trim().to_string();
        if email.is_empty() {
            println!("❌ No email provided");
            return Ok(());
        }

        println!("\n🔍 Verifying {}...", email);

        let outcome = self
            .dispatcher
            .process_emails(&[email], VerifyMode::Single, None)
            .await?;

        if let Some(verdict) = outcome.results.first() {
            self.display_verdict(verdict);
        }

        *self.last_run.lock().unwrap() = Some(outcome);

        println!("\n✅ Done");

        Ok(())
    }
}
