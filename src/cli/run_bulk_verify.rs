use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::models::CliApp;
use crate::verifier::{ProgressCallback, Stats, Verdict, VerifyMode};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

impl CliApp {
    pub async fn run_bulk_verify(&self) -> Result<()> {
        println!("\n📬 Bulk Email Verification");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let emails = match self.take_staged_emails()? {
            Some(emails) => emails,
            None => {
                let text: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Emails (separate with commas, semicolons, or newlines)")
                    .interact_text()?;

                self.parser.split_input(&text)
            }
        };

        if emails.is_empty() {
            println!("❌ No emails to verify");
            return Ok(());
        }

        let chunk_size = self.config.backend.chunk_size;
        let chunk_count = emails.len().div_ceil(chunk_size);
        println!(
            "\n📦 {} emails in {} chunks of up to {}",
            emails.len(),
            chunk_count,
            chunk_size
        );

        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Start verification?")
            .default(true)
            .interact()?;

        if !proceed {
            println!("👍 Verification cancelled");
            return Ok(());
        }

        println!("\n🚀 Verifying...");

        let progress: ProgressCallback = Box::new(|processed: usize, total: usize, stats: &Stats| {
            if processed == 0 {
                return;
            }
            println!(
                "   📊 Progress: {}/{} (✅ {} valid, ❌ {} invalid, ⚠️  {} risky, 📥 {} catch-all)",
                processed, total, stats.valid, stats.invalid, stats.risky, stats.catch_all
            );
        });

        let outcome = self
            .dispatcher
            .process_emails(&emails, VerifyMode::Bulk, Some(progress))
            .await?;

        println!("\n🎉 Verification complete!");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        if let Some(stats) = &outcome.stats {
            self.display_stats(stats);
        }

        self.show_result_preview(&outcome.results);

        *self.last_run.lock().unwrap() = Some(outcome);

        println!("\n💡 Use 'Export results to CSV' to save this run");

        Ok(())
    }

    /// Offers the file-loaded list when one is staged; consumed on use,
    /// kept when the user declines it.
    fn take_staged_emails(&self) -> Result<Option<Vec<String>>> {
        let staged = self.staged_emails.lock().unwrap().clone();

        if let Some(emails) = staged {
            let use_staged = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Use the {} emails loaded from file?", emails.len()))
                .default(true)
                .interact()?;

            if use_staged {
                *self.staged_emails.lock().unwrap() = None;
                return Ok(Some(emails));
            }
        }

        Ok(None)
    }

    pub(crate) fn show_result_preview(&self, results: &[Verdict]) {
        println!("\n📋 Result Preview:");
        println!("━━━━━━━━━━━━━━━━━━━━━");

        for (i, verdict) in results.iter().take(5).enumerate() {
            println!(
                "{}. {} - {} ({}%) - {}",
                i + 1,
                verdict.email,
                verdict.status,
                verdict.score,
                verdict.reason
            );
        }

        if results.len() > 5 {
            println!("   ... and {} more", results.len() - 5);
        }
    }
}
