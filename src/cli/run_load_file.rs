use dialoguer::{theme::ColorfulTheme, Input};

use crate::models::CliApp;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

impl CliApp {
    pub async fn run_load_file(&self) -> Result<()> {
        println!("\n📂 Load Emails From File");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Path to file (CSV or TXT)")
            .interact_text()?;

        let path = path.trim();
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) => {
                println!("❌ Could not read {}: {}", path, e);
                return Ok(());
            }
        };

        let emails = self.parser.extract_emails(&content);

        if emails.is_empty() {
            println!("❌ No emails found in the file");
            return Ok(());
        }

        println!(
            "✅ File loaded: {} unique emails staged for bulk verification",
            emails.len()
        );

        for (i, email) in emails.iter().take(5).enumerate() {
            println!("  {}. {}", i + 1, email);
        }
        if emails.len() > 5 {
            println!("  ... and {} more", emails.len() - 5);
        }

        *self.staged_emails.lock().unwrap() = Some(emails);

        Ok(())
    }
}
