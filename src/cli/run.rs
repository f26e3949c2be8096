use dialoguer::{theme::ColorfulTheme, Select};

use crate::{
    cli::cli::MenuAction,
    models::{CliApp, Result},
};
use tracing::error;

impl CliApp {
    pub async fn run(&self) -> Result<()> {
        println!("\n📧 Welcome to Email Verifier!");
        println!("═══════════════════════════════════════");

        loop {
            let actions = vec![
                MenuAction::VerifyBulk,
                MenuAction::VerifySingle,
                MenuAction::LoadEmailFile,
                MenuAction::ExportResults,
                MenuAction::ShowRunStats,
                MenuAction::Exit,
            ];

            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("\nSelect an action")
                .default(0)
                .items(&actions)
                .interact()?;

            match &actions[selection] {
                MenuAction::VerifyBulk => {
                    if let Err(e) = self.run_bulk_verify().await {
                        error!("Bulk verification failed: {}", e);
                    }
                }
                MenuAction::VerifySingle => {
                    if let Err(e) = self.run_single_verify().await {
                        error!("Single verification failed: {}", e);
                    }
                }
                MenuAction::LoadEmailFile => {
                    if let Err(e) = self.run_load_file().await {
                        error!("File load failed: {}", e);
                    }
                }
                MenuAction::ExportResults => {
                    if let Err(e) = self.run_export_results().await {
                        error!("Export failed: {}", e);
                    }
                }
                MenuAction::ShowRunStats => {
                    if let Err(e) = self.show_run_stats().await {
                        error!("Failed to show statistics: {}", e);
                    }
                }
                MenuAction::Exit => {
                    println!("\n👋 Thanks for using Email Verifier!");
                    break;
                }
            }
        }

        Ok(())
    }
}
