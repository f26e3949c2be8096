use crate::models::CliApp;
use crate::verifier::{compute_stats, Stats};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

impl CliApp {
    pub async fn show_run_stats(&self) -> Result<()> {
        println!("\n📊 Last Run Statistics");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let last_run = self.last_run.lock().unwrap().clone();
        let outcome = match last_run {
            Some(outcome) => outcome,
            None => {
                println!("❓ No verification run yet");
                return Ok(());
            }
        };

        // Single-mode runs carry no batch statistics
        if outcome.stats.is_none() {
            println!("✉️  Last run was a single verification, no batch statistics");
            if let Some(verdict) = outcome.results.first() {
                self.display_verdict(verdict);
            }
            return Ok(());
        }

        let stats = compute_stats(&outcome.results);
        self.display_stats(&stats);

        println!("\n🆔 Run: {}", outcome.run_id);
        println!("🕐 Completed: {}", outcome.completed_at);

        Ok(())
    }

    pub fn display_stats(&self, stats: &Stats) {
        println!("\n📈 Summary");
        println!("━━━━━━━━━━");
        println!("📦 Total: {}", stats.total);
        println!("✅ Valid: {}", stats.valid);
        println!("❌ Invalid: {}", stats.invalid);
        println!("⚠️  Risky: {}", stats.risky);
        println!("📥 Catch-all: {}", stats.catch_all);

        if stats.total > 0 {
            let valid_percentage = (stats.valid * 100) / stats.total;
            println!("📊 Deliverability: {}%", valid_percentage);
        }
    }
}
