use crate::export::CsvExporter;
use crate::models::CliApp;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

impl CliApp {
    pub async fn run_export_results(&self) -> Result<()> {
        println!("\n📤 Export Results");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let last_run = self.last_run.lock().unwrap().clone();
        let outcome = match last_run {
            Some(outcome) => outcome,
            None => {
                println!("❌ No results to export! Run a verification first.");
                return Ok(());
            }
        };

        let exporter = CsvExporter::new();
        let filename = exporter.generate_filename(&self.config.output.directory);
        exporter.export_to_csv(&outcome.results, &filename).await?;

        println!("✅ Results exported!");
        println!("📁 File: {}", filename);
        println!("📊 Rows: {}", outcome.results.len());

        Ok(())
    }
}
