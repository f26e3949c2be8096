// src/export/exporter.rs
use chrono::Utc;
use std::io::Write;

use crate::verifier::Verdict;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

const CSV_HEADERS: [&str; 9] = [
    "Email",
    "Provider",
    "Status",
    "Score",
    "Risk Level",
    "Reason",
    "Syntax",
    "MX",
    "SMTP",
];

pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the whole document: header row plus one row per verdict,
    /// joined with CRLF.
    pub fn render_csv(&self, results: &[Verdict]) -> String {
        let mut lines = vec![CSV_HEADERS.join(",")];
        lines.extend(results.iter().map(|verdict| self.render_row(verdict)));
        lines.join("\r\n")
    }

    fn render_row(&self, verdict: &Verdict) -> String {
        let checks = verdict.checks.as_ref();

        let syntax = if checks.map(|c| c.syntax).unwrap_or(false) {
            "Pass"
        } else {
            "Fail"
        };
        let mx = match checks.and_then(|c| c.mx) {
            Some(true) => "Pass",
            Some(false) => "Fail",
            None => "N/A",
        };
        let smtp = checks.and_then(|c| c.smtp_status.as_deref()).unwrap_or("N/A");

        [
            escape_csv(&verdict.email),
            escape_csv(verdict.provider.as_deref().unwrap_or("")),
            escape_csv(&verdict.status.to_string()),
            escape_csv(&verdict.score.to_string()),
            escape_csv(verdict.risk_level.as_deref().unwrap_or("")),
            escape_csv(&verdict.reason),
            escape_csv(syntax),
            escape_csv(mx),
            escape_csv(smtp),
        ]
        .join(",")
    }

    pub async fn export_to_csv(&self, results: &[Verdict], filename: &str) -> Result<()> {
        if results.is_empty() {
            return Err("No results to export".into());
        }

        // Ensure directory exists
        if let Some(parent) = std::path::Path::new(filename).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = std::fs::File::create(filename)?;
        file.write_all(self.render_csv(results).as_bytes())?;

        Ok(())
    }

    pub fn generate_filename(&self, directory: &str) -> String {
        format!(
            "{}/verification_results_{}.csv",
            directory,
            Utc::now().format("%Y%m%d_%H%M%S")
        )
    }
}

/// Quotes every field and doubles embedded quotes so reasons with commas
/// or quotes cannot break the row.
fn escape_csv(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verifier::{Checks, VerdictStatus};

    fn verdict() -> Verdict {
        Verdict {
            email: "jane@acme.io".to_string(),
            status: VerdictStatus::Valid,
            score: 95,
            risk_level: Some("Low".to_string()),
            provider: Some("Google Workspace".to_string()),
            reason: "Deliverable".to_string(),
            checks: Some(Checks {
                syntax: true,
                mx: Some(true),
                smtp_status: Some("valid".to_string()),
                catch_all: false,
            }),
        }
    }

    #[test]
    fn renders_header_and_one_row_per_verdict() {
        let exporter = CsvExporter::new();
        let csv = exporter.render_csv(&[verdict(), verdict()]);

        let lines: Vec<&str> = csv.split("\r\n").collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Email,Provider,Status"));
        assert!(lines[1].contains("\"jane@acme.io\""));
        assert!(lines[1].contains("\"valid\""));
        assert!(lines[1].contains("\"95\""));
        assert!(lines[1].contains("\"Pass\""));
    }

    #[test]
    fn doubles_embedded_quotes() {
        let mut bad = verdict();
        bad.reason = "Server said \"blocked\"".to_string();

        let exporter = CsvExporter::new();
        let csv = exporter.render_csv(&[bad]);
        assert!(csv.contains("\"Server said \"\"blocked\"\"\""));
    }

    #[test]
    fn unevaluated_checks_render_na() {
        let mut unchecked = verdict();
        unchecked.checks = None;

        let exporter = CsvExporter::new();
        let csv = exporter.render_csv(&[unchecked]);
        let row = csv.split("\r\n").nth(1).unwrap();
        assert!(row.ends_with("\"Fail\",\"N/A\",\"N/A\""));
    }

    #[test]
    fn missing_provider_renders_empty_field() {
        let mut anonymous = verdict();
        anonymous.provider = None;

        let exporter = CsvExporter::new();
        let csv = exporter.render_csv(&[anonymous]);
        let row = csv.split("\r\n").nth(1).unwrap();
        assert!(row.starts_with("\"jane@acme.io\",\"\","));
    }
}
