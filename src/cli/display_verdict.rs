use crate::models::CliApp;
use crate::verifier::{Verdict, VerdictStatus};

impl CliApp {
    pub fn display_verdict(&self, verdict: &Verdict) {
        println!("\n📊 Verification Result");
        println!("━━━━━━━━━━━━━━━━━━━━━");

        println!("📧 Email: {}", verdict.email);
        println!(
            "🏢 Provider: {}",
            verdict.provider.as_deref().unwrap_or("Unknown")
        );

        let status_icon = match verdict.status {
            VerdictStatus::Valid => "✅",
            VerdictStatus::Invalid => "❌",
            VerdictStatus::CatchAll => "📥",
            VerdictStatus::Error => "💥",
            VerdictStatus::Unknown | VerdictStatus::Risky => "⚠️",
        };
        println!("{} Status: {}", status_icon, verdict.status);
        println!("🎯 Confidence score: {}%", verdict.score);
        println!(
            "🛡️  Risk: {}",
            verdict.risk_level.as_deref().unwrap_or("Unknown")
        );
        println!("💬 Reason: {}", verdict.reason);

        if let Some(checks) = &verdict.checks {
            println!("\n🔬 Checks");
            println!("━━━━━━━━━");
            println!(
                "  SYNTAX: {}",
                if checks.syntax { "✅ Pass" } else { "❌ Fail" }
            );
            match checks.mx {
                Some(true) => println!("  MX: ✅ Pass"),
                Some(false) => println!("  MX: ❌ Fail"),
                None => println!("  MX: ❓ Not evaluated"),
            }
            match checks.smtp_status.as_deref() {
                Some("valid") => println!("  SMTP: ✅ valid"),
                Some("invalid") => println!("  SMTP: ❌ invalid"),
                Some(other) => println!("  SMTP: ⚠️  {}", other),
                None => println!("  SMTP: ❓ Not evaluated"),
            }
            if checks.catch_all {
                println!("  📥 Catch-all domain detected");
            }
        }
    }
}
