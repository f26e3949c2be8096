// src/verifier/client.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

use super::types::Verdict;
use crate::config::BackendConfig;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Boundary to the remote verification service. The dispatcher only talks
/// to this trait, so tests can script a backend in memory.
#[async_trait]
pub trait VerifierBackend: Send + Sync {
    /// Verifies one address. Never fails: any transport, HTTP, or parse
    /// problem comes back as an error-status verdict.
    async fn verify_one(&self, email: &str) -> Verdict;

    /// Verifies a whole chunk with one request. A chunk either fully
    /// succeeds or fails as a unit; the caller synthesizes per-email
    /// error verdicts on failure.
    async fn verify_chunk(&self, emails: &[String]) -> Result<Vec<Verdict>>;
}

#[derive(Serialize)]
struct SingleVerifyRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct BulkVerifyRequest<'a> {
    emails: &'a [String],
}

pub struct HttpVerifier {
    client: Client,
    verify_url: Url,
    bulk_verify_url: Url,
}

impl HttpVerifier {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let base = Url::parse(&config.endpoint)?;
        let verify_url = base.join("verify")?;
        let bulk_verify_url = base.join("verify/bulk")?;

        let client = Client::builder()
            .user_agent("email-verifier/0.1")
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            verify_url,
            bulk_verify_url,
        })
    }

    async fn request_single(&self, email: &str) -> Result<Verdict> {
        let response = self
            .client
            .post(self.verify_url.clone())
            .json(&SingleVerifyRequest { email })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }

        Ok(response.json::<Verdict>().await?)
    }

    async fn request_chunk(&self, emails: &[String]) -> Result<Vec<Verdict>> {
        let response = self
            .client
            .post(self.bulk_verify_url.clone())
            .json(&BulkVerifyRequest { emails })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }

        Ok(response.json::<Vec<Verdict>>().await?)
    }
}

#[async_trait]
impl VerifierBackend for HttpVerifier {
    async fn verify_one(&self, email: &str) -> Verdict {
        match self.request_single(email).await {
            Ok(verdict) => verdict,
            Err(e) => {
                error!("Error verifying {}: {}", email, e);
                Verdict::backend_error(email)
            }
        }
    }

    async fn verify_chunk(&self, emails: &[String]) -> Result<Vec<Verdict>> {
        debug!("Submitting chunk of {} emails", emails.len());
        self.request_chunk(emails).await
    }
}
