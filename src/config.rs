use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the verification service.
    pub endpoint: String,
    pub request_timeout_seconds: u64,
    /// How many emails go into one bulk request.
    pub chunk_size: usize,
    /// Pause between chunk submissions, 0 to disable.
    pub chunk_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                endpoint: "http://localhost:5000".to_string(),
                request_timeout_seconds: 30,
                chunk_size: 5,
                chunk_delay_ms: 100,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            output: OutputConfig {
                directory: "out".to_string(),
            },
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;

    if config.backend.chunk_size == 0 {
        return Err("backend.chunk_size must be at least 1".into());
    }

    Ok(config)
}
