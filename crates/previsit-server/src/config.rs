use std::time::Duration;

use previsit_generation::config::{
    ApiKey, BackendConfig, BedrockConfig, DEFAULT_GEMINI_BASE_URL, GeminiConfig, Provider,
};

pub mod var {
    pub const BACKEND: &str = "PREVISIT_BACKEND";
    pub const MODEL_ID: &str = "PREVISIT_MODEL_ID";
    pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
    pub const GEMINI_BASE_URL: &str = "PREVISIT_GEMINI_BASE_URL";
    pub const AWS_REGION: &str = "AWS_REGION";
    pub const PORT: &str = "PORT";
    pub const REQUEST_TIMEOUT_SECS: &str = "PREVISIT_REQUEST_TIMEOUT_SECS";
    pub const LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";
}

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_AWS_REGION: &str = "us-east-1";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Startup configuration. Loaded once; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub backend: BackendConfig,
    pub port: u16,
    pub request_timeout: Duration,
    pub on_lambda: bool,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider: Provider = match get(var::BACKEND) {
            Some(raw) => raw.parse()?,
            None => Provider::Gemini,
        };
        let model_id = get(var::MODEL_ID)
            .unwrap_or_else(|| provider.default_model_id().to_string());

        let backend = match provider {
            Provider::Gemini => {
                let key = get(var::GOOGLE_API_KEY).ok_or_else(|| {
                    eyre::eyre!(
                        "{} must be set when {}=gemini",
                        var::GOOGLE_API_KEY,
                        var::BACKEND
                    )
                })?;
                BackendConfig::Gemini(GeminiConfig {
                    model_id,
                    api_key: ApiKey::new(key)?,
                    base_url: get(var::GEMINI_BASE_URL)
                        .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
                })
            }
            Provider::Bedrock => BackendConfig::Bedrock(BedrockConfig {
                model_id,
                region: get(var::AWS_REGION).unwrap_or_else(|| DEFAULT_AWS_REGION.to_string()),
            }),
        };

        let port = match get(var::PORT) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| eyre::eyre!("invalid {} '{raw}': {e}", var::PORT))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get(var::REQUEST_TIMEOUT_SECS) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    eyre::eyre!(
                        "invalid {} '{raw}': expected a positive integer",
                        var::REQUEST_TIMEOUT_SECS
                    )
                })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            backend,
            port,
            request_timeout: Duration::from_secs(timeout_secs),
            on_lambda: get(var::LAMBDA_RUNTIME_API).is_some(),
        })
    }
}
