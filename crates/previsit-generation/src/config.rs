use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-09-2025";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_BEDROCK_MODEL: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// Which generation service answers summary requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Gemini,
    Bedrock,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::Bedrock => "bedrock",
        }
    }

    pub fn default_model_id(&self) -> &'static str {
        match self {
            Provider::Gemini => DEFAULT_GEMINI_MODEL,
            Provider::Bedrock => DEFAULT_BEDROCK_MODEL,
        }
    }
}

impl FromStr for Provider {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(Provider::Gemini),
            "bedrock" | "aws" => Ok(Provider::Bedrock),
            other => Err(GenerationError::Config(format!(
                "unknown generation provider '{other}' (expected 'gemini' or 'bedrock')"
            ))),
        }
    }
}

/// A backend API key. Never printed in full.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, GenerationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(GenerationError::Config("API key is empty".to_string()));
        }
        Ok(Self(key))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// First and last four characters, safe for logs.
    pub fn hint(&self) -> String {
        let key = &self.0;
        if key.len() <= 8 || !key.is_char_boundary(4) || !key.is_char_boundary(key.len() - 4) {
            return "****".to_string();
        }
        let prefix = &key[..4];
        let suffix = &key[key.len() - 4..];
        format!("{prefix}...{suffix}")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub model_id: String,
    pub api_key: ApiKey,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct BedrockConfig {
    pub model_id: String,
    pub region: String,
}

/// Process-wide generation settings, built once at startup and handed to
/// the backend constructor.
#[derive(Debug, Clone)]
pub enum BackendConfig {
    Gemini(GeminiConfig),
    Bedrock(BedrockConfig),
}

impl BackendConfig {
    pub fn provider(&self) -> Provider {
        match self {
            BackendConfig::Gemini(_) => Provider::Gemini,
            BackendConfig::Bedrock(_) => Provider::Bedrock,
        }
    }

    pub fn model_id(&self) -> &str {
        match self {
            BackendConfig::Gemini(c) => &c.model_id,
            BackendConfig::Bedrock(c) => &c.model_id,
        }
    }

    /// Credential description for startup logs.
    pub fn credential_hint(&self) -> String {
        match self {
            BackendConfig::Gemini(c) => format!("api_key {}", c.api_key.hint()),
            BackendConfig::Bedrock(c) => format!("aws default chain ({})", c.region),
        }
    }
}
