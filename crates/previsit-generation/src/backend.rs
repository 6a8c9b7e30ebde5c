use std::future::Future;

use previsit_core::schema::SchemaNode;

use crate::bedrock::BedrockBackend;
use crate::config::BackendConfig;
use crate::error::GenerationError;
use crate::gemini::GeminiBackend;

/// One generation call: instruction and case text travel on separate
/// channels, and the output is constrained to `schema`.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub system_instruction: &'a str,
    pub user_content: &'a str,
    pub schema: &'a SchemaNode,
}

/// A service that turns a generation request into raw JSON text.
///
/// Implementations make exactly one attempt per call. The model and the
/// JSON-only output mode are fixed at construction.
pub trait GenerationBackend: Send + Sync {
    fn model_id(&self) -> &str;

    fn generate(
        &self,
        request: &GenerationRequest<'_>,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

/// The configured production backend.
#[derive(Debug)]
pub enum Backend {
    Gemini(GeminiBackend),
    Bedrock(BedrockBackend),
}

impl Backend {
    pub async fn from_config(config: &BackendConfig) -> Result<Self, GenerationError> {
        match config {
            BackendConfig::Gemini(c) => Ok(Backend::Gemini(GeminiBackend::new(c)?)),
            BackendConfig::Bedrock(c) => Ok(Backend::Bedrock(BedrockBackend::from_config(c).await)),
        }
    }
}

impl GenerationBackend for Backend {
    fn model_id(&self) -> &str {
        match self {
            Backend::Gemini(b) => b.model_id(),
            Backend::Bedrock(b) => b.model_id(),
        }
    }

    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GenerationError> {
        match self {
            Backend::Gemini(b) => b.generate(request).await,
            Backend::Bedrock(b) => b.generate(request).await,
        }
    }
}
