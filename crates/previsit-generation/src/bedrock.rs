//! Bedrock Converse backend.
//!
//! Converse has no JSON response mode, so the schema contract is attached
//! as the input schema of a single tool and the request forces the model to
//! call it. The tool input is the structured summary; it is re-serialized to
//! raw JSON text for local validation like any other backend's output.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SpecificToolChoice, SystemContentBlock, Tool,
    ToolChoice, ToolConfiguration, ToolInputSchema, ToolSpecification,
};
use tracing::info;

use crate::backend::{GenerationBackend, GenerationRequest};
use crate::config::BedrockConfig;
use crate::document;
use crate::error::GenerationError;

pub const SUMMARY_TOOL_NAME: &str = "record_clinical_summary";

const SUMMARY_TOOL_DESCRIPTION: &str =
    "Record the structured clinical summary of the pre-visit questionnaire.";

#[derive(Debug, Clone)]
pub struct BedrockBackend {
    client: Client,
    model_id: String,
}

impl BedrockBackend {
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    /// Credentials come from the default AWS chain; the region is explicit.
    pub async fn from_config(config: &BedrockConfig) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .load()
            .await;
        Self::new(Client::new(&sdk_config), config.model_id.clone())
    }
}

impl GenerationBackend for BedrockBackend {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GenerationError> {
        let tool_config = summary_tool(request)?;

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(request.user_content.to_string()))
            .build()
            .map_err(|e| GenerationError::Invocation(e.to_string()))?;

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(
                request.system_instruction.to_string(),
            ))
            .messages(message)
            .tool_config(tool_config)
            .send()
            .await
            .map_err(|e| GenerationError::Invocation(e.into_service_error().to_string()))?;

        if let Some(usage) = response.usage() {
            info!(
                model_id = %self.model_id,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "bedrock converse complete"
            );
        }

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| GenerationError::ResponseParse("no message in response".to_string()))?;

        raw_text_from_blocks(output_message.content())
    }
}

/// Tool configuration that forces the model to answer through the summary
/// tool, whose input schema is the schema contract.
fn summary_tool(request: &GenerationRequest<'_>) -> Result<ToolConfiguration, GenerationError> {
    let input_schema = document::from_json(&request.schema.to_json_schema());

    let spec = ToolSpecification::builder()
        .name(SUMMARY_TOOL_NAME)
        .description(SUMMARY_TOOL_DESCRIPTION)
        .input_schema(ToolInputSchema::Json(input_schema))
        .build()
        .map_err(|e| GenerationError::Invocation(e.to_string()))?;

    let choice = SpecificToolChoice::builder()
        .name(SUMMARY_TOOL_NAME)
        .build()
        .map_err(|e| GenerationError::Invocation(e.to_string()))?;

    ToolConfiguration::builder()
        .tools(Tool::ToolSpec(spec))
        .tool_choice(ToolChoice::Tool(choice))
        .build()
        .map_err(|e| GenerationError::Invocation(e.to_string()))
}

/// Raw JSON text from a Converse reply: the summary tool's input when the
/// model called it, otherwise the concatenated text blocks.
pub fn raw_text_from_blocks(blocks: &[ContentBlock]) -> Result<String, GenerationError> {
    let tool_input = blocks
        .iter()
        .filter_map(|block| block.as_tool_use().ok())
        .find(|tool_use| tool_use.name() == SUMMARY_TOOL_NAME);

    if let Some(tool_use) = tool_input {
        return Ok(serde_json::to_string(&document::to_json(tool_use.input()))?);
    }

    let text = blocks
        .iter()
        .filter_map(|block| block.as_text().ok())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        return Err(GenerationError::ResponseParse(
            "response contained neither a tool call nor text".to_string(),
        ));
    }
    Ok(text)
}
