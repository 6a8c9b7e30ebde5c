use std::sync::Mutex;

use previsit_generation::backend::{GenerationBackend, GenerationRequest};
use previsit_generation::error::GenerationError;

/// What the stub saw on its last call.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub system_instruction: String,
    pub user_content: String,
    pub schema: serde_json::Value,
}

/// Backend that replays a canned reply and records the request.
pub struct StubBackend {
    reply: Result<String, String>,
    pub captured: Mutex<Vec<CapturedRequest>>,
}

impl StubBackend {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            captured: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            captured: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

impl GenerationBackend for StubBackend {
    fn model_id(&self) -> &str {
        "stub-model"
    }

    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GenerationError> {
        self.captured.lock().unwrap().push(CapturedRequest {
            system_instruction: request.system_instruction.to_string(),
            user_content: request.user_content.to_string(),
            schema: request.schema.to_json_schema(),
        });
        self.reply
            .clone()
            .map_err(GenerationError::Invocation)
    }
}

pub fn valid_summary_json() -> serde_json::Value {
    serde_json::json!({
        "summary": "28세 여성, LMP 2024-01-01. C.C: Dysmenorrhea 및 Menorrhagia 호소.",
        "sentiment": "#R/O_Endometriosis",
        "keywords": ["Dysmenorrhea", "Menorrhagia", "NRS 7", "LMP 2024-01-01", "Family Hx"],
        "doctorQuestions": ["진통제 복용 후에도 통증이 지속되나요?"],
        "chartData": { "pain": 7, "bleeding": 8, "urgency": 4, "stress": 5, "severity": 6 }
    })
}
