//! Chat-completions request/response contract.
//!
//! Only the members schemasync reads or writes are modelled; unknown response
//! members are ignored.

use crate::prompt::{FixtureRequest, SYSTEM_PROMPT};
use schemasync_types::GenerationConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatRequest {
    /// One system message plus the fixture prompt as the user message.
    pub fn for_fixtures(config: &GenerationConfig, request: &FixtureRequest) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.prompt.clone(),
                },
            ],
            temperature: config.temperature,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// `choices[0].message.content`, if present.
    pub fn into_first_content(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}
