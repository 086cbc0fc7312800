//! Model client trait and the request it consumes.

pub mod http;

#[cfg(feature = "anthropic")]
pub mod anthropic;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::SyllabusError;
use crate::tools::ToolSchema;
use crate::types::{GenerationConfig, Message, ModelResponse, ToolChoice};

/// Parameters for one model call.
///
/// One instance lives for the duration of a single query and is updated in
/// place between rounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRequest {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
    pub system: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
}

impl MessageRequest {
    pub fn new(config: &GenerationConfig, system: String, messages: Vec<Message>) -> Self {
        Self {
            model: config.model_id.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            messages,
            system,
            tools: None,
            tool_choice: None,
        }
    }

    /// Offer tools with automatic selection. An empty list offers nothing.
    pub fn offer_tools(&mut self, tools: &[ToolSchema]) {
        if tools.is_empty() {
            return;
        }
        self.tools = Some(tools.to_vec());
        self.tool_choice = Some(ToolChoice::Auto);
    }

    /// Stop offering tools, forcing a text answer.
    pub fn withdraw_tools(&mut self) {
        self.tools = None;
        self.tool_choice = None;
    }

    pub fn offers_tools(&self) -> bool {
        self.tools.is_some()
    }
}

/// A client that can run one model call.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Provider name (e.g., "anthropic").
    fn provider_name(&self) -> &str;

    /// Send the request and wait for the complete response.
    async fn create_message(&self, request: &MessageRequest) -> Result<ModelResponse, SyllabusError>;
}
