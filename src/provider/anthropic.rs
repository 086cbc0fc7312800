//! Anthropic Messages API client.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::SyllabusConfig;
use crate::error::SyllabusError;
use crate::types::{ContentBlock, ModelResponse, StopReason, Usage};
use crate::util::retry::RetryPolicy;

use super::http::{anthropic_headers, shared_client, status_to_error};
use super::{MessageRequest, ModelClient};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    api_key: String,
    base_url: String,
    retry_policy: RetryPolicy,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>, base_url: Option<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            retry_policy: RetryPolicy::default(),
        }
    }

    /// Build a client from resolved configuration.
    pub fn from_config(config: &SyllabusConfig) -> Result<Self, SyllabusError> {
        Ok(Self::new(config.api_key()?, config.base_url.clone()))
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_request_body(&self, request: &MessageRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": request.model,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
            "system": request.system,
            "messages": request.messages,
        });

        if let (Some(obj), Some(tools)) = (body.as_object_mut(), request.tools.as_ref()) {
            obj.insert("tools".into(), serde_json::json!(tools));
            if let Some(choice) = &request.tool_choice {
                obj.insert("tool_choice".into(), serde_json::json!(choice));
            }
        }

        body
    }

    async fn send(&self, body: &serde_json::Value) -> Result<ModelResponse, SyllabusError> {
        let url = format!("{}/messages", self.base_url);

        let resp = shared_client()
            .post(&url)
            .headers(anthropic_headers(&self.api_key, API_VERSION))
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body_text = match resp.text().await {
                Ok(text) => text,
                Err(e) => {
                    debug!(status = status.as_u16(), error = %e, "Failed to read error body");
                    String::new()
                }
            };
            return Err(status_to_error(
                status.as_u16(),
                retry_after.as_deref(),
                &body_text,
            ));
        }

        let data: AnthropicResponse = resp.json().await?;
        Ok(data.into())
    }
}

#[async_trait]
impl ModelClient for AnthropicClient {
    fn provider_name(&self) -> &str {
        "anthropic"
    }

    async fn create_message(&self, request: &MessageRequest) -> Result<ModelResponse, SyllabusError> {
        let body = self.build_request_body(request);
        let body = &body;

        debug!(
            model = request.model.as_str(),
            messages = request.messages.len(),
            tools = request.tools.as_ref().map_or(0, Vec::len),
            "Anthropic create_message"
        );

        self.retry_policy.execute(move || self.send(body)).await
    }
}

#[derive(Deserialize)]
struct AnthropicResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    stop_reason: Option<String>,
    #[serde(default)]
    usage: AnthropicUsage,
}

#[derive(Deserialize, Default)]
struct AnthropicUsage {
    #[serde(default)]
    input_tokens: u32,
    #[serde(default)]
    output_tokens: u32,
    #[serde(default)]
    cache_read_input_tokens: Option<u32>,
    #[serde(default)]
    cache_creation_input_tokens: Option<u32>,
}

impl From<AnthropicResponse> for ModelResponse {
    fn from(data: AnthropicResponse) -> Self {
        ModelResponse {
            stop_reason: StopReason::from_wire(data.stop_reason.as_deref()),
            content: data.content,
            usage: Usage {
                input_tokens: data.usage.input_tokens,
                output_tokens: data.usage.output_tokens,
                cache_read_tokens: data.usage.cache_read_input_tokens,
                cache_creation_tokens: data.usage.cache_creation_input_tokens,
            },
        }
    }
}
