//! Shared test helpers: scripted model client and recording tool executor.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use syllabus::error::SyllabusError;
use syllabus::provider::{MessageRequest, ModelClient};
use syllabus::tools::{ToolExecutor, ToolSchema};
use syllabus::types::*;

/// A model client that replays queued responses and records every request.
#[derive(Default)]
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<ModelResponse, SyllabusError>>>,
    requests: Mutex<Vec<MessageRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self, response: ModelResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn queue_text(&self, text: &str) {
        self.queue(ModelResponse::text(text));
    }

    pub fn queue_tool_use(&self, blocks: Vec<ContentBlock>) {
        self.queue(ModelResponse::new(StopReason::ToolUse, blocks));
    }

    pub fn queue_error(&self, error: SyllabusError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<MessageRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    async fn create_message(&self, request: &MessageRequest) -> Result<ModelResponse, SyllabusError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SyllabusError::api(500, "no scripted response left")))
    }
}

/// A tool executor that records calls and replays queued outcomes.
pub struct RecordingExecutor {
    schemas: Vec<ToolSchema>,
    outcomes: Mutex<VecDeque<Result<String, SyllabusError>>>,
    default_output: String,
    calls: Mutex<Vec<(String, ToolInput)>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self {
            schemas: sample_tools(),
            outcomes: Mutex::new(VecDeque::new()),
            default_output: "tool result text".to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn queue_output(&self, output: &str) {
        self.outcomes.lock().unwrap().push_back(Ok(output.to_string()));
    }

    pub fn queue_failure(&self, error: SyllabusError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<(String, ToolInput)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ToolExecutor for RecordingExecutor {
    fn tool_definitions(&self) -> Vec<ToolSchema> {
        self.schemas.clone()
    }

    async fn execute(&self, name: &str, input: &ToolInput) -> Result<String, SyllabusError> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), input.clone()));
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(self.default_output.clone()))
    }
}

pub fn sample_tools() -> Vec<ToolSchema> {
    vec![ToolSchema::new(
        "search_course_content",
        "Search",
        serde_json::json!({}),
    )]
}

/// Build a tool input object from a JSON literal.
pub fn input(value: serde_json::Value) -> ToolInput {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("tool input must be an object, got {other}"),
    }
}

pub fn tool_use(id: &str, name: &str, args: serde_json::Value) -> ContentBlock {
    ContentBlock::tool_use(id, name, input(args))
}

pub fn roles(messages: &[Message]) -> Vec<Role> {
    messages.iter().map(|m| m.role).collect()
}
