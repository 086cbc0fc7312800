//! Answer generation with a bounded number of sequential tool rounds.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::extract::extract_text;
use crate::context::Instructions;
use crate::error::SyllabusError;
use crate::provider::{MessageRequest, ModelClient};
use crate::tools::{ToolExecutor, ToolSchema};
use crate::types::{ContentBlock, GenerationConfig, Message, ModelResponse, Usage};

/// Prefix for the tool result sent back when a tool call fails.
pub const TOOL_ERROR_PREFIX: &str = "Error executing tool: ";

/// Inputs for one query.
#[derive(Clone, Copy)]
pub struct GenerateRequest<'a> {
    pub query: &'a str,
    /// Prior conversation, already rendered as text.
    pub history: Option<&'a str>,
    pub tools: &'a [ToolSchema],
    pub executor: Option<&'a dyn ToolExecutor>,
}

impl<'a> GenerateRequest<'a> {
    pub fn new(query: &'a str) -> Self {
        Self {
            query,
            history: None,
            tools: &[],
            executor: None,
        }
    }

    pub fn with_history(mut self, history: Option<&'a str>) -> Self {
        self.history = history;
        self
    }

    pub fn with_tools(mut self, tools: &'a [ToolSchema]) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_executor(mut self, executor: &'a dyn ToolExecutor) -> Self {
        self.executor = Some(executor);
        self
    }
}

/// Everything produced while answering one query.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub answer: String,
    /// The transcript as sent on the last model call.
    pub transcript: Vec<Message>,
    pub final_response: ModelResponse,
    pub model_calls: usize,
    pub tool_rounds: usize,
    /// Usage summed over all model calls.
    pub usage: Usage,
}

/// Drives a query through model calls and tool rounds until a text answer.
///
/// Tools stay on offer until the last permitted round has been executed, or
/// until any tool call fails; after that the model is asked to answer in text.
/// All per-query state is local to [`Generator::run`], so one generator can
/// serve concurrent callers.
pub struct Generator {
    client: Arc<dyn ModelClient>,
    config: GenerationConfig,
    instructions: Instructions,
}

impl Generator {
    pub fn new(client: Arc<dyn ModelClient>, config: GenerationConfig) -> Self {
        Self {
            client,
            config,
            instructions: Instructions::default(),
        }
    }

    pub fn with_instructions(mut self, instructions: Instructions) -> Self {
        self.instructions = instructions;
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn instructions(&self) -> &Instructions {
        &self.instructions
    }

    /// Answer a query, optionally with prior conversation and tools.
    ///
    /// Model client errors are returned as is; tool failures are not errors.
    pub async fn generate(
        &self,
        query: &str,
        history: Option<&str>,
        tools: Option<&[ToolSchema]>,
        executor: Option<&dyn ToolExecutor>,
    ) -> Result<String, SyllabusError> {
        let request = GenerateRequest {
            query,
            history,
            tools: tools.unwrap_or(&[]),
            executor,
        };
        Ok(self.run(request).await?.answer)
    }

    /// Like [`Generator::generate`], but returns the transcript and counters too.
    pub async fn run(&self, request: GenerateRequest<'_>) -> Result<GenerationOutcome, SyllabusError> {
        let system = self.instructions.system_text(request.history);
        let mut params =
            MessageRequest::new(&self.config, system, vec![Message::user(request.query)]);
        params.offer_tools(request.tools);

        let mut usage = Usage::default();
        let mut model_calls = 0;
        let mut tool_rounds = 0;
        let mut tools_enabled = true;

        let mut response = self.call_model(&params, &mut usage, &mut model_calls).await?;

        for round_num in 0..self.config.max_tool_rounds {
            let Some(executor) = request.executor else {
                break;
            };
            if !response.is_tool_use() {
                break;
            }

            let round = execute_tool_uses(executor, &response.content).await;
            params.messages.push(Message::assistant(response.content));
            params.messages.push(Message::tool_results(round.results));
            tool_rounds += 1;

            let is_last_round = round_num + 1 == self.config.max_tool_rounds;
            if tools_enabled && (is_last_round || round.failed) {
                tools_enabled = false;
                if params.offers_tools() {
                    info!(
                        round = round_num,
                        tool_failed = round.failed,
                        "Withdrawing tools for the next call"
                    );
                }
                params.withdraw_tools();
            }

            response = self.call_model(&params, &mut usage, &mut model_calls).await?;
        }

        Ok(GenerationOutcome {
            answer: extract_text(&response).to_string(),
            transcript: params.messages,
            final_response: response,
            model_calls,
            tool_rounds,
            usage,
        })
    }

    async fn call_model(
        &self,
        params: &MessageRequest,
        usage: &mut Usage,
        model_calls: &mut usize,
    ) -> Result<ModelResponse, SyllabusError> {
        debug!(
            call = *model_calls,
            messages = params.messages.len(),
            tools_offered = params.offers_tools(),
            "Calling model"
        );
        let response = self.client.create_message(params).await?;
        *model_calls += 1;
        usage.merge(&response.usage);
        Ok(response)
    }
}

struct ToolRound {
    results: Vec<ContentBlock>,
    failed: bool,
}

/// Run every tool use block in order, one at a time.
///
/// A failing call is reported in its result and does not stop the others.
async fn execute_tool_uses(executor: &dyn ToolExecutor, content: &[ContentBlock]) -> ToolRound {
    let mut results = Vec::new();
    let mut failed = false;

    for block in content {
        let ContentBlock::ToolUse { id, name, input } = block else {
            continue;
        };

        debug!(tool = name.as_str(), tool_use_id = id.as_str(), "Executing tool");
        let (output, is_error) = match executor.execute(name, input).await {
            Ok(output) => (output, false),
            Err(e) => {
                warn!(tool = name.as_str(), error = %e, "Tool execution failed");
                failed = true;
                (format!("{TOOL_ERROR_PREFIX}{e}"), true)
            }
        };
        results.push(ContentBlock::tool_result(id.clone(), output, is_error));
    }

    ToolRound { results, failed }
}
