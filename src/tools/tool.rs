//! Tool trait and closure-based tool wrapper.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;

use super::schema::ToolSchema;
use crate::error::SyllabusError;
use crate::types::ToolInput;

/// A single tool the model can call.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (must match what the model calls).
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON Schema for the input object.
    fn input_schema(&self) -> &serde_json::Value;

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(self.name(), self.description(), self.input_schema().clone())
    }

    /// Run the tool.
    ///
    /// Expected outcomes such as "no results" belong in the `Ok` string. An
    /// `Err` marks the call as failed.
    async fn execute(&self, input: &ToolInput) -> Result<String, SyllabusError>;
}

type ToolHandler =
    dyn Fn(ToolInput) -> BoxFuture<'static, Result<String, SyllabusError>> + Send + Sync;

/// Closure-based tool for quick tool creation.
pub struct FnTool {
    name: String,
    description: String,
    input_schema: serde_json::Value,
    handler: Arc<ToolHandler>,
}

impl FnTool {
    pub fn new<F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: serde_json::Value,
        handler: F,
    ) -> Self
    where
        F: Fn(ToolInput) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, SyllabusError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
            handler: Arc::new(move |input| Box::pin(handler(input))),
        }
    }
}

#[async_trait]
impl Tool for FnTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn input_schema(&self) -> &serde_json::Value {
        &self.input_schema
    }

    async fn execute(&self, input: &ToolInput) -> Result<String, SyllabusError> {
        (self.handler)(input.clone()).await
    }
}

impl std::fmt::Debug for FnTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}
