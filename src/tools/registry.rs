//! Name-keyed tool registry.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::schema::ToolSchema;
use super::tool::Tool;
use super::ToolExecutor;
use crate::error::SyllabusError;
use crate::types::ToolInput;

/// Holds the tools offered to the model and dispatches calls by name.
///
/// Schemas are reported in registration order. Unknown names are answered
/// with a plain "not found" message rather than an error.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any existing tool with the same name in place.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        match self.tools.iter().position(|t| t.name() == tool.name()) {
            Some(index) => self.tools[index] = tool,
            None => self.tools.push(tool),
        }
    }

    pub fn with_tool(mut self, tool: impl Tool + 'static) -> Self {
        self.register(Arc::new(tool));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[async_trait]
impl ToolExecutor for ToolRegistry {
    fn tool_definitions(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|t| t.schema()).collect()
    }

    async fn execute(&self, name: &str, input: &ToolInput) -> Result<String, SyllabusError> {
        match self.get(name) {
            Some(tool) => tool.execute(input).await,
            None => {
                debug!(tool = name, "Tool not registered");
                Ok(format!("Tool '{name}' not found"))
            }
        }
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
