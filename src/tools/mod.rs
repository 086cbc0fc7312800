//! Tool system for function calling.

pub mod arguments;
pub mod registry;
pub mod schema;
pub mod tool;

pub use arguments::ToolArguments;
pub use registry::ToolRegistry;
pub use schema::{InputSchema, ToolSchema};
pub use tool::{FnTool, Tool};

use async_trait::async_trait;

use crate::error::SyllabusError;
use crate::types::ToolInput;

/// What the generator needs from whoever owns the tools.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Schemas for every tool this executor can run.
    fn tool_definitions(&self) -> Vec<ToolSchema>;

    /// Run the named tool.
    ///
    /// Unknown tools and empty results are reported as text in `Ok`. Only
    /// unexpected failures come back as `Err`.
    async fn execute(&self, name: &str, input: &ToolInput) -> Result<String, SyllabusError>;
}
