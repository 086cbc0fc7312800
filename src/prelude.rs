//! Convenience re-exports for common use.

pub use crate::config::SyllabusConfig;
pub use crate::context::Instructions;
pub use crate::error::{Result, SyllabusError};
pub use crate::generation::{GenerateRequest, GenerationOutcome, Generator};
pub use crate::provider::{MessageRequest, ModelClient};
pub use crate::tools::{FnTool, InputSchema, Tool, ToolExecutor, ToolRegistry, ToolSchema};
pub use crate::types::{
    ContentBlock, GenerationConfig, Message, ModelResponse, Role, StopReason, ToolInput, Usage,
};
