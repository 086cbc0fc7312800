//! Generation settings.

use bon::Builder;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_TEMPERATURE: f64 = 0.0;
pub const DEFAULT_MAX_TOKENS: u32 = 800;
pub const DEFAULT_MAX_TOOL_ROUNDS: usize = 2;

/// Deployment-wide parameters for every model call.
///
/// Built once at startup and shared by reference; the generator never
/// mutates it.
///
/// ```
/// use syllabus::types::GenerationConfig;
///
/// let config = GenerationConfig::builder()
///     .model_id("claude-sonnet-4-20250514")
///     .max_tool_rounds(3)
///     .build();
/// assert_eq!(config.max_tokens, 800);
/// ```
#[derive(Debug, Clone, Builder, Serialize, Deserialize, PartialEq)]
pub struct GenerationConfig {
    #[builder(into)]
    pub model_id: String,
    #[builder(default = DEFAULT_TEMPERATURE)]
    pub temperature: f64,
    #[builder(default = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,
    /// Upper bound on tool rounds per query.
    #[builder(default = DEFAULT_MAX_TOOL_ROUNDS)]
    pub max_tool_rounds: usize,
}

impl GenerationConfig {
    /// Defaults for everything except the model.
    pub fn new(model_id: impl Into<String>) -> Self {
        Self::builder().model_id(model_id).build()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

/// How the model may select tools.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolChoice {
    Auto,
    Any,
    Tool { name: String },
}
