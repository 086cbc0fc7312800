//! Model responses as seen by the generator.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::message::ContentBlock;
use super::usage::Usage;

/// Why the model stopped producing output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    ToolUse,
    MaxTokens,
    StopSequence,
    Other,
}

impl StopReason {
    /// Map a provider stop reason string; anything unrecognised is `Other`.
    pub fn from_wire(value: Option<&str>) -> Self {
        value
            .and_then(|s| s.parse().ok())
            .unwrap_or(Self::Other)
    }
}

/// A complete, immutable response from the model client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelResponse {
    pub stop_reason: StopReason,
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Usage,
}

impl ModelResponse {
    pub fn new(stop_reason: StopReason, content: Vec<ContentBlock>) -> Self {
        Self {
            stop_reason,
            content,
            usage: Usage::default(),
        }
    }

    /// An `end_turn` response with a single text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(StopReason::EndTurn, vec![ContentBlock::text(text)])
    }

    pub fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = usage;
        self
    }

    /// Whether the model is asking for tools to be run.
    pub fn is_tool_use(&self) -> bool {
        self.stop_reason == StopReason::ToolUse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_reason_from_wire() {
        assert_eq!(StopReason::from_wire(Some("end_turn")), StopReason::EndTurn);
        assert_eq!(StopReason::from_wire(Some("tool_use")), StopReason::ToolUse);
        assert_eq!(StopReason::from_wire(Some("max_tokens")), StopReason::MaxTokens);
        assert_eq!(StopReason::from_wire(Some("pause_turn")), StopReason::Other);
        assert_eq!(StopReason::from_wire(None), StopReason::Other);
    }

    #[test]
    fn stop_reason_display_matches_wire() {
        assert_eq!(StopReason::ToolUse.to_string(), "tool_use");
    }
}
