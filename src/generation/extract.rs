//! Final answer extraction.

use crate::types::ModelResponse;

/// Answer used when the final response carries no text.
pub const FALLBACK_RESPONSE: &str = "I was unable to generate a response.";

/// The first text block of a response, or [`FALLBACK_RESPONSE`].
pub fn extract_text(response: &ModelResponse) -> &str {
    response
        .content
        .iter()
        .find_map(|block| block.as_text())
        .unwrap_or(FALLBACK_RESPONSE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentBlock, StopReason, ToolInput};

    #[test]
    fn first_text_block_wins() {
        let response = ModelResponse::new(
            StopReason::EndTurn,
            vec![
                ContentBlock::tool_use("t1", "search", ToolInput::new()),
                ContentBlock::text("The answer"),
                ContentBlock::text("Something else"),
            ],
        );
        assert_eq!(extract_text(&response), "The answer");
    }

    #[test]
    fn empty_content_falls_back() {
        let response = ModelResponse::new(StopReason::EndTurn, vec![]);
        assert_eq!(extract_text(&response), FALLBACK_RESPONSE);
    }

    #[test]
    fn tool_use_only_falls_back() {
        let response = ModelResponse::new(
            StopReason::ToolUse,
            vec![ContentBlock::tool_use("t1", "search", ToolInput::new())],
        );
        assert_eq!(extract_text(&response), "I was unable to generate a response.");
    }

    #[test]
    fn empty_text_block_is_still_text() {
        let response = ModelResponse::new(StopReason::EndTurn, vec![ContentBlock::text("")]);
        assert_eq!(extract_text(&response), "");
    }
}
