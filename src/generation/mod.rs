//! Answer generation over a model client and optional tools.

pub mod extract;
pub mod generator;

pub use extract::{extract_text, FALLBACK_RESPONSE};
pub use generator::{GenerateRequest, GenerationOutcome, Generator, TOOL_ERROR_PREFIX};
