//! Syllabus: course-material answers with bounded tool rounds
//!
//! Drives a single user query through model calls and sequential tool
//! execution until the model produces a text answer. Retrieval, session
//! history, and the concrete tools live elsewhere; this crate sequences them.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use syllabus::prelude::*;
//! use syllabus::provider::anthropic::AnthropicClient;
//!
//! # async fn example() -> syllabus::error::Result<()> {
//! let config = SyllabusConfig::load()?;
//! let client = Arc::new(AnthropicClient::from_config(&config)?);
//! let generator = Generator::new(client, config.generation_config());
//!
//! let tools = ToolRegistry::new();
//! let schemas = tools.tool_definitions();
//! let answer = generator
//!     .generate("What is covered in lesson 2?", None, Some(&schemas), Some(&tools))
//!     .await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod generation;
pub mod prelude;
pub mod provider;
pub mod tools;
pub mod types;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
