//! Command-line interface.
//!
//! The `syllabus` binary ships without concrete tools. A service that owns
//! course search can build its own binary around [`ask`] and [`tools_json`],
//! passing a populated [`ToolRegistry`].

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::config::SyllabusConfig;
use crate::error::SyllabusError;
use crate::generation::Generator;
use crate::provider::anthropic::AnthropicClient;
use crate::tools::{ToolExecutor, ToolRegistry};
use crate::util::timeout::with_timeout;

const TOOLS_NOTE: &str = "Tools are supplied by the embedding service. The stock binary registers none, \
so `ask` answers without tools and `tools` prints an empty list.";

/// Ask questions about course materials.
#[derive(Parser, Debug)]
#[command(
    name = "syllabus",
    version,
    about = "Course-material question answering",
    after_help = TOOLS_NOTE
)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a single question
    Ask(AskArgs),
    /// Print the schemas of the registered tools as JSON (none in the stock binary)
    Tools,
}

/// Arguments for `syllabus ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question to answer
    pub query: String,

    /// File containing prior conversation text
    #[arg(long)]
    pub history_file: Option<PathBuf>,

    /// Model override
    #[arg(short, long)]
    pub model: Option<String>,

    /// Tool round budget override
    #[arg(long)]
    pub max_tool_rounds: Option<usize>,

    /// Deadline for the whole query, in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

/// Answer one query with the given tools, applying argument overrides to `config`.
pub async fn ask(
    mut config: SyllabusConfig,
    args: &AskArgs,
    tools: &ToolRegistry,
) -> Result<String, SyllabusError> {
    if let Some(model) = &args.model {
        config.model = Some(model.clone());
    }
    if let Some(rounds) = args.max_tool_rounds {
        config.max_tool_rounds = Some(rounds);
    }
    if let Some(secs) = args.timeout_secs {
        config.timeout_secs = Some(secs);
    }

    let history = match &args.history_file {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => None,
    };

    let client = Arc::new(AnthropicClient::from_config(&config)?);
    let generator =
        Generator::new(client, config.generation_config()).with_instructions(config.instructions()?);
    let schemas = tools.tool_definitions();

    let call = generator.generate(&args.query, history.as_deref(), Some(&schemas), Some(tools));
    match config.timeout() {
        Some(deadline) => with_timeout(deadline, call).await,
        None => call.await,
    }
}

/// Schemas of the registered tools as pretty-printed JSON.
pub fn tools_json(tools: &ToolRegistry) -> Result<String, SyllabusError> {
    Ok(serde_json::to_string_pretty(&tools.tool_definitions())?)
}
