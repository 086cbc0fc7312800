//! Syllabus CLI binary entry point.

use clap::Parser;
use syllabus::cli::{ask, tools_json, Cli, Commands};
use syllabus::config::SyllabusConfig;
use syllabus::tools::ToolRegistry;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    // Concrete tools are registered by embedding services, not by this binary.
    let tools = ToolRegistry::new();

    let result = match cli.command {
        Commands::Ask(args) => match SyllabusConfig::load_from(cli.config.as_deref()) {
            Ok(config) => ask(config, &args, &tools).await.map(|answer| println!("{answer}")),
            Err(e) => Err(e),
        },
        Commands::Tools => tools_json(&tools).map(|json| println!("{json}")),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
