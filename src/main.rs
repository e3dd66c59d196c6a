//! ollama-commit - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ollama_commit::config::DEFAULT_MODEL;
use ollama_commit::{OllamaClient, Outcome, SystemGit, run};

/// Commit and push staged changes with a message written by a local Ollama model.
#[derive(Parser, Debug)]
#[command(name = "ollama-commit")]
#[command(about = "Commit and push staged changes with a message written by a local Ollama model")]
#[command(version)]
struct Cli {
    /// Ollama model name
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays readable; RUST_LOG overrides the level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let git = SystemGit::new();
    let client = OllamaClient::from_env();

    match run(&git, &client, &cli.model).await {
        Ok(Outcome::NothingToCommit) => {
            println!("No changes to commit");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Pushed { .. }) => {
            println!("Successfully committed and pushed changes!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}
