//! FERA Mentor terminal client.
//!
//! Binary name: `fera`
//!
//! Loads `.env` files, parses CLI arguments, initializes tracing, then
//! dispatches to the chat loop or a one-shot command.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing::warn;

use fera_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before Cli::parse() so `env = "..."` fallbacks see .env values
    let dotenv_failures = fera_infra::config::load_dotenv();

    let cli = Cli::parse();

    init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    for (path, err) in dotenv_failures {
        warn!(path = %path.display(), error = %err, "Failed to parse .env file");
    }

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let command = cli.command.clone().unwrap_or(Commands::Chat);

    // Shell completions don't need configuration
    if let Commands::Completions { shell } = command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(shell, &mut cmd, "fera", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::load(&cli).await?;

    match command {
        Commands::Chat => cli::chat::loop_runner::run_chat_loop(&state).await,
        Commands::Ask { message } => cli::ask::ask(&state, &message, cli.json).await,
        Commands::Config => cli::config::show_config(&state, cli.json),
        Commands::Completions { .. } => Ok(()),
    }
}
