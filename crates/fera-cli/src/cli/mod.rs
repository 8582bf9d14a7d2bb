//! CLI command definitions for the `fera` binary.
//!
//! Uses clap derive macros for argument parsing. With no subcommand, `fera`
//! starts an interactive chat session.

pub mod ask;
pub mod chat;
pub mod config;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use fera_infra::config::ConfigOverrides;

/// Talk to the FERA Mentor about turning your knowledge into a mentorship.
#[derive(Parser)]
#[command(name = "fera", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (printed to stdout).
    #[arg(long, global = true, conflicts_with = "json")]
    pub otel: bool,

    /// Path to config.toml (default: ~/.fera/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Settings that take precedence over the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct OverrideArgs {
    /// Model identifier sent to the backend.
    #[arg(long, env = "FERA_MODEL", global = true)]
    pub model: Option<String>,

    /// Sampling temperature (0.0 - 2.0).
    #[arg(long, env = "FERA_TEMPERATURE", global = true)]
    pub temperature: Option<f64>,

    /// Base URL of an OpenAI-compatible endpoint.
    #[arg(long, env = "FERA_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Number of user+assistant exchanges kept as context.
    #[arg(long, env = "FERA_HISTORY_WINDOW", global = true)]
    pub history_window: Option<usize>,

    /// User messages after which the call-to-action appears.
    #[arg(long, env = "FERA_CTA_THRESHOLD", global = true)]
    pub cta_threshold: Option<u32>,

    /// Delay between characters when typing out replies (0 disables).
    #[arg(long, global = true, value_name = "MS")]
    pub typing_delay_ms: Option<u64>,
}

impl From<&OverrideArgs> for ConfigOverrides {
    fn from(args: &OverrideArgs) -> Self {
        ConfigOverrides {
            model: args.model.clone(),
            temperature: args.temperature,
            base_url: args.base_url.clone(),
            history_window: args.history_window,
            cta_threshold: args.cta_threshold,
            typing_delay_ms: args.typing_delay_ms,
        }
    }
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Start an interactive mentoring session (default).
    Chat,

    /// Send a single message and print the reply.
    Ask {
        /// Message to send.
        message: String,
    },

    /// Show the effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
