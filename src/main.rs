//! Binary entry point for context-engineering-mcp.
//!
//! Runs the MCP server over stdio, or serves templates directly on the
//! command line.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// CLI output goes to stdout/stderr directly
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use clap::{Parser, Subcommand};
use context_engineering_mcp::ServerConfig;
use context_engineering_mcp::observability::{self, ObservabilityConfig};
use std::path::PathBuf;
use std::process::ExitCode;

/// Serves context-engineering templates to MCP clients.
#[derive(Parser)]
#[command(name = "context-engineering-mcp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "CONTEXT_MCP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server over stdio.
    Serve,

    /// Print one template.
    Get {
        /// Registry: protocols, cells, organs or programs.
        registry: String,

        /// Template key (case and separators are ignored).
        key: String,

        /// Shell name when the protocol key is not built in.
        #[arg(long)]
        name: Option<String>,

        /// Shell intent when the protocol key is not built in.
        #[arg(long)]
        intent: Option<String>,
    },

    /// List template keys.
    List {
        /// Registry to list; all when omitted.
        registry: Option<String>,
    },

    /// Recommend a template for a task description.
    Classify {
        /// The task to route.
        task: String,
    },

    /// Show configuration.
    Config {
        /// Print the effective configuration.
        #[arg(long)]
        show: bool,
    },
}

/// Main entry point.
fn main() -> ExitCode {
    // A missing .env file is normal
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match ServerConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    let mut obs_config = ObservabilityConfig::from_server_config(&config, cli.verbose);
    // Only the long-running server exposes a metrics endpoint
    obs_config.metrics.enabled &= matches!(cli.command, Commands::Serve);
    if let Err(e) = observability::init(obs_config) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(cli: Cli, config: ServerConfig) -> context_engineering_mcp::Result<()> {
    match cli.command {
        Commands::Serve => commands::cmd_serve(&config),
        Commands::Get {
            registry,
            key,
            name,
            intent,
        } => commands::cmd_get(&registry, &key, name, intent),
        Commands::List { registry } => commands::cmd_list(registry.as_deref()),
        Commands::Classify { task } => commands::cmd_classify(&task),
        Commands::Config { show } => commands::cmd_config(&config, show),
    }
}
