//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for ask-your-ads
#[derive(Parser, Debug)]
#[command(name = "ask-your-ads")]
#[command(author, version, about = "Marketing dashboard with an AI analytics copilot")]
#[command(long_about = r#"
ask-your-ads shows per-platform ad KPIs and answers questions about them.

Each question walks a fallback chain until one service answers:
1. Tool service: MCP session against the analytics tool server
2. Hosted LLM:   Mistral chat completion grounded on the KPI table
3. Backend:      the api-backend /ai/query endpoint

Configuration files are loaded from (in priority order):
1. ASKADS_* env     e.g. ASKADS_BACKEND__BASE_URL
2. --config <path>  Explicit config file
3. ./askads.toml    Project-level config
4. ~/.config/ask-your-ads/config.toml   Global config

Example:
  ask-your-ads summary
  ask-your-ads ask "Which platform has the best ROAS?"
  ask-your-ads chat
  ask-your-ads serve --bind 0.0.0.0:3000
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask the copilot one question
    Ask {
        /// The question about your ad performance
        question: String,
    },

    /// Interactive copilot session
    Chat,

    /// Print the KPI summary table
    Summary {
        /// Emit raw JSON rows instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Serve the partner webhook endpoint
    Serve {
        /// Listen address (overrides `webhook.bind`)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
}
