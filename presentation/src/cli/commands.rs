//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Output format for comparison results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Formatted panels, one per provider
    Full,
    /// JSON output
    Json,
}

/// CLI arguments for prompt-arena
#[derive(Parser, Debug)]
#[command(name = "prompt-arena")]
#[command(author, version, about = "Compare AI provider responses side by side")]
#[command(long_about = r#"
prompt-arena sends one prompt to multiple AI providers (Gemini, ChatGPT,
Grok, Blackbox) in parallel and renders each provider's response in its own
panel. A provider failure — missing API key, upstream error — fills that
provider's panel without affecting the others.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./arena.toml        Project-level config
3. ~/.config/prompt-arena/config.toml   Global config

Credentials come from environment variables (GEMINI_API_KEY,
OPENAI_API_KEY, BLACKBOX_API_KEY) or the config file.

Example:
  prompt-arena "Explain the borrow checker in one paragraph"
  prompt-arena -p gemini -p openai "Compare yourself to the other one"
  prompt-arena --chat
  prompt-arena --serve --bind 0.0.0.0:8316
"#)]
pub struct Cli {
    /// The prompt to dispatch (not required in chat or serve mode)
    pub prompt: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Providers to dispatch to (can be specified multiple times)
    #[arg(short, long, value_name = "PROVIDER")]
    pub provider: Vec<String>,

    /// Run the HTTP proxy server instead of a one-shot dispatch
    #[arg(long)]
    pub serve: bool,

    /// Bind address for --serve (overrides config)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
