//! CLI command definitions

use clap::{Parser, Subcommand};
use kagi_domain::{SummaryEngine, SummaryType};
use std::path::PathBuf;

/// CLI arguments for kagi-tools
#[derive(Parser, Debug)]
#[command(name = "kagi-tools")]
#[command(author, version, about = "Kagi web search and summarizer tools")]
#[command(long_about = r#"
kagi-tools runs the `web_search` and `summarize` tools against the Kagi API
and prints their results the way an agent host would see them.

The API key is read from the KAGI_API_KEY environment variable, or from
`kagi.api_key` in a configuration file.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./kagi-tools.toml      Project-level config
3. ~/.config/kagi-tools/config.toml   Global config

Example:
  kagi-tools search "rust 2024 edition" "let chains stabilization"
  kagi-tools --expanded summarize https://blog.rust-lang.org/ --type takeaway
  kagi-tools schema
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Show individual results or summary lines
    #[arg(short, long, global = true)]
    pub expanded: bool,

    /// Print the raw tool result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

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
    /// Search the web with one or more queries
    Search {
        /// Search queries
        #[arg(required = true, value_name = "QUERY")]
        queries: Vec<String>,
    },

    /// Summarize a document by URL
    Summarize {
        /// URL of the document
        url: String,

        /// Summary style
        #[arg(long = "type", value_name = "TYPE")]
        summary_type: Option<SummaryType>,

        /// Summarization engine
        #[arg(long, value_name = "ENGINE")]
        engine: Option<SummaryEngine>,

        /// Target language code (e.g. EN, DE, JA)
        #[arg(long = "lang", value_name = "CODE")]
        target_language: Option<String>,
    },

    /// Print the JSON schema of every tool
    Schema,
}
