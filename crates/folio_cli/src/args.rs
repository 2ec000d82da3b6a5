//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Browse a portfolio project catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Saved content API response (GraphQL envelope or JSON array).
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    /// Config file. Defaults to ~/.folio/config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off without one.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects, newest first
    List {
        /// Category name, or `All`
        #[arg(long, short)]
        filter: Option<String>,
    },
    /// Show one project by slug
    Show { slug: String },
    /// List filter choices
    Filters,
    /// Print the site route table
    Routes,
    /// Check core wiring
    Ping,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
