//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, FilesCommand, ShowCommand, ValidateCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for inspecting HCL service configuration.
#[derive(Parser)]
#[command(name = "hclconf")]
#[command(version, about = "Load and validate HCL service configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Deployment label selecting which broker blocks are kept
    #[arg(
        long,
        short = 's',
        value_name = "LABEL",
        global = true,
        env = "HCLCONF_SELECTOR",
        default_value = "master"
    )]
    pub selector: String,

    /// Extension of configuration files in a directory
    #[arg(long, value_name = "EXT", global = true, env = "HCLCONF_EXTENSION")]
    pub extension: Option<String>,

    /// Maximum number of broker blocks per file
    #[arg(long, value_name = "COUNT", global = true, env = "HCLCONF_MAX_BROKERS")]
    pub max_brokers: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Load a configuration path and print the resolved config
    Show(ShowCommand),

    /// Check that a configuration path loads cleanly
    Validate(ValidateCommand),

    /// List the files a directory load would process
    Files(FilesCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
