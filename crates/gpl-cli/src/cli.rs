//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// GPL project tool - split a merged controller source into modules and back
#[derive(Parser, Debug)]
#[command(name = "gpl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to ./gpl.toml when present)
    #[arg(long, global = true, env = "GPL_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run; the interactive menu starts when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Split a merged source into one file per module
    ///
    /// Writes <split_dir>/<Module>.gpl for every module and updates
    /// <split_dir>/Project.gpr.
    ///
    /// Examples:
    ///   gpl split MergeCode.gpl      # Split the given file
    ///   gpl split                    # Choose a .gpl file interactively
    ///   gpl split Cell.gpl --dry-run # Show the modules without writing
    Split {
        /// Source file to split (prompts when omitted)
        input: Option<String>,

        /// Report what would be written without touching the disk
        #[arg(long)]
        dry_run: bool,

        /// Output the report as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Merge the modules listed in <split_dir>/Project.gpr into one source
    Merge {
        /// Output the report as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List the .gpl files in the working directory
    List,

    /// Start the interactive menu
    Menu,
}
