//! GPL project tool
//!
//! Splits a merged controller source into per-module files and merges them
//! back in manifest order.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;
mod output;
mod prompt;

use clap::Parser;
use colored::Colorize;
use gpl_project::SplitOptions;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use context::ProjectContext;
use error::Result;
use prompt::TerminalPrompt;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{} tracing subscriber already set", "warning:".yellow().bold());
        }
        tracing::debug!("Verbose mode enabled");
    }

    let cwd = std::env::current_dir()?;
    let ctx = ProjectContext::load(&cwd, cli.config.as_deref())?;
    let mut prompt = TerminalPrompt;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Split {
            input,
            dry_run,
            json,
        } => {
            commands::run_split(
                &ctx,
                input.as_deref(),
                &mut prompt,
                SplitOptions { dry_run },
                json,
            )?;
        }
        Commands::Merge { json } => {
            commands::run_merge(&ctx, json)?;
        }
        Commands::List => {
            commands::run_list(&ctx)?;
        }
        Commands::Menu => interactive::run_menu(&ctx, &mut prompt)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_cli_error_user() {
        let error = crate::error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }
}
