//! Interactive menu
//!
//! Loops over split and merge until the user exits. A failed operation is
//! printed and the menu is shown again.

use colored::Colorize;
use gpl_fs::{MODULE_EXTENSION, NormalizedPath, io};
use gpl_project::SplitOptions;

use crate::commands::{run_merge, run_split};
use crate::context::ProjectContext;
use crate::error::{CliError, Result};
use crate::prompt::Prompt;

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Split,
    Merge,
    Exit,
}

const MENU: &[(MenuChoice, &str)] = &[
    (MenuChoice::Split, "Split a source into modules"),
    (MenuChoice::Merge, "Merge modules into one source"),
    (MenuChoice::Exit, "Exit"),
];

/// Run the menu until the user picks Exit or cancels.
pub fn run_menu(ctx: &ProjectContext, prompt: &mut dyn Prompt) -> Result<()> {
    let items: Vec<String> = MENU.iter().map(|(_, label)| label.to_string()).collect();

    loop {
        println!();
        let choice = match prompt.select("What would you like to do?", &items)? {
            Some(index) => MENU.get(index).map_or(MenuChoice::Exit, |(choice, _)| *choice),
            None => MenuChoice::Exit,
        };

        let outcome = match choice {
            MenuChoice::Split => run_split(ctx, None, prompt, SplitOptions::default(), false).map(|_| ()),
            MenuChoice::Merge => run_merge(ctx, false).map(|_| ()),
            MenuChoice::Exit => return Ok(()),
        };

        if let Err(e) = outcome {
            tracing::debug!(error = ?e, "Menu action failed");
            eprintln!("{}: {}", "error".red().bold(), e);
        }
    }
}

/// Ask the user to pick one of the `.gpl` files in the working directory.
pub fn select_input_file(ctx: &ProjectContext, prompt: &mut dyn Prompt) -> Result<NormalizedPath> {
    let files = io::list_files_with_extension(&ctx.root, MODULE_EXTENSION)?;
    if files.is_empty() {
        return Err(CliError::user(format!(
            "No .{MODULE_EXTENSION} files found in {}",
            ctx.root
        )));
    }

    let index = prompt
        .select("Select the source file to split", &files)?
        .ok_or_else(|| CliError::user("No source file selected"))?;
    let file = files
        .get(index)
        .ok_or_else(|| CliError::user("No source file selected"))?;
    Ok(ctx.root.join(file))
}
