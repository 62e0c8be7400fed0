//! List command for candidate source files

use colored::Colorize;
use gpl_fs::{MODULE_EXTENSION, io};

use crate::context::ProjectContext;
use crate::error::Result;

/// Run the list command: print the `.gpl` files in the working directory.
pub fn run_list(ctx: &ProjectContext) -> Result<Vec<String>> {
    let files = io::list_files_with_extension(&ctx.root, MODULE_EXTENSION)?;

    println!("{} {}", "Source files in".bold(), ctx.root);
    println!();
    if files.is_empty() {
        println!("  {}", format!("No .{MODULE_EXTENSION} files found.").dimmed());
    }
    for file in &files {
        println!("  {}", file.green());
    }
    Ok(files)
}
