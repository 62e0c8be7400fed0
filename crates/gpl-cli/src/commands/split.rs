//! Split command

use gpl_project::{SplitOptions, SplitReport, split_file};

use crate::context::ProjectContext;
use crate::error::Result;
use crate::interactive::select_input_file;
use crate::output::print_split_report;
use crate::prompt::Prompt;

/// Run the split command.
///
/// Without `input` the user picks one of the `.gpl` files in the working
/// directory. Modules that fail to write are reported but do not fail the
/// command.
pub fn run_split(
    ctx: &ProjectContext,
    input: Option<&str>,
    prompt: &mut dyn Prompt,
    options: SplitOptions,
    json: bool,
) -> Result<SplitReport> {
    let input = match input {
        Some(path) => ctx.resolve(path),
        None => select_input_file(ctx, prompt)?,
    };
    tracing::debug!(input = %input, dry_run = options.dry_run, "Running split");

    let report = split_file(&input, &ctx.layout, &ctx.settings, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_split_report(&report);
    }
    Ok(report)
}
