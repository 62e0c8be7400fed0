//! Merge command

use gpl_project::{MergeReport, merge_project};

use crate::context::ProjectContext;
use crate::error::Result;
use crate::output::print_merge_report;

/// Run the merge command.
pub fn run_merge(ctx: &ProjectContext, json: bool) -> Result<MergeReport> {
    tracing::debug!(manifest = %ctx.layout.split_manifest, "Running merge");
    let report = merge_project(&ctx.layout, &ctx.settings)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_merge_report(&report);
    }
    Ok(report)
}
