//! Human-readable rendering of operation reports

use colored::Colorize;
use gpl_project::{MergeReport, ModuleOutcome, SourceOutcome, SplitReport};

pub fn print_split_report(report: &SplitReport) {
    println!();
    if report.dry_run {
        println!("{} {}", "Dry run:".yellow().bold(), report.input);
    } else {
        println!("{} {}", "Split".bold(), report.input);
    }

    if report.modules.is_empty() {
        println!("  {}", "No modules found.".dimmed());
    }
    for outcome in &report.modules {
        let module = outcome.module().cyan();
        let file = outcome.file().dimmed();
        match outcome {
            ModuleOutcome::Written { .. } => {
                println!("  {} {:<20} {}", "+".green(), module, file);
            }
            ModuleOutcome::Planned {
                start_line,
                end_line,
                ..
            } => {
                println!(
                    "  {} {:<20} {} (lines {}-{})",
                    "~".yellow(),
                    module,
                    file,
                    start_line,
                    end_line
                );
            }
            ModuleOutcome::Failed { error, .. } => {
                println!("  {} {:<20} {} {}", "x".red().bold(), module, file, error.red());
            }
        }
    }

    println!();
    let written = report.written().count();
    let failed = report.failed().count();
    if report.dry_run {
        println!(
            "{} {} modules would be written to {}",
            "Total:".dimmed(),
            report.modules.len(),
            report.output_dir
        );
    } else if report.is_complete() {
        println!(
            "{} {} modules written, manifest saved to {}",
            "Done:".green().bold(),
            written,
            report.manifest
        );
    } else {
        println!(
            "{} {} modules written, {} failed, manifest saved to {}",
            "Partial:".yellow().bold(),
            written,
            failed,
            report.manifest
        );
    }
}

pub fn print_merge_report(report: &MergeReport) {
    println!();
    println!("{} {}", "Merge".bold(), report.manifest);

    for outcome in &report.sources {
        match outcome {
            SourceOutcome::Merged { file, bytes } => {
                println!("  {} {:<28} {}", "+".green(), file.cyan(), format!("{bytes} bytes").dimmed());
            }
            SourceOutcome::Missing { file, companion: true } => {
                println!("  {} {:<28} {}", "-".yellow(), file.cyan(), "not found, skipped".yellow());
            }
            SourceOutcome::Missing { file, companion: false } => {
                println!("  {} {:<28} {}", "x".red().bold(), file.cyan(), "not found, skipped".red());
            }
        }
    }

    println!();
    let status = if report.is_complete() {
        "Done:".green().bold()
    } else {
        "Partial:".yellow().bold()
    };
    println!(
        "{} {} modules merged into {}, {} skipped",
        status,
        report.merged().count(),
        report.merged_file,
        report.missing().count()
    );
    println!("{} {}", "Manifest:".dimmed(), report.merged_manifest);
}
