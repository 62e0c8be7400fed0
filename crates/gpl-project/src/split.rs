//! Split a concatenated source into one file per module

use gpl_fs::{NormalizedPath, io};
use gpl_modules::{ModuleUnit, parse_modules, write_module};

use crate::manifest::ProjectManifest;
use crate::report::{ModuleOutcome, SplitReport};
use crate::settings::{ProjectLayout, Settings};
use crate::{Error, Result};

/// Options for [`split_file`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitOptions {
    /// Scan and report without writing files or the manifest
    pub dry_run: bool,
}

/// Write every module of `content` to `output_dir` and register each
/// written file with `manifest`.
///
/// A module that fails to write is reported as [`ModuleOutcome::Failed`],
/// left out of the manifest, and does not stop the remaining modules.
/// `output_dir` must already exist.
pub fn split_source(
    content: &str,
    output_dir: &NormalizedPath,
    manifest: &mut ProjectManifest,
) -> Vec<ModuleOutcome> {
    parse_modules(content)
        .iter()
        .map(|unit| write_one(unit, output_dir, manifest))
        .collect()
}

fn write_one(unit: &ModuleUnit, output_dir: &NormalizedPath, manifest: &mut ProjectManifest) -> ModuleOutcome {
    let file = unit.file_name();
    match write_module(output_dir, unit) {
        Ok(_) => {
            manifest.add_source(file.as_str());
            ModuleOutcome::Written {
                module: unit.name.clone(),
                file,
            }
        }
        Err(e) => {
            tracing::error!(module = %unit.name, error = %e, "Failed to write module");
            ModuleOutcome::Failed {
                module: unit.name.clone(),
                file,
                error: e.to_string(),
            }
        }
    }
}

/// Split `input` into the layout's split directory and update its manifest.
///
/// The existing manifest is loaded first so earlier registrations survive;
/// modules found in `input` are added and the manifest is saved in full.
///
/// # Errors
///
/// Fails without saving the manifest when the existing manifest cannot be
/// read, the split directory cannot be created, or `input` cannot be read.
/// Fails after writing the modules when the manifest cannot be saved.
pub fn split_file(
    input: &NormalizedPath,
    layout: &ProjectLayout,
    settings: &Settings,
    options: SplitOptions,
) -> Result<SplitReport> {
    let mut manifest = ProjectManifest::with_defaults(
        layout.split_manifest.clone(),
        settings.project.name.as_str(),
        settings.project.start.as_str(),
    );
    manifest.load()?;

    if !options.dry_run {
        io::ensure_dir(&layout.split_dir).map_err(|source| Error::OutputDirectory {
            path: layout.split_dir.to_native(),
            source,
        })?;
    }

    let content = io::read_text(input).map_err(|source| Error::InputUnreadable {
        path: input.to_native(),
        source,
    })?;
    tracing::debug!(input = %input, bytes = content.len(), "Read source");

    let modules = if options.dry_run {
        parse_modules(&content)
            .into_iter()
            .map(|unit| ModuleOutcome::Planned {
                file: unit.file_name(),
                module: unit.name,
                start_line: unit.start_line,
                end_line: unit.end_line,
            })
            .collect()
    } else {
        let outcomes = split_source(&content, &layout.split_dir, &mut manifest);
        manifest.save()?;
        outcomes
    };

    Ok(SplitReport {
        input: input.to_string(),
        output_dir: layout.split_dir.to_string(),
        manifest: layout.split_manifest.to_string(),
        dry_run: options.dry_run,
        modules,
    })
}
