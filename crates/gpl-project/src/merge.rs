//! Merge module files back into a single source
//!
//! Merge walks the manifest's raw lines instead of a loaded
//! [`ProjectManifest`], so the merged order is the on-disk line order.

use gpl_fs::io;

use crate::manifest::{ProjectManifest, source_names};
use crate::report::{MergeReport, SourceOutcome};
use crate::settings::{ProjectLayout, Settings};
use crate::{Error, Result};

const SEPARATOR: &str = "\r\n";

/// File names of the `ProjectSource` entries in `manifest`, in line order.
///
/// Uses the same extraction as [`ProjectManifest::parse`], so both agree on
/// what a manifest lists.
///
/// # Example
/// ```
/// use gpl_project::source_entries;
///
/// let manifest = "ProjectBegin\r\nProjectSource=\"B.gpl\"  ' main\r\n  ProjectSource = \"A.gpl\"\r\nProjectEnd";
/// assert_eq!(source_entries(manifest), vec!["B.gpl", "A.gpl"]);
/// ```
pub fn source_entries(manifest: &str) -> Vec<&str> {
    source_names(manifest).collect()
}

/// Merge the modules listed in the layout's split manifest.
///
/// Each listed module is appended followed by `\r\n`. Missing module files
/// are reported and skipped. The merged source and a fresh manifest naming
/// it are written to the merge directory.
///
/// # Errors
///
/// Fails when the merge directory cannot be created, the split manifest is
/// missing or unreadable, a module exists but cannot be read, or either
/// output file cannot be written.
pub fn merge_project(layout: &ProjectLayout, settings: &Settings) -> Result<MergeReport> {
    io::ensure_dir(&layout.merge_dir).map_err(|source| Error::OutputDirectory {
        path: layout.merge_dir.to_native(),
        source,
    })?;

    let manifest_text = io::read_text_optional(&layout.split_manifest)?.ok_or_else(|| {
        Error::ManifestNotFound {
            path: layout.split_manifest.to_native(),
        }
    })?;

    let mut merged = String::new();
    let mut sources = Vec::new();
    for file in source_entries(&manifest_text) {
        let module_path = layout.split_dir.join(file);
        match io::read_text_optional(&module_path)? {
            Some(content) => {
                merged.push_str(&content);
                merged.push_str(SEPARATOR);
                tracing::debug!(file, bytes = content.len(), "Merged module");
                sources.push(SourceOutcome::Merged {
                    file: file.to_string(),
                    bytes: content.len(),
                });
            }
            None => {
                let companion = settings.is_companion(file);
                if companion {
                    tracing::warn!(file, "Companion module not found; skipping");
                } else {
                    tracing::error!(path = %module_path, "Module file not found; skipping");
                }
                sources.push(SourceOutcome::Missing {
                    file: file.to_string(),
                    companion,
                });
            }
        }
    }

    io::write_text(&layout.merged_source, &merged)?;
    tracing::info!(path = %layout.merged_source, "Wrote merged source");

    let mut fresh = ProjectManifest::with_defaults(
        layout.merged_manifest.clone(),
        settings.project.name.as_str(),
        settings.project.start.as_str(),
    );
    fresh.add_source(layout.merged_file_name());
    if settings.merge.keep_companions {
        for companion in &settings.merge.companions {
            fresh.add_source(companion.as_str());
        }
    }
    fresh.save()?;

    Ok(MergeReport {
        manifest: layout.split_manifest.to_string(),
        merged_file: layout.merged_source.to_string(),
        merged_manifest: layout.merged_manifest.to_string(),
        sources,
    })
}
