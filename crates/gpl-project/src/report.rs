//! Outcome reports for split and merge
//!
//! Both operations keep going when a single module fails, so the caller
//! learns about per-module results from these reports rather than from the
//! returned error.

use serde::{Deserialize, Serialize};

/// What happened to one module during a split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ModuleOutcome {
    /// Artifact written and registered in the manifest
    Written { module: String, file: String },
    /// Dry run: artifact that would be written
    Planned {
        module: String,
        file: String,
        start_line: usize,
        end_line: usize,
    },
    /// Artifact could not be written; not registered
    Failed {
        module: String,
        file: String,
        error: String,
    },
}

impl ModuleOutcome {
    pub fn module(&self) -> &str {
        match self {
            Self::Written { module, .. }
            | Self::Planned { module, .. }
            | Self::Failed { module, .. } => module,
        }
    }

    pub fn file(&self) -> &str {
        match self {
            Self::Written { file, .. } | Self::Planned { file, .. } | Self::Failed { file, .. } => {
                file
            }
        }
    }
}

/// Report from a split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitReport {
    /// The source file that was split
    pub input: String,
    /// Directory receiving the module files
    pub output_dir: String,
    /// Manifest that was saved (or would be, on a dry run)
    pub manifest: String,
    /// Whether anything was written
    pub dry_run: bool,
    /// One entry per module found, in source order
    pub modules: Vec<ModuleOutcome>,
}

impl SplitReport {
    pub fn written(&self) -> impl Iterator<Item = &ModuleOutcome> {
        self.modules
            .iter()
            .filter(|m| matches!(m, ModuleOutcome::Written { .. }))
    }

    pub fn failed(&self) -> impl Iterator<Item = &ModuleOutcome> {
        self.modules
            .iter()
            .filter(|m| matches!(m, ModuleOutcome::Failed { .. }))
    }

    /// True when no module failed.
    pub fn is_complete(&self) -> bool {
        self.failed().next().is_none()
    }
}

/// What happened to one manifest entry during a merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceOutcome {
    /// Module content appended to the merged source
    Merged { file: String, bytes: usize },
    /// Module file not found; nothing appended
    Missing { file: String, companion: bool },
}

/// Report from a merge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeReport {
    /// Manifest that drove the merge
    pub manifest: String,
    /// The merged source that was written
    pub merged_file: String,
    /// The fresh manifest written next to it
    pub merged_manifest: String,
    /// One entry per `ProjectSource` line, in manifest order
    pub sources: Vec<SourceOutcome>,
}

impl MergeReport {
    pub fn merged(&self) -> impl Iterator<Item = &SourceOutcome> {
        self.sources
            .iter()
            .filter(|s| matches!(s, SourceOutcome::Merged { .. }))
    }

    pub fn missing(&self) -> impl Iterator<Item = &SourceOutcome> {
        self.sources
            .iter()
            .filter(|s| matches!(s, SourceOutcome::Missing { .. }))
    }

    /// True when every entry other than a companion was merged.
    pub fn is_complete(&self) -> bool {
        self.sources
            .iter()
            .all(|s| !matches!(s, SourceOutcome::Missing { companion: false, .. }))
    }
}
