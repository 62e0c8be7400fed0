//! Tool settings (`gpl.toml`) and the directory layout derived from them

use gpl_fs::{ConfigStore, NormalizedPath, ProjectPath};
use serde::Deserialize;

use crate::Result;
use crate::manifest::{DEFAULT_PROJECT_NAME, DEFAULT_START_MODULE};

/// Default settings file name, looked up in the working directory.
pub const SETTINGS_FILE: &str = "gpl.toml";

/// Controller-generated configuration modules that projects reference
/// without keeping them next to the user modules.
pub const DEFAULT_COMPANIONS: &[&str] = &["__init__IOConfig__.gpl", "__init__RobotConfig__.gpl"];

/// `[project]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectSection {
    /// `ProjectName` written into new manifests
    pub name: String,
    /// `ProjectStart` written into new manifests
    pub start: String,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROJECT_NAME.to_string(),
            start: DEFAULT_START_MODULE.to_string(),
        }
    }
}

/// `[paths]` section; relative paths resolve against the working directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PathsSection {
    pub split_dir: String,
    pub merge_dir: String,
    pub manifest: String,
    pub merged_file: String,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            split_dir: ProjectPath::SplitDir.to_string(),
            merge_dir: ProjectPath::MergeDir.to_string(),
            manifest: ProjectPath::Manifest.to_string(),
            merged_file: ProjectPath::MergedSource.to_string(),
        }
    }
}

/// `[merge]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MergeSection {
    /// Source names whose absence during merge is expected
    pub companions: Vec<String>,
    /// Whether the merged manifest also lists the companions
    pub keep_companions: bool,
}

impl Default for MergeSection {
    fn default() -> Self {
        Self {
            companions: DEFAULT_COMPANIONS.iter().map(|s| s.to_string()).collect(),
            keep_companions: false,
        }
    }
}

/// Settings loaded from `gpl.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub project: ProjectSection,
    pub paths: PathsSection,
    pub merge: MergeSection,
}

impl Settings {
    /// Load settings from `path`, using defaults when the file is absent.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let settings = ConfigStore::new().load_or_default(path)?;
        Ok(settings)
    }

    /// Load settings from `path`, which must exist.
    pub fn load_required(path: &NormalizedPath) -> Result<Self> {
        let settings = ConfigStore::new().load(path)?;
        Ok(settings)
    }

    pub fn is_companion(&self, file_name: &str) -> bool {
        self.merge.companions.iter().any(|c| c == file_name)
    }
}

/// Concrete file locations for one working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Directory holding the per-module files
    pub split_dir: NormalizedPath,
    /// Manifest listing the per-module files
    pub split_manifest: NormalizedPath,
    /// Directory holding the merged output
    pub merge_dir: NormalizedPath,
    /// The merged source file
    pub merged_source: NormalizedPath,
    /// Manifest written next to the merged source
    pub merged_manifest: NormalizedPath,
}

impl ProjectLayout {
    /// Resolve the configured paths against `root`.
    pub fn resolve(root: &NormalizedPath, settings: &Settings) -> Self {
        let paths = &settings.paths;
        let split_dir = root.resolve(&paths.split_dir);
        let merge_dir = root.resolve(&paths.merge_dir);
        Self {
            split_manifest: split_dir.join(&paths.manifest),
            merged_source: merge_dir.join(&paths.merged_file),
            merged_manifest: merge_dir.join(&paths.manifest),
            split_dir,
            merge_dir,
        }
    }

    /// File name of the merged source, as listed in the merged manifest.
    pub fn merged_file_name(&self) -> &str {
        self.merged_source.file_name().unwrap_or_default()
    }
}
