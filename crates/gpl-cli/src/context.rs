//! Working-directory context shared by all commands

use std::path::Path;

use gpl_fs::NormalizedPath;
use gpl_project::{ProjectLayout, SETTINGS_FILE, Settings};

use crate::error::Result;

/// Settings and resolved file locations for one working directory.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Directory the tool runs in; relative paths resolve against it
    pub root: NormalizedPath,
    pub settings: Settings,
    pub layout: ProjectLayout,
}

impl ProjectContext {
    /// Build the context for `root`.
    ///
    /// An explicit `config` file must exist; otherwise `<root>/gpl.toml` is
    /// used when present and defaults apply when it is not.
    pub fn load(root: &Path, config: Option<&Path>) -> Result<Self> {
        let root = NormalizedPath::new(root);
        let settings = match config {
            Some(path) => Settings::load_required(&NormalizedPath::new(path))?,
            None => Settings::load(&root.join(SETTINGS_FILE))?,
        };
        tracing::debug!(root = %root, ?settings, "Loaded settings");
        Ok(Self::with_settings(root, settings))
    }

    pub fn with_settings(root: NormalizedPath, settings: Settings) -> Self {
        let layout = ProjectLayout::resolve(&root, &settings);
        Self {
            root,
            settings,
            layout,
        }
    }

    /// Resolve a user-supplied path against the working directory.
    pub fn resolve(&self, path: &str) -> NormalizedPath {
        self.root.resolve(path)
    }
}
