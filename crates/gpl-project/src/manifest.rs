//! Project manifest (`Project.gpr`) model
//!
//! The manifest is the controller IDE's project descriptor:
//!
//! ```text
//! '10/19/2026, 02:15:04 PM
//! ProjectBegin
//! ProjectName="MergeCode"
//! ProjectStart="MAIN"
//! ProjectSource="MAIN.gpl"
//! ProjectSource="Gripper.gpl"
//! ProjectEnd
//! ```
//!
//! Keys are extracted independently by pattern, so line order, indentation
//! and line-ending convention of an existing file do not matter. Saving
//! always rewrites the whole file.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, Local};
use gpl_fs::{NormalizedPath, io};
use regex::Regex;

use crate::Result;

/// Project name used when none is configured or loaded.
pub const DEFAULT_PROJECT_NAME: &str = "MergeCode";

/// Start module used when none is configured or loaded.
pub const DEFAULT_START_MODULE: &str = "MAIN";

const COMMENT_MARKER: char = '\'';
const LINE_END: &str = "\r\n";

static PROJECT_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"ProjectName\s*=\s*"([^"\r\n]*)""#).expect("Invalid ProjectName regex")
});

static PROJECT_START_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"ProjectStart\s*=\s*"([^"\r\n]*)""#).expect("Invalid ProjectStart regex")
});

static PROJECT_SOURCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"ProjectSource\s*=\s*"([^"\r\n]+)""#).expect("Invalid ProjectSource regex")
});

/// Duplicate-free collection of source file names.
///
/// Membership is hash based; iteration follows first insertion so that
/// saved manifests are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name` unless already present. Returns `true` if it was new.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.members.contains(&name) {
            return false;
        }
        self.members.insert(name.clone());
        self.order.push(name);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// In-memory project manifest bound to the file it loads from and saves to.
#[derive(Debug, Clone)]
pub struct ProjectManifest {
    path: NormalizedPath,
    /// Value of the `ProjectName` key
    pub project_name: String,
    /// Value of the `ProjectStart` key
    pub start_module: String,
    sources: SourceSet,
}

impl ProjectManifest {
    /// Create an empty manifest with the default project name and start module.
    pub fn new(path: impl Into<NormalizedPath>) -> Self {
        Self::with_defaults(path, DEFAULT_PROJECT_NAME, DEFAULT_START_MODULE)
    }

    /// Create an empty manifest with the given project name and start module.
    pub fn with_defaults(
        path: impl Into<NormalizedPath>,
        project_name: impl Into<String>,
        start_module: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            project_name: project_name.into(),
            start_module: start_module.into(),
            sources: SourceSet::new(),
        }
    }

    /// The file this manifest is bound to.
    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    pub fn sources(&self) -> &SourceSet {
        &self.sources
    }

    /// Hydrate from the bound file, merging its sources into this manifest.
    ///
    /// A missing file is not an error: the manifest keeps its current state
    /// and a later [`save`](Self::save) creates the file. Any other read
    /// failure is returned.
    pub fn load(&mut self) -> Result<()> {
        match io::read_text_optional(&self.path)? {
            Some(content) => {
                self.parse(&content);
                tracing::debug!(
                    path = %self.path,
                    sources = self.sources.len(),
                    "Loaded project manifest"
                );
            }
            None => {
                tracing::info!(path = %self.path, "No project manifest yet, starting fresh");
            }
        }
        Ok(())
    }

    /// Apply the keys found in `content`.
    ///
    /// `ProjectName` and `ProjectStart` take their first occurrence and keep
    /// the current value when absent. Every `ProjectSource` occurrence is
    /// added to the source set.
    pub fn parse(&mut self, content: &str) {
        if let Some(caps) = PROJECT_NAME_REGEX.captures(content) {
            self.project_name = caps[1].to_string();
        }
        if let Some(caps) = PROJECT_START_REGEX.captures(content) {
            self.start_module = caps[1].to_string();
        }
        for file in source_names(content) {
            self.sources.insert(file);
        }
    }

    /// Register a source file. Adding a name that is already present is a no-op.
    pub fn add_source(&mut self, file_name: impl Into<String>) -> bool {
        self.sources.insert(file_name)
    }

    /// Serialize the manifest with the given timestamp header.
    pub fn render(&self, timestamp: &str) -> String {
        let mut out = String::new();
        out.push(COMMENT_MARKER);
        out.push_str(timestamp);
        out.push_str(LINE_END);
        out.push_str("ProjectBegin");
        out.push_str(LINE_END);
        out.push_str(&format!("ProjectName=\"{}\"{LINE_END}", self.project_name));
        out.push_str(&format!("ProjectStart=\"{}\"{LINE_END}", self.start_module));
        for source in self.sources.iter() {
            out.push_str(&format!("ProjectSource=\"{source}\"{LINE_END}"));
        }
        out.push_str("ProjectEnd");
        out.push_str(LINE_END);
        out
    }

    /// Write the complete manifest to its file, stamped with the current
    /// local time. The in-memory state is left untouched on failure.
    pub fn save(&self) -> Result<()> {
        let content = self.render(&format_timestamp(&Local::now()));
        io::write_text(&self.path, &content)?;
        tracing::info!(
            path = %self.path,
            sources = self.sources.len(),
            "Saved project manifest"
        );
        Ok(())
    }
}

/// Values of every `ProjectSource="…"` entry in `content`, in file order.
/// Anything after the closing quote, such as a trailing comment, is ignored.
pub(crate) fn source_names(content: &str) -> impl Iterator<Item = &str> {
    PROJECT_SOURCE_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Timestamp in the controller IDE's header form, e.g. `10/19/2026, 02:15:04 PM`.
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format("%m/%d/%Y, %I:%M:%S %p").to_string()
}
