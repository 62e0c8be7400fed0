//! Slash-normalized paths

use std::fmt;
use std::path::{Path, PathBuf};

/// A path stored with `/` separators.
///
/// Controller projects move between Windows engineering stations and Linux
/// hosts; backslashes are rewritten on construction and the native form is
/// produced only when touching the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(slashes(&path.as_ref().to_string_lossy()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Platform-native form for I/O.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    /// Append a relative `segment`.
    pub fn join(&self, segment: &str) -> Self {
        let segment = slashes(segment);
        match self.0.as_str() {
            "" => Self(segment),
            base if base.ends_with('/') => Self(format!("{base}{segment}")),
            base => Self(format!("{base}/{segment}")),
        }
    }

    /// Interpret `path` relative to `self`; absolute paths are taken as given.
    pub fn resolve(&self, path: &str) -> Self {
        if Path::new(path).is_absolute() {
            Self::new(path)
        } else {
            self.join(path)
        }
    }

    /// Last non-empty component.
    pub fn file_name(&self) -> Option<&str> {
        self.0
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
    }

    /// Extension of the file name without the dot. Dotfiles have none.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }
}

fn slashes(path: &str) -> String {
    path.replace('\\', "/")
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NormalizedPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
