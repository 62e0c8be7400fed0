//! Error types for gpl-project

use std::path::PathBuf;

/// Result type for gpl-project operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a split or merge operation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file chosen for a split could not be read
    #[error("Cannot read input source {path}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: gpl_fs::Error,
    },

    /// Merge needs an existing manifest
    #[error("Project manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// An output directory could not be created
    #[error("Cannot prepare output directory {path}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: gpl_fs::Error,
    },

    /// Filesystem error from gpl-fs
    #[error(transparent)]
    Fs(#[from] gpl_fs::Error),
}
