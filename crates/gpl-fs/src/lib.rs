//! Filesystem layer for the GPL project tool
//!
//! Provides normalized paths, atomic writes and not-found-aware reads used by
//! the split and merge operations.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::{MODULE_EXTENSION, ProjectPath};
pub use error::{Error, Result};
pub use path::NormalizedPath;
