//! Project model and operations for GPL controller projects
//!
//! This crate implements the two inverse project operations:
//!
//! - **Split**: one concatenated source file becomes one `<Module>.gpl` file
//!   per module, registered in the project manifest (`Project.gpr`)
//! - **Merge**: the module files listed in a manifest are concatenated, in
//!   manifest line order, into a single source plus a fresh manifest
//!
//! # Architecture
//!
//! ```text
//!             gpl-cli
//!                |
//!           gpl-project
//!                |
//!       +--------+--------+
//!       |                 |
//!    gpl-fs          gpl-modules
//! ```

pub mod error;
pub mod manifest;
pub mod merge;
pub mod report;
pub mod settings;
pub mod split;

pub use error::{Error, Result};
pub use manifest::{DEFAULT_PROJECT_NAME, DEFAULT_START_MODULE, ProjectManifest, SourceSet};
pub use merge::{merge_project, source_entries};
pub use report::{MergeReport, ModuleOutcome, SourceOutcome, SplitReport};
pub use settings::{ProjectLayout, SETTINGS_FILE, Settings};
pub use split::{SplitOptions, split_file, split_source};
