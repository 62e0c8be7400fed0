//! Shared test utilities for the GPL project tool workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`](project::TestProject) temporary working directory
//! - [`sources`]: sample concatenated GPL sources

pub mod project;
pub mod sources;
