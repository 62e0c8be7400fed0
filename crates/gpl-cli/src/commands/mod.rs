//! Command implementations for gpl-cli

pub mod list;
pub mod merge;
pub mod split;

pub use list::run_list;
pub use merge::run_merge;
pub use split::run_split;
