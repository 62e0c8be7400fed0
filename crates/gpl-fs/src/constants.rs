//! Well-known file and directory names of a controller project.

/// Extension of GPL module source files, without the dot.
pub const MODULE_EXTENSION: &str = "gpl";

/// Default locations used by the split and merge operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// Directory receiving one file per module after a split
    SplitDir,
    /// Directory receiving the reassembled source after a merge
    MergeDir,
    /// Project manifest file name
    Manifest,
    /// File name of the reassembled source
    MergedSource,
}

impl ProjectPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SplitDir => "SplitGplModules",
            Self::MergeDir => "MergeCode",
            Self::Manifest => "Project.gpr",
            Self::MergedSource => "MergeCode.gpl",
        }
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
