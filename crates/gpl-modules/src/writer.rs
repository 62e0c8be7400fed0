//! Module artifact rendering and writing.
//!
//! The controller toolchain only accepts CR+LF sources, and each module file
//! must end with a line terminator followed by one blank line.

use gpl_fs::{NormalizedPath, io};

use crate::error::Result;
use crate::parser::ModuleUnit;

const CRLF: &str = "\r\n";

/// Converts every `\n` or `\r\n` line ending to `\r\n`.
///
/// # Example
/// ```
/// use gpl_modules::writer::normalize_line_endings;
///
/// assert_eq!(normalize_line_endings("a\nb\r\nc"), "a\r\nb\r\nc");
/// ```
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', CRLF)
}

/// Renders a module as the contents of its `.gpl` artifact.
///
/// # Example
/// ```
/// use gpl_modules::{parse_modules, render_module};
///
/// let unit = &parse_modules("' arm\nModule Arm\nEnd Module")[0];
/// assert_eq!(render_module(unit), "' arm\r\nModule Arm\r\nEnd Module\r\n\r\n");
/// ```
pub fn render_module(unit: &ModuleUnit) -> String {
    format!("{}{CRLF}{CRLF}", normalize_line_endings(&unit.text()))
}

/// Writes `unit` to `<dir>/<name>.gpl`, replacing any existing file.
///
/// Returns the path of the written artifact.
pub fn write_module(dir: &NormalizedPath, unit: &ModuleUnit) -> Result<NormalizedPath> {
    let path = dir.join(&unit.file_name());
    io::write_text(&path, &render_module(unit))?;
    tracing::info!(module = %unit.name, path = %path, "Wrote module");
    Ok(path)
}
