//! Module boundary scanning.
//!
//! Scans a concatenated GPL source for spans of the form
//! ```text
//! ' contiguous comment lines (optional)
//! Module Name
//! ...
//! End Module
//! ```
//!
//! The scan is a line-oriented state machine (`Seeking`, `InCommentRun`,
//! `InModuleBody`). Spans never overlap, a body always ends at the first
//! `End Module` after its opening marker (modules do not nest), and any text
//! outside a span is dropped.

use gpl_fs::MODULE_EXTENSION;

/// Name given to a module whose opening marker has no usable identifier.
pub const UNKNOWN_MODULE: &str = "UnknownModule";

const OPEN_KEYWORD: &str = "Module";
const CLOSE_MARKER: &str = "End Module";

/// One module span found in a source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleUnit {
    /// Identifier after the opening `Module` keyword, or [`UNKNOWN_MODULE`].
    pub name: String,
    /// The comment run directly above the opening marker, each line followed
    /// by `\n`. Empty when the module has no attached comments.
    pub leading_comments: String,
    /// Opening marker through the end of the closing marker, lines joined by
    /// `\n`.
    pub body: String,
    /// The 1-based line where the span starts (first comment or opening marker).
    pub start_line: usize,
    /// The 1-based line holding the closing marker.
    pub end_line: usize,
}

impl ModuleUnit {
    fn from_lines(name: String, comments: &[&str], body: &[&str], start_line: usize, end_line: usize) -> Self {
        let leading_comments = comments.iter().map(|line| format!("{line}\n")).collect();
        Self {
            name,
            leading_comments,
            body: body.join("\n"),
            start_line,
            end_line,
        }
    }

    /// The artifact file name for this module, e.g. `MAIN.gpl`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, MODULE_EXTENSION)
    }

    /// Leading comments followed by the body, with `\n` line endings.
    pub fn text(&self) -> String {
        format!("{}{}", self.leading_comments, self.body)
    }
}

enum ScanState<'a> {
    Seeking,
    InCommentRun {
        first_line: usize,
        comments: Vec<&'a str>,
    },
    InModuleBody {
        start_line: usize,
        name: String,
        comments: Vec<&'a str>,
        body: Vec<&'a str>,
    },
}

struct Scanner<'a> {
    state: ScanState<'a>,
    units: Vec<ModuleUnit>,
}

impl<'a> Scanner<'a> {
    fn new() -> Self {
        Self {
            state: ScanState::Seeking,
            units: Vec::new(),
        }
    }

    fn feed(&mut self, line_no: usize, line: &'a str) {
        let state = std::mem::replace(&mut self.state, ScanState::Seeking);
        self.state = match state {
            ScanState::Seeking => {
                if is_comment(line) {
                    ScanState::InCommentRun {
                        first_line: line_no,
                        comments: vec![line],
                    }
                } else if let Some(name) = opening_name(line) {
                    ScanState::InModuleBody {
                        start_line: line_no,
                        name,
                        comments: Vec::new(),
                        body: vec![line],
                    }
                } else {
                    ScanState::Seeking
                }
            }
            ScanState::InCommentRun {
                first_line,
                mut comments,
            } => {
                if is_comment(line) {
                    comments.push(line);
                    ScanState::InCommentRun {
                        first_line,
                        comments,
                    }
                } else if let Some(name) = opening_name(line) {
                    ScanState::InModuleBody {
                        start_line: first_line,
                        name,
                        comments,
                        body: vec![line],
                    }
                } else {
                    tracing::debug!(
                        first_line,
                        lines = comments.len(),
                        "Dropping comment run not attached to a module"
                    );
                    ScanState::Seeking
                }
            }
            ScanState::InModuleBody {
                start_line,
                name,
                comments,
                mut body,
            } => match closing_marker_end(line) {
                Some(end) => {
                    body.push(&line[..end]);
                    self.units.push(ModuleUnit::from_lines(
                        name, &comments, &body, start_line, line_no,
                    ));
                    ScanState::Seeking
                }
                None => {
                    body.push(line);
                    ScanState::InModuleBody {
                        start_line,
                        name,
                        comments,
                        body,
                    }
                }
            },
        };
    }

    fn finish(self) -> Vec<ModuleUnit> {
        if let ScanState::InModuleBody {
            start_line, name, ..
        } = &self.state
        {
            tracing::warn!(
                module = %name,
                start_line,
                "Module has no closing `{}` marker; ignoring it",
                CLOSE_MARKER
            );
        }
        self.units
    }
}

/// A full-line comment: first non-blank character is an apostrophe.
fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('\'')
}

/// Recognizes `Module <name>` and resolves the module name.
///
/// The name is the run of word characters (`[A-Za-z0-9_]`) right after the
/// keyword, so `Module Robot-1` is `Robot`. Returns `None` when the line is
/// not an opening marker; a marker whose run is empty or starts with a digit
/// resolves to [`UNKNOWN_MODULE`].
fn opening_name(line: &str) -> Option<String> {
    let rest = line.trim_start().strip_prefix(OPEN_KEYWORD)?;
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    let rest = rest.trim_start();
    if rest.is_empty() {
        return None;
    }

    let word_len = rest
        .find(|c: char| !is_word_char(c))
        .unwrap_or(rest.len());
    let word = &rest[..word_len];
    if word.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        Some(word.to_string())
    } else {
        tracing::debug!(marker = rest, "Module marker has no usable name");
        Some(UNKNOWN_MODULE.to_string())
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Byte offset just past `End Module` when the line is a closing marker.
fn closing_marker_end(line: &str) -> Option<usize> {
    let trimmed = line.trim_start();
    let rest = trimmed.strip_prefix(CLOSE_MARKER)?;
    if rest.starts_with(is_word_char) {
        return None;
    }
    Some(line.len() - trimmed.len() + CLOSE_MARKER.len())
}

/// Parses all modules from the given content.
///
/// Accepts `\n` and `\r\n` line endings. The returned units are in order of
/// appearance; their text uses `\n` line endings.
///
/// # Example
/// ```
/// use gpl_modules::parser::parse_modules;
///
/// let content = "Dim header\n' entry point\nModule MAIN\n  Public Sub MAIN\n  End Sub\nEnd Module\ntrailer";
///
/// let modules = parse_modules(content);
/// assert_eq!(modules.len(), 1);
/// assert_eq!(modules[0].name, "MAIN");
/// assert_eq!(modules[0].leading_comments, "' entry point\n");
/// assert!(modules[0].body.ends_with("End Module"));
/// ```
pub fn parse_modules(content: &str) -> Vec<ModuleUnit> {
    let mut scanner = Scanner::new();
    for (idx, raw) in content.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        scanner.feed(idx + 1, line);
    }
    scanner.finish()
}
