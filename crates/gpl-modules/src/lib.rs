//! Module boundary scanning and artifact rendering for GPL sources.
//!
//! A concatenated GPL source is a sequence of modules:
//!
//! ```text
//! ' optional comment run
//! Module Name
//!     ...
//! End Module
//! ```
//!
//! [`parser`] finds those spans lexically (no language awareness) and
//! [`writer`] turns each span into a controller-ready `<Name>.gpl` artifact.

pub mod error;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use parser::{ModuleUnit, UNKNOWN_MODULE, parse_modules};
pub use writer::{normalize_line_endings, render_module, write_module};
