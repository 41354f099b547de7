//! Recoverable problems found while extracting.
//!
//! A diagnostic never stops the run: the offending call site is skipped and
//! the rest of the file is still processed.

use crate::core::ast::Position;
use crate::core::resolve::ResolveError;

/// A marker call whose text could not be resolved statically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: String,
    pub position: Position,
    /// Dotted name of the marker that was matched.
    pub keyword: String,
    pub error: ResolveError,
}

impl Diagnostic {
    /// `file:line:col`, the form editors and terminals can jump to.
    pub fn location(&self) -> String {
        format!(
            "{}:{}:{}",
            self.file, self.position.line, self.position.column
        )
    }
}
