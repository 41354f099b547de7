//! Source frontends.
//!
//! - `go`: Go sources (tree-sitter)
//! - `script`: JavaScript/TypeScript sources (swc)
//!
//! Both produce a [`ParsedFile`] in the engine's own tree shape.

use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;

use crate::core::ast::ParsedFile;

pub mod go;
pub mod script;

const SCRIPT_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceLanguage {
    Go,
    Script,
}

impl SourceLanguage {
    /// Guess from the file extension; anything unknown is read as Go.
    pub fn from_path(path: &Path) -> Self {
        let is_script = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext));
        if is_script {
            SourceLanguage::Script
        } else {
            SourceLanguage::Go
        }
    }
}

/// Parse `code` with the frontend for `language`.
pub fn parse_source(
    code: String,
    file_path: &str,
    language: SourceLanguage,
) -> Result<ParsedFile> {
    match language {
        SourceLanguage::Go => go::parse_go_source(&code, file_path),
        SourceLanguage::Script => script::parse_script_source(code, file_path),
    }
}
