//! Extraction engine.
//!
//! Data flows through the modules in this order:
//! 1. `parsers`: source text to [`ast::ParsedFile`]
//! 2. `extract`: marker calls matched with `keywords`, text read by `resolve`,
//!    translator comments attached by `comments`
//! 3. `catalog`: occurrences grouped by message text
//! 4. `writer`: catalog rendered as a POT file
//!
//! `pipeline` runs steps 1-3 over a list of files.

pub mod ast;
pub mod catalog;
pub mod comments;
pub mod extract;
pub mod keywords;
pub mod parsers;
pub mod pipeline;
pub mod resolve;
pub mod writer;

pub use catalog::{Catalog, CatalogEntry, FormatHint, Occurrence};
pub use comments::CommentPolicy;
pub use keywords::{KeywordKind, KeywordRule, KeywordTable};
pub use pipeline::{ExtractionRun, run_extraction};
