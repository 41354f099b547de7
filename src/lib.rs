//! potx - gettext template extraction for Go and JavaScript/TypeScript sources
//!
//! potx scans source files for calls to configured marker functions
//! (`gettext.Gettext("...")` and friends), reads their literal text arguments
//! and writes a POT catalog with one entry per distinct message.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Keyword loading and runtime options
//! - `core`: Extraction engine (parsing, matching, aggregation, rendering)
//! - `issues`: Diagnostics for skipped call sites

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
