//! CLI argument definitions using clap.
//!
//! Flags follow GNU xgettext naming where an equivalent exists.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser};

use crate::config::DEFAULT_BUGS_ADDRESS;
use crate::core::keywords::{DEFAULT_CONTEXTUAL, DEFAULT_PLURAL, DEFAULT_SINGULAR};
use crate::core::parsers::SourceLanguage;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Source files to scan, in order
    pub files: Vec<PathBuf>,

    /// Write output to the specified file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub comments: CommentArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub keywords: KeywordArgs,

    /// Parse every file as this language (default: guess from extension)
    #[arg(long, value_enum)]
    pub language: Option<SourceLanguage>,

    /// Do not print warnings for skipped call sites
    #[arg(short, long)]
    pub quiet: bool,
}

impl Arguments {
    /// Return the arguments if any file was given, otherwise print help and return None.
    pub fn with_files_or_help(self) -> Option<Self> {
        if self.files.is_empty() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct CommentArgs {
    /// Place all comment blocks preceding keyword lines in output file
    #[arg(long)]
    pub add_comments: bool,

    /// Place comment blocks starting with TAG and preceding keyword lines in output file
    #[arg(long, value_name = "TAG")]
    pub add_comments_tag: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// Generate sorted output
    #[arg(long)]
    pub sort_output: bool,

    /// Do not write '#: filename:line' lines
    #[arg(long)]
    pub no_location: bool,

    /// Set report address for msgid bugs
    #[arg(long, default_value = DEFAULT_BUGS_ADDRESS)]
    pub msgid_bugs_address: String,

    /// Set package name in output
    #[arg(long, default_value = "")]
    pub package_name: String,
}

#[derive(Debug, Clone, Args)]
pub struct KeywordArgs {
    /// Look for WORD as the keyword for singular strings
    #[arg(long, value_name = "WORD", default_value = DEFAULT_SINGULAR)]
    pub keyword: String,

    /// Look for WORD as the keyword for plural strings
    #[arg(long, value_name = "WORD", default_value = DEFAULT_PLURAL)]
    pub keyword_plural: String,

    /// Look for WORD as the keyword for contextual strings
    #[arg(long, value_name = "WORD", default_value = DEFAULT_CONTEXTUAL)]
    pub keyword_contextual: String,

    /// Number of arguments to skip in a keyword call before the text argument
    #[arg(long, default_value_t = 0)]
    pub skip_args: usize,

    /// Path to a JSON keyword configuration; overrides the other keyword flags
    #[arg(long, value_name = "PATH")]
    pub keyword_cfg: Option<PathBuf>,
}
