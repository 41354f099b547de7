use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::core::comments::CommentPolicy;
use crate::core::keywords::KeywordTable;
use crate::core::parsers::SourceLanguage;

pub const DEFAULT_BUGS_ADDRESS: &str = "EMAIL";

/// `POT-Creation-Date` layout.
pub const CREATION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M%z";

/// Settings for the extraction pass.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub keywords: KeywordTable,
    pub comments: CommentPolicy,
    /// Forces one frontend for every file instead of guessing by extension.
    pub language: Option<SourceLanguage>,
}

/// Settings for rendering the catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    pub sort_output: bool,
    pub no_location: bool,
    pub package_name: String,
    pub msgid_bugs_address: String,
    pub creation_date: String,
}

/// Where keyword rules come from.
#[derive(Debug, Clone)]
pub enum KeywordSource<'a> {
    /// JSON records on disk.
    File(&'a Path),
    /// Three marker names sharing one skip count.
    Names {
        singular: &'a str,
        plural: &'a str,
        contextual: &'a str,
        skip_args: usize,
    },
}

pub fn load_keywords(source: KeywordSource<'_>) -> Result<KeywordTable> {
    match source {
        KeywordSource::File(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read keyword config: {:?}", path))?;
            KeywordTable::from_json(&content)
                .with_context(|| format!("Failed to parse keyword config: {:?}", path))
        }
        KeywordSource::Names {
            singular,
            plural,
            contextual,
            skip_args,
        } => Ok(KeywordTable::from_names(
            singular, plural, contextual, skip_args,
        )),
    }
}

/// Comment policy from the two comment flags; a tag takes precedence.
pub fn comment_policy(add_comments: bool, tag: Option<&str>) -> CommentPolicy {
    match tag {
        Some(tag) if !tag.is_empty() => CommentPolicy::Tagged(tag.to_string()),
        _ if add_comments => CommentPolicy::All,
        _ => CommentPolicy::None,
    }
}

pub fn creation_date_now() -> String {
    chrono::Local::now().format(CREATION_DATE_FORMAT).to_string()
}
