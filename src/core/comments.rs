//! Translator comments: the comment block directly above a marker call.
//!
//! A block is the longest chain of comments where each one ends on the line
//! right before the next (or before the call). A blank line breaks the chain.
//!
//! ```go
//! // TRANSLATORS: shown on the login page
//! // keep it short
//! gettext.Gettext("Sign in")
//! ```
//!
//! produces
//!
//! ```text
//! #. TRANSLATORS: shown on the login page
//! #. keep it short
//! ```

use crate::core::ast::Comment;

/// Which comment blocks are attached to occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CommentPolicy {
    /// Comments are not collected.
    #[default]
    None,
    /// Every adjacent block is kept.
    All,
    /// Only blocks whose first line starts with the tag are kept.
    Tagged(String),
}

impl CommentPolicy {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, CommentPolicy::None)
    }
}

/// Find the comment block ending right above `call_line` and apply `policy`.
///
/// Returned lines are trimmed comment text without the `#. ` prefix.
pub fn associate(call_line: usize, comments: &[Comment], policy: &CommentPolicy) -> Vec<String> {
    if !policy.is_enabled() {
        return Vec::new();
    }

    let mut chain: Vec<&Comment> = Vec::new();
    let mut target = call_line;
    while let Some(comment) = comments
        .iter()
        .rev()
        .find(|c| c.end_line + 1 == target)
    {
        chain.push(comment);
        target = comment.end_line;
    }

    let lines: Vec<String> = chain
        .iter()
        .rev()
        .flat_map(|c| format_comment(&c.text))
        .collect();

    match policy {
        CommentPolicy::Tagged(tag) => {
            if lines.first().is_some_and(|first| first.starts_with(tag.as_str())) {
                lines
            } else {
                Vec::new()
            }
        }
        _ => lines,
    }
}

/// Strip comment markers from every physical line, dropping blank ones.
fn format_comment(text: &str) -> Vec<String> {
    text.split('\n')
        .filter_map(|raw| {
            let line = raw.strip_prefix("//").unwrap_or(raw);
            let line = line.strip_prefix("/*").unwrap_or(line);
            let line = line.strip_suffix("*/").unwrap_or(line);
            let line = line.trim();
            (!line.is_empty()).then(|| line.to_string())
        })
        .collect()
}
