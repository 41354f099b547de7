//! Static resolution of marker call arguments.
//!
//! Only literals and `+` chains of literals are understood. Anything else is
//! reported as a [`ResolveError`] so the call site can be skipped with a warning.

use thiserror::Error;

use crate::core::ast::{BinaryOp, Node};

/// Why an argument could not be turned into text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unsupported expression: {0}")]
    UnsupportedExpression(&'static str),
    #[error("unsupported operator in string concatenation")]
    UnsupportedOperator,
    #[error("missing argument {0}")]
    MissingArgument(usize),
}

/// Reconstruct the dotted name of a callee (`pkg.Func`, `a.b.Method`).
///
/// Returns `None` for callees that are not an identifier or a member chain
/// rooted at one.
pub fn callee_name(node: &Node) -> Option<String> {
    match node {
        Node::Ident(name) => Some(name.clone()),
        Node::Selector { base, field } => {
            let base = callee_name(base)?;
            Some(format!("{}.{}", base, field))
        }
        _ => None,
    }
}

/// Resolve an argument to its literal text, quotes still attached.
///
/// `"foo" + "bar"` resolves to `"foobar"`: the left operand loses its closing
/// quote, the right operand loses its opening quote, and the left operand's
/// quote character closes the joined text.
pub fn resolve_literal(node: &Node) -> Result<String, ResolveError> {
    match node {
        Node::Literal(lit) => Ok(lit.raw.clone()),
        Node::Binary(bin) => {
            if bin.op != BinaryOp::Add {
                return Err(ResolveError::UnsupportedOperator);
            }
            let mut left = resolve_literal(&bin.left)?;
            let quote = left.chars().next();
            left.pop();
            let right = resolve_literal(&bin.right)?;
            left.push_str(strip_first_char(&right));
            if let Some(quote) = quote {
                left.pop();
                left.push(quote);
            }
            Ok(left)
        }
        Node::Call(_) => Err(ResolveError::UnsupportedExpression("call")),
        Node::Ident(_) => Err(ResolveError::UnsupportedExpression("identifier")),
        Node::Selector { .. } => Err(ResolveError::UnsupportedExpression("selector")),
        Node::Other(_) => Err(ResolveError::UnsupportedExpression("expression")),
    }
}

/// Convert resolved literal text into catalog text.
///
/// Raw (backtick) literals get their quotes escaped and newlines turned into
/// `\n`; single-quoted literals get bare `"` escaped and `\'` unescaped. Then
/// one enclosing quote is removed from each side.
pub fn normalize_text(raw: &str) -> String {
    let text = match raw.chars().next() {
        None => return String::new(),
        Some('`') => raw.replace('"', "\\\"").replace('\n', "\\n"),
        Some('\'') => escape_bare_quotes(&raw.replace("\\'", "'")),
        Some(_) => raw.to_string(),
    };
    strip_quotes(&text).to_string()
}

fn strip_first_char(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.as_str()
}

fn strip_quotes(s: &str) -> &str {
    let mut chars = s.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return "";
    }
    chars.as_str()
}

fn escape_bare_quotes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;
    for c in s.chars() {
        if c == '"' && !escaped {
            out.push('\\');
        }
        escaped = c == '\\' && !escaped;
        out.push(c);
    }
    out
}
