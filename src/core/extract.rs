//! Marker call matching over a parsed file.
//!
//! The walk is pre-order: a call is handled before its callee and arguments,
//! so occurrences come out in source order.

use crate::core::ast::{CallExpr, Node, ParsedFile};
use crate::core::catalog::{FormatHint, Occurrence};
use crate::core::comments::{CommentPolicy, associate};
use crate::core::keywords::{KeywordKind, KeywordRule, KeywordTable};
use crate::core::resolve::{ResolveError, callee_name, normalize_text, resolve_literal};
use crate::issues::Diagnostic;

/// Everything found in one file.
#[derive(Debug, Default)]
pub struct FileExtraction {
    pub occurrences: Vec<Occurrence>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolved (still quoted) text arguments of one call.
#[derive(Debug, Default)]
struct CallTexts {
    msgid: String,
    msgid_plural: String,
    msgctxt: String,
}

pub struct Extractor<'a> {
    file: &'a ParsedFile,
    keywords: &'a KeywordTable,
    comments: &'a CommentPolicy,
    result: FileExtraction,
}

impl<'a> Extractor<'a> {
    pub fn new(
        file: &'a ParsedFile,
        keywords: &'a KeywordTable,
        comments: &'a CommentPolicy,
    ) -> Self {
        Self {
            file,
            keywords,
            comments,
            result: FileExtraction::default(),
        }
    }

    pub fn extract(mut self) -> FileExtraction {
        let file = self.file;
        self.visit(&file.root);
        self.result
    }

    fn visit(&mut self, node: &Node) {
        match node {
            Node::Call(call) => {
                self.visit_call(call);
                self.visit(&call.callee);
                for arg in &call.args {
                    self.visit(arg);
                }
            }
            Node::Binary(bin) => {
                self.visit(&bin.left);
                self.visit(&bin.right);
            }
            Node::Selector { base, .. } => self.visit(base),
            Node::Other(children) => {
                for child in children {
                    self.visit(child);
                }
            }
            Node::Ident(_) | Node::Literal(_) => {}
        }
    }

    fn visit_call(&mut self, call: &CallExpr) {
        let Some(name) = callee_name(&call.callee) else {
            return;
        };
        let Some(rule) = self.keywords.get(&name) else {
            return;
        };

        match resolve_call_texts(rule, call) {
            Ok(texts) => self.record(texts, call),
            Err(error) => self.result.diagnostics.push(Diagnostic {
                file: self.file.path.clone(),
                position: call.pos,
                keyword: name,
                error,
            }),
        }
    }

    fn record(&mut self, texts: CallTexts, call: &CallExpr) {
        let msgid = normalize_text(&texts.msgid);
        if msgid.is_empty() {
            return;
        }

        let format_hint = FormatHint::detect(&texts.msgid, &texts.msgid_plural);
        let comments = associate(call.pos.line, &self.file.comments, self.comments);

        self.result.occurrences.push(Occurrence {
            msgid,
            msgid_plural: normalize_text(&texts.msgid_plural),
            msgctxt: normalize_text(&texts.msgctxt),
            format_hint,
            comments,
            file: self.file.path.clone(),
            line: call.pos.line,
        });
    }
}

/// Read the text arguments starting after the skipped ones.
fn resolve_call_texts(rule: &KeywordRule, call: &CallExpr) -> Result<CallTexts, ResolveError> {
    let arg = |offset: usize| {
        let index = rule.skip_args + offset;
        call.args
            .get(index)
            .ok_or(ResolveError::MissingArgument(index + 1))
            .and_then(resolve_literal)
    };

    let texts = match rule.kind {
        KeywordKind::Singular => CallTexts {
            msgid: arg(0)?,
            ..Default::default()
        },
        KeywordKind::Plural => {
            let msgid = arg(0)?;
            CallTexts {
                msgid,
                msgid_plural: arg(1)?,
                ..Default::default()
            }
        }
        KeywordKind::Contextual => {
            let msgctxt = arg(0)?;
            CallTexts {
                msgid: arg(1)?,
                msgctxt,
                ..Default::default()
            }
        }
    };
    Ok(texts)
}

/// Run the matcher over one file.
pub fn extract_file(
    file: &ParsedFile,
    keywords: &KeywordTable,
    comments: &CommentPolicy,
) -> FileExtraction {
    Extractor::new(file, keywords, comments).extract()
}
