use anyhow::{Result, anyhow};
use swc_common::{
    BytePos, FileName, GLOBALS, Globals, SourceMap, SourceMapper, Span,
    comments::{CommentKind, SingleThreadedComments},
};
use swc_ecma_ast::{BinaryOp as SwcBinaryOp, CallExpr, Callee, Expr, Lit, MemberProp};
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::ast::{BinaryOp, Comment, Node, ParsedFile, Position};

/// Parse JavaScript/TypeScript (JSX and TSX included) and lower it.
///
/// Only the shapes marker calls can take are kept: calls, identifiers,
/// non-computed member chains, binaries and literals. Any other expression
/// is replaced by the calls found inside it.
pub fn parse_script_source(code: String, file_path: &str) -> Result<ParsedFile> {
    GLOBALS.set(&Globals::new(), || {
        let source_map = SourceMap::default();
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse script source {}: {:?}", file_path, e))?;

        let lowering = Lowering {
            source_map: &source_map,
        };
        let mut collector = CallCollector {
            lowering: &lowering,
            calls: Vec::new(),
        };
        module.visit_with(&mut collector);
        let root = Node::Other(collector.calls);

        Ok(ParsedFile {
            path: file_path.to_string(),
            root,
            comments: collect_comments(&comments, &source_map),
        })
    })
}

struct Lowering<'a> {
    source_map: &'a SourceMap,
}

impl Lowering<'_> {
    fn lower_expr(&self, expr: &Expr) -> Node {
        match expr {
            Expr::Call(call) => self.lower_call(call),
            Expr::Ident(ident) => Node::ident(ident.sym.to_string()),
            Expr::Member(member) => match &member.prop {
                MemberProp::Ident(prop) => {
                    Node::selector(self.lower_expr(&member.obj), prop.sym.to_string())
                }
                _ => self.nested_calls(expr),
            },
            Expr::Lit(Lit::Str(s)) => self.literal(s.span, expr),
            Expr::Lit(Lit::Num(n)) => self.literal(n.span, expr),
            Expr::Tpl(tpl) if tpl.exprs.is_empty() => self.literal(tpl.span, expr),
            Expr::Bin(bin) => {
                let op = if bin.op == SwcBinaryOp::Add {
                    BinaryOp::Add
                } else {
                    BinaryOp::Other
                };
                Node::binary(op, self.lower_expr(&bin.left), self.lower_expr(&bin.right))
            }
            _ => self.nested_calls(expr),
        }
    }

    fn lower_call(&self, call: &CallExpr) -> Node {
        let callee = match &call.callee {
            Callee::Expr(expr) => self.lower_expr(expr),
            _ => Node::Other(Vec::new()),
        };
        let args = call
            .args
            .iter()
            .map(|arg| {
                if arg.spread.is_some() {
                    self.nested_calls(&arg.expr)
                } else {
                    self.lower_expr(&arg.expr)
                }
            })
            .collect();
        let loc = self.source_map.lookup_char_pos(call.span.lo);
        Node::call(callee, args, Position::new(loc.line, loc.col_display + 1))
    }

    /// The literal exactly as written, quotes included.
    fn literal(&self, span: Span, expr: &Expr) -> Node {
        match self.source_map.span_to_snippet(span) {
            Ok(raw) => Node::literal(raw),
            Err(_) => self.nested_calls(expr),
        }
    }

    fn nested_calls(&self, expr: &Expr) -> Node {
        let mut collector = CallCollector {
            lowering: self,
            calls: Vec::new(),
        };
        expr.visit_with(&mut collector);
        Node::Other(collector.calls)
    }
}

/// Collects the outermost calls below a node; lowering recurses into them.
struct CallCollector<'a, 'b> {
    lowering: &'a Lowering<'b>,
    calls: Vec<Node>,
}

impl Visit for CallCollector<'_, '_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        self.calls.push(self.lowering.lower_call(node));
    }
}

fn collect_comments(comments: &SingleThreadedComments, source_map: &SourceMap) -> Vec<Comment> {
    let (leading, trailing) = comments.borrow_all();
    let mut all: Vec<_> = leading
        .iter()
        .chain(trailing.iter())
        .flat_map(|(_, cmts)| cmts.iter())
        .collect();
    all.sort_by_key(|cmt| cmt.span.lo);
    all.dedup_by_key(|cmt| cmt.span.lo);

    all.into_iter()
        .map(|cmt| {
            let text = match cmt.kind {
                CommentKind::Line => format!("//{}", cmt.text),
                CommentKind::Block => format!("/*{}*/", cmt.text),
            };
            let last = BytePos(cmt.span.hi.0.saturating_sub(1).max(cmt.span.lo.0));
            Comment {
                text,
                start_line: source_map.lookup_char_pos(cmt.span.lo).line,
                end_line: source_map.lookup_char_pos(last).line,
            }
        })
        .collect()
}
