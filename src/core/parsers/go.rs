use anyhow::{Result, anyhow, bail};
use tree_sitter::{Language, Node as TsNode, Parser};

use crate::core::ast::{BinaryOp, Comment, Node, ParsedFile, Position};

/// Go literal node kinds; all of them resolve to their source text.
const LITERAL_KINDS: &[&str] = &[
    "interpreted_string_literal",
    "raw_string_literal",
    "rune_literal",
    "int_literal",
    "float_literal",
    "imaginary_literal",
];

#[inline]
fn go_language() -> Language {
    tree_sitter_go::LANGUAGE.into()
}

/// Parse Go source code and lower it into the engine's tree.
///
/// A file with any syntax error is rejected instead of being partially read.
pub fn parse_go_source(code: &str, file_path: &str) -> Result<ParsedFile> {
    let mut parser = Parser::new();
    parser
        .set_language(&go_language())
        .map_err(|e| anyhow!("Failed to load Go grammar: {}", e))?;
    let tree = parser
        .parse(code, None)
        .ok_or_else(|| anyhow!("Failed to parse go source: {}", file_path))?;

    let root = tree.root_node();
    if let Some(error) = find_error(root) {
        let pos = error.start_position();
        bail!(
            "Failed to parse go source: {}:{}:{}: syntax error",
            file_path,
            pos.row + 1,
            pos.column + 1
        );
    }

    let mut comments = Vec::new();
    collect_comments(root, code, &mut comments);

    Ok(ParsedFile {
        path: file_path.to_string(),
        root: lower(root, code),
        comments,
    })
}

fn lower(node: TsNode, code: &str) -> Node {
    match node.kind() {
        "call_expression" => lower_call(node, code),
        "selector_expression" => {
            match (
                node.child_by_field_name("operand"),
                node.child_by_field_name("field"),
            ) {
                (Some(operand), Some(field)) => {
                    Node::selector(lower(operand, code), text(field, code))
                }
                _ => lower_children(node, code),
            }
        }
        "identifier" | "package_identifier" => Node::ident(text(node, code)),
        "binary_expression" => {
            match (
                node.child_by_field_name("left"),
                node.child_by_field_name("right"),
            ) {
                (Some(left), Some(right)) => {
                    let op = match node.child_by_field_name("operator") {
                        Some(op) if op.kind() == "+" => BinaryOp::Add,
                        _ => BinaryOp::Other,
                    };
                    Node::binary(op, lower(left, code), lower(right, code))
                }
                _ => lower_children(node, code),
            }
        }
        kind if LITERAL_KINDS.contains(&kind) => Node::literal(text(node, code)),
        _ => lower_children(node, code),
    }
}

fn lower_call(node: TsNode, code: &str) -> Node {
    let Some(function) = node.child_by_field_name("function") else {
        return lower_children(node, code);
    };
    let args = node
        .child_by_field_name("arguments")
        .map(|arguments| lower_named(arguments, code))
        .unwrap_or_default();
    Node::call(lower(function, code), args, position(node))
}

fn lower_children(node: TsNode, code: &str) -> Node {
    Node::Other(lower_named(node, code))
}

/// Lower named children, skipping comments (they live in the inventory).
fn lower_named(node: TsNode, code: &str) -> Vec<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .map(|child| lower(child, code))
        .collect()
}

fn collect_comments(node: TsNode, code: &str, out: &mut Vec<Comment>) {
    if node.kind() == "comment" {
        let start = node.start_position();
        let end = node.end_position();
        // A token ending at column 0 stops at the previous line's newline.
        let end_line = if end.column == 0 && end.row > start.row {
            end.row
        } else {
            end.row + 1
        };
        out.push(Comment {
            text: text(node, code),
            start_line: start.row + 1,
            end_line,
        });
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_comments(child, code, out);
    }
}

fn find_error(node: TsNode) -> Option<TsNode> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(find_error).or(Some(node))
}

fn position(node: TsNode) -> Position {
    let point = node.start_position();
    Position::new(point.row + 1, point.column + 1)
}

fn text(node: TsNode, code: &str) -> String {
    code[node.byte_range()].to_string()
}
