//! Language-neutral syntax tree consumed by the extraction engine.
//!
//! Source frontends (see `crate::core::parsers`) lower their native trees into this
//! shape. Only the node kinds the engine cares about are modeled; everything
//! else collapses into [`Node::Other`], which keeps its children so that calls
//! nested anywhere in the file are still visited.

/// 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub callee: Box<Node>,
    pub args: Vec<Node>,
    /// Position of the first character of the call (start of the callee).
    pub pos: Position,
}

/// A literal exactly as written in the source, quotes and escapes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Call(CallExpr),
    Binary(BinaryExpr),
    Ident(String),
    /// Member access `base.field`.
    Selector { base: Box<Node>, field: String },
    Literal(Literal),
    Other(Vec<Node>),
}

impl Node {
    pub fn ident(name: impl Into<String>) -> Self {
        Node::Ident(name.into())
    }

    pub fn literal(raw: impl Into<String>) -> Self {
        Node::Literal(Literal { raw: raw.into() })
    }

    pub fn selector(base: Node, field: impl Into<String>) -> Self {
        Node::Selector {
            base: Box::new(base),
            field: field.into(),
        }
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        Node::Binary(BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn call(callee: Node, args: Vec<Node>, pos: Position) -> Self {
        Node::Call(CallExpr {
            callee: Box::new(callee),
            args,
            pos,
        })
    }
}

/// One comment from the file's comment inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Raw comment text including its `//` or `/* */` markers.
    pub text: String,
    pub start_line: usize,
    pub end_line: usize,
}

/// A source file lowered into the engine's tree, with every comment it contains.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    /// Path as given by the caller; used verbatim in location lines.
    pub path: String,
    pub root: Node,
    /// Comments in source order.
    pub comments: Vec<Comment>,
}
