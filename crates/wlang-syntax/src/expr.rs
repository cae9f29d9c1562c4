//! Expression AST nodes.
//! 表达式 AST 节点。

use serde::Serialize;
use std::fmt;
use wlang_lexer::{Token, TokenKind};

/// An expression.
/// 表达式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expr {
    pub kind: ExprKind,
    /// The token that introduced this node (the operator for binary operations).
    /// 引入此节点的词法单元（二元运算时为运算符）。
    pub token: Token,
}

impl Expr {
    pub fn new(kind: ExprKind, token: Token) -> Self {
        Self { kind, token }
    }

    pub fn binary(op: Token, left: Expr, right: Expr) -> Self {
        Self {
            kind: ExprKind::BinaryOp {
                operator: op.kind,
                left: Box::new(left),
                right: Box::new(right),
            },
            token: op,
        }
    }

    /// The literal payload of this node, if it is a literal.
    pub fn literal(&self) -> Option<Literal<'_>> {
        match &self.kind {
            ExprKind::NumberLiteral(value) => Some(Literal::Int(*value)),
            ExprKind::StringLiteral(value) => Some(Literal::Text(value)),
            _ => None,
        }
    }
}

/// Expression kind.
/// 表达式类型。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ExprKind {
    /// Integer literal `1337` / 整数字面量
    NumberLiteral(i64),
    /// String literal, without its quotes / 字符串字面量（不含引号）
    StringLiteral(String),
    /// Variable reference / 变量引用
    Variable(String),
    /// Binary operation `a + b` / 二元运算
    BinaryOp {
        operator: TokenKind,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

/// A borrowed literal payload.
/// 借用的字面量内容。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal<'a> {
    Int(i64),
    Text(&'a str),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::NumberLiteral(value) => write!(f, "{value}"),
            ExprKind::StringLiteral(value) => write!(f, "\"{value}\""),
            ExprKind::Variable(name) => f.write_str(name),
            ExprKind::BinaryOp {
                operator,
                left,
                right,
            } => write!(f, "{operator}({left}, {right})"),
        }
    }
}
