//! Statement AST definitions.
//! 语句 AST 定义。

use crate::Expr;
use serde::Serialize;
use std::fmt;
use wlang_common::{Position, Span};
use wlang_lexer::{Token, TokenKind};

/// The name of the implicit root module.
/// 隐式根模块的名称。
pub const ROOT_MODULE: &str = "Main";

/// A statement node.
/// 语句节点。
///
/// Children are appended in source order and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stmt {
    pub kind: StmtKind,
    /// Name, keyword or offending token. / 名称、关键字或出错的词法单元。
    pub token: Token,
    /// Default value of an attribute, or the expression of an expression statement.
    /// 属性的默认值，或表达式语句的表达式。
    pub expr: Option<Expr>,
    pub children: Vec<Stmt>,
}

/// Kind of statement.
/// 语句类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StmtKind {
    /// `module Name ... end` / 模块声明
    Module,
    /// `class Name [< Parent] [attributes] ... end` / 类声明
    Class,
    /// `function name [attributes] ... end` / 函数声明
    Function,
    /// `name [= literal]` inside an attribute list / 属性
    Attribute,
    /// `< Parent` of a class / 父类
    Inherits,
    /// An expression on its own line inside a function body / 表达式语句
    ExpressionStatement,
    /// `if ... end`; the condition slot is reserved and currently always empty
    /// 条件块，条件位置保留，目前总是为空
    Conditional,
    /// `loop ... end`; the condition slot is reserved and currently always empty
    /// 循环块，条件位置保留，目前总是为空
    Loop,
    /// Stand-in for an unparseable top-level construct / 错误占位节点
    ErrorPlaceholder,
}

impl StmtKind {
    pub fn name(&self) -> &'static str {
        match self {
            StmtKind::Module => "Module",
            StmtKind::Class => "Class",
            StmtKind::Function => "Function",
            StmtKind::Attribute => "Attribute",
            StmtKind::Inherits => "Inherits",
            StmtKind::ExpressionStatement => "ExpressionStatement",
            StmtKind::Conditional => "Conditional",
            StmtKind::Loop => "Loop",
            StmtKind::ErrorPlaceholder => "ErrorPlaceholder",
        }
    }
}

impl fmt::Display for StmtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Stmt {
    pub fn new(kind: StmtKind, token: Token) -> Self {
        Self {
            kind,
            token,
            expr: None,
            children: Vec::new(),
        }
    }

    /// The implicit `Main` module every parse is rooted at.
    /// 每次解析的隐式 `Main` 根模块。
    pub fn root() -> Self {
        Self::new(
            StmtKind::Module,
            Token::new(
                TokenKind::Identifier,
                ROOT_MODULE,
                Position::START,
                Span::DUMMY,
            ),
        )
    }

    pub fn with_expr(mut self, expr: Expr) -> Self {
        self.expr = Some(expr);
        self
    }

    /// Append a finished child.
    pub fn push(&mut self, child: Stmt) {
        self.children.push(child);
    }

    /// The declared name (empty for nodes introduced by a fixed token).
    pub fn name(&self) -> &str {
        &self.token.text
    }

    /// Visit this node and its descendants in pre-order, with their depth.
    /// 以先序遍历访问此节点及其后代，并附带深度。
    pub fn walk<F>(&self, f: &mut F)
    where
        F: FnMut(&Stmt, usize),
    {
        self.walk_at(0, f);
    }

    fn walk_at<F>(&self, depth: usize, f: &mut F)
    where
        F: FnMut(&Stmt, usize),
    {
        f(self, depth);
        for child in &self.children {
            child.walk_at(depth + 1, f);
        }
    }

    /// Total number of nodes in this subtree.
    pub fn count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_, _| count += 1);
        count
    }

    fn fmt_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{}", "  ".repeat(depth))?;
        self.write_header(f)?;
        writeln!(f)?;
        for child in &self.children {
            child.fmt_outline(f, depth + 1)?;
        }
        Ok(())
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        match self.kind {
            StmtKind::ErrorPlaceholder => write!(f, " {}", self.token.kind)?,
            StmtKind::ExpressionStatement | StmtKind::Conditional | StmtKind::Loop => {}
            _ => write!(f, " {}", self.name())?,
        }
        match (&self.kind, &self.expr) {
            (StmtKind::Attribute, Some(expr)) => write!(f, " = {expr}"),
            (_, Some(expr)) => write!(f, " {expr}"),
            (_, None) => Ok(()),
        }
    }
}

/// Renders an indented outline, one node per line.
/// 渲染缩进大纲，每行一个节点。
impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_outline(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExprKind;

    fn ident(text: &str) -> Token {
        Token::new(TokenKind::Identifier, text, Position::START, Span::DUMMY)
    }

    fn sample() -> Stmt {
        let mut class = Stmt::new(StmtKind::Class, ident("Point"));
        class.push(Stmt::new(StmtKind::Inherits, ident("Shape")));
        let number = Token::new(TokenKind::Number, "0", Position::START, Span::DUMMY);
        class.push(
            Stmt::new(StmtKind::Attribute, ident("x"))
                .with_expr(Expr::new(ExprKind::NumberLiteral(0), number)),
        );
        class.push(Stmt::new(StmtKind::Function, ident("area")));

        let mut root = Stmt::root();
        root.push(class);
        root
    }

    #[test]
    fn test_root_is_main_module() {
        let root = Stmt::root();
        assert_eq!(root.kind, StmtKind::Module);
        assert_eq!(root.name(), "Main");
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_walk_preserves_order() {
        let mut seen = Vec::new();
        sample().walk(&mut |stmt, depth| {
            seen.push((stmt.kind, stmt.name().to_string(), depth));
        });
        assert_eq!(
            seen,
            vec![
                (StmtKind::Module, "Main".to_string(), 0),
                (StmtKind::Class, "Point".to_string(), 1),
                (StmtKind::Inherits, "Shape".to_string(), 2),
                (StmtKind::Attribute, "x".to_string(), 2),
                (StmtKind::Function, "area".to_string(), 2),
            ]
        );
        assert_eq!(sample().count(), 5);
    }

    #[test]
    fn test_outline() {
        let expected = "\
Module Main
  Class Point
    Inherits Shape
    Attribute x = 0
    Function area
";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn test_serialize_distinguishes_literals() {
        let root = sample();
        let json = serde_json::to_value(&root).unwrap();
        let attribute = &json["children"][0]["children"][1];
        assert_eq!(attribute["kind"], "Attribute");
        assert_eq!(attribute["expr"]["kind"]["NumberLiteral"], 0);
        assert!(json["children"][0]["children"][0]["expr"].is_null());
    }
}
