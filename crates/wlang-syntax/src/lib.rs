//! AST and syntax definitions for wlang.
//! wlang 的 AST 和语法定义。
//!
//! This crate defines the statement and expression trees produced by the parser.
//! Every node keeps the token that introduced it so consumers can point back at the source.

mod ast;
mod expr;

pub use ast::*;
pub use expr::*;
