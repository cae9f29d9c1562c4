//! Lexical analysis for wlang.
//!
//! This crate provides the lexer that converts a source buffer into tokens.
//! Lexing never aborts on the first problem: unexpected characters are reported as
//! diagnostics and skipped, up to the limit configured in [`LexerConfig`].

mod config;
mod error;
mod lexer;
mod token;

pub use config::LexerConfig;
pub use error::LexError;
pub use lexer::{Lexer, LexerState};
pub use token::{Token, TokenKind};

use wlang_common::SourceFile;
use wlang_diagnostic::Diagnostic;

/// Tokenize a source buffer with the default configuration.
pub fn tokenize(source: &SourceFile) -> (Vec<Token>, Vec<Diagnostic>) {
    Lexer::new(source).tokenize()
}
