//! Syntactic errors.

use thiserror::Error;
use wlang_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use wlang_lexer::{Token, TokenKind};

/// A syntactic error, carrying the token it was detected at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected one of {} got {}", join_kinds(.expected), .found.kind)]
    Expected {
        expected: Vec<TokenKind>,
        found: Token,
    },

    #[error("unexpected token {} on left-hand side of expression", .found.kind)]
    UnexpectedLhs { found: Token },

    #[error("unexpected token {} on right-hand side of expression", .found.kind)]
    UnexpectedRhs { found: Token },

    #[error("expected statement, found {}", .found.kind)]
    ExpectedStatement { found: Token },

    #[error("invalid number literal '{}'", .found.text)]
    InvalidNumber { found: Token },
}

impl ParseError {
    pub fn expected(expected: &[TokenKind], found: &Token) -> Self {
        ParseError::Expected {
            expected: expected.to_vec(),
            found: found.clone(),
        }
    }

    /// The token the error was detected at.
    pub fn token(&self) -> &Token {
        match self {
            ParseError::Expected { found, .. }
            | ParseError::UnexpectedLhs { found }
            | ParseError::UnexpectedRhs { found }
            | ParseError::ExpectedStatement { found }
            | ParseError::InvalidNumber { found } => found,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Expected { .. } | ParseError::UnexpectedRhs { .. } => {
                ErrorCode::UnexpectedToken
            }
            ParseError::UnexpectedLhs { .. } => ErrorCode::ExpectedExpression,
            ParseError::ExpectedStatement { .. } => ErrorCode::ExpectedStatement,
            ParseError::InvalidNumber { .. } => ErrorCode::InvalidNumber,
        }
    }

    fn label(&self) -> String {
        match self {
            ParseError::Expected { found, .. } => format!("found {} here", found.kind),
            ParseError::UnexpectedLhs { .. } => "expected an expression here".to_string(),
            ParseError::UnexpectedRhs { .. } => "expected an operator here".to_string(),
            ParseError::ExpectedStatement { .. } => "not a declaration".to_string(),
            ParseError::InvalidNumber { .. } => "number too large".to_string(),
        }
    }

    /// Convert into a diagnostic positioned at the offending token.
    pub fn into_diagnostic(self) -> Diagnostic {
        let token = self.token();
        let code = self.code();
        let mut diagnostic = Diagnostic::error(
            DiagnosticKind::Parser,
            token.position,
            token.span,
            self.to_string(),
        )
        .with_code(code)
        .with_label(Label::new(token.span, self.label()));
        if let Some(help) = code.suggestion() {
            diagnostic = diagnostic.with_help(help);
        }
        diagnostic
    }
}

fn join_kinds(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(TokenKind::name)
        .collect::<Vec<_>>()
        .join(", ")
}
