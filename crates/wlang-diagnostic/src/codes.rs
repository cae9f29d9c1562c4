//! Error codes for wlang diagnostics.

use serde::Serialize;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    // Lexer errors (E0001 - E0099)
    UnexpectedCharacter,

    // Parser errors (E0100 - E0199)
    UnexpectedToken,
    ExpectedExpression,
    ExpectedStatement,
    InvalidNumber,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::UnexpectedCharacter => "E0001",

            // Parser
            ErrorCode::UnexpectedToken => "E0100",
            ErrorCode::ExpectedExpression => "E0101",
            ErrorCode::ExpectedStatement => "E0102",
            ErrorCode::InvalidNumber => "E0103",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::ExpectedStatement => {
                Some("top-level code must start with `module`, `class` or `function`")
            }
            ErrorCode::InvalidNumber => Some("use a value between -2^63 and 2^63-1"),
            _ => None,
        }
    }
}
