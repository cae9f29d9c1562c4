//! Lexical errors.

use thiserror::Error;
use wlang_diagnostic::ErrorCode;

/// An input character that matches no lexical rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character U+{code:04X} {ch:?}", code = u32::from(*.ch))]
    UnexpectedCharacter { ch: char },
}

impl LexError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnexpectedCharacter { .. } => ErrorCode::UnexpectedCharacter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        let err = LexError::UnexpectedCharacter { ch: '@' };
        assert_eq!(err.to_string(), "unexpected character U+0040 '@'");

        let err = LexError::UnexpectedCharacter { ch: 'é' };
        assert_eq!(err.to_string(), "unexpected character U+00E9 'é'");
    }
}
