//! Token definitions for wlang.

use serde::Serialize;
use std::fmt;
use wlang_common::{Position, Span};

/// A token with its kind, raw lexeme and location.
///
/// `text` is empty for fixed-width tokens (punctuation, operators and keywords).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
            span,
        }
    }

    /// The virtual end-of-input token.
    pub fn eof(position: Position, span: Span) -> Self {
        Self::new(TokenKind::Eof, String::new(), position, span)
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Eof,
    NewLine,

    // Punctuation
    Dot,
    Comma,
    LeftSquareBracket,
    RightSquareBracket,
    LeftParens,
    RightParens,
    Colon,
    ColonEquals,

    // Operators
    Equal,
    FowardSlash,
    Star,
    Plus,
    Minus,
    EqualsEquals,
    LessEquals,
    GreaterEquals,
    LessThan,
    GreaterThan,
    Bang,
    BangEquals,

    // Keywords
    KeywordIf,
    KeywordModule,
    KeywordClass,
    KeywordFunction,
    KeywordEnd,
    KeywordLoop,

    // Variable width
    Identifier,
    String,
    Number,
}

impl TokenKind {
    /// The stable identifier of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "Eof",
            TokenKind::NewLine => "NewLine",
            TokenKind::Dot => "Dot",
            TokenKind::Comma => "Comma",
            TokenKind::LeftSquareBracket => "LeftSquareBracket",
            TokenKind::RightSquareBracket => "RightSquareBracket",
            TokenKind::LeftParens => "LeftParens",
            TokenKind::RightParens => "RightParens",
            TokenKind::Colon => "Colon",
            TokenKind::ColonEquals => "ColonEquals",
            TokenKind::Equal => "Equal",
            TokenKind::FowardSlash => "FowardSlash",
            TokenKind::Star => "Star",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::EqualsEquals => "EqualsEquals",
            TokenKind::LessEquals => "LessEquals",
            TokenKind::GreaterEquals => "GreaterEquals",
            TokenKind::LessThan => "LessThan",
            TokenKind::GreaterThan => "GreaterThan",
            TokenKind::Bang => "Bang",
            TokenKind::BangEquals => "BangEquals",
            TokenKind::KeywordIf => "KeywordIf",
            TokenKind::KeywordModule => "KeywordModule",
            TokenKind::KeywordClass => "KeywordClass",
            TokenKind::KeywordFunction => "KeywordFunction",
            TokenKind::KeywordEnd => "KeywordEnd",
            TokenKind::KeywordLoop => "KeywordLoop",
            TokenKind::Identifier => "Identifier",
            TokenKind::String => "String",
            TokenKind::Number => "Number",
        }
    }

    /// Returns the keyword for an identifier, if any.
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            "if" => Some(TokenKind::KeywordIf),
            "module" => Some(TokenKind::KeywordModule),
            "class" => Some(TokenKind::KeywordClass),
            "function" => Some(TokenKind::KeywordFunction),
            "end" => Some(TokenKind::KeywordEnd),
            "loop" => Some(TokenKind::KeywordLoop),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
