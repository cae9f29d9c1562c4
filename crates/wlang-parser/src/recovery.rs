//! Error recovery strategies for the parser.
//!
//! Every recovery path consumes at least one token, so parsing terminates
//! whether or not an error limit is configured.

use wlang_lexer::TokenKind;

/// Tokens that start a declaration.
pub const DECL_STARTS: &[TokenKind] = &[
    TokenKind::KeywordModule,
    TokenKind::KeywordClass,
    TokenKind::KeywordFunction,
];

/// Tokens that close a body.
pub const BLOCK_ENDS: &[TokenKind] = &[TokenKind::KeywordEnd, TokenKind::Eof];

/// Tokens that end an expression statement.
pub const LINE_ENDS: &[TokenKind] = &[TokenKind::NewLine, TokenKind::Eof];

/// Tokens that may start an attribute list.
pub const ATTRIBUTE_STARTS: &[TokenKind] = &[TokenKind::Identifier, TokenKind::LeftParens];

/// Check if a token kind is in a set.
pub fn is_in_set(kind: TokenKind, set: &[TokenKind]) -> bool {
    set.contains(&kind)
}

/// Check if a token starts a declaration.
pub fn is_decl_start(kind: TokenKind) -> bool {
    is_in_set(kind, DECL_STARTS)
}

/// Check if a token closes a body.
pub fn is_block_end(kind: TokenKind) -> bool {
    is_in_set(kind, BLOCK_ENDS)
}

/// Check if a token ends an expression statement.
pub fn is_line_end(kind: TokenKind) -> bool {
    is_in_set(kind, LINE_ENDS)
}
