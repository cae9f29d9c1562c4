//! The wlang parser.

use tracing::{debug, trace, warn};
use wlang_common::{Position, Span};
use wlang_diagnostic::Diagnostic;
use wlang_lexer::{Token, TokenKind};
use wlang_syntax::{Stmt, StmtKind};

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::recovery::{ATTRIBUTE_STARTS, LINE_ENDS, is_block_end, is_decl_start, is_line_end};

/// The wlang parser.
///
/// Owns the token sequence and a cursor into it. Grammar rules append the nodes they build
/// to the parent they are given and record errors instead of returning them.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Returned by the cursor once it runs past the last token.
    eof: Token,
    config: ParserConfig,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: Vec<Token>, config: ParserConfig) -> Self {
        let eof = match tokens.last() {
            Some(last) => Token::eof(last.position, Span::new(last.span.end, last.span.end)),
            None => Token::eof(Position::START, Span::DUMMY),
        };
        Self {
            tokens,
            pos: 0,
            eof,
            config,
            diagnostics: Vec::new(),
        }
    }

    /// Place the virtual end-of-input token at the end of the source buffer.
    pub fn with_end(mut self, position: Position, offset: usize) -> Self {
        self.eof = Token::eof(position, Span::from_usize(offset, offset));
        self
    }

    pub fn diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Parse a complete program into the implicit `Main` module.
    ///
    /// Parsing stops once more than `max_errors` errors were recorded at top level; the
    /// recorded errors are then truncated to `max_errors`.
    pub fn parse_program(&mut self) -> Stmt {
        let mut root = Stmt::root();

        self.skip_newlines();
        while !self.check(TokenKind::Eof) {
            if self.diagnostics.len() > self.config.max_errors {
                warn!(
                    errors = self.diagnostics.len(),
                    "too many parser errors, abandoning the rest of the input"
                );
                break;
            }
            self.parse_statement(&mut root);
        }
        self.diagnostics.truncate(self.config.max_errors);

        debug!(
            statements = root.count() - 1,
            errors = self.diagnostics.len(),
            "parsed"
        );
        root
    }

    // ========== Declarations ==========

    /// Parse a declaration, or record a placeholder for anything else.
    fn parse_statement(&mut self, parent: &mut Stmt) {
        let kind = self.current().kind;
        if !is_decl_start(kind) {
            let token = self.current().clone();
            self.report(ParseError::ExpectedStatement {
                found: token.clone(),
            });
            parent.push(Stmt::new(StmtKind::ErrorPlaceholder, token));
            self.advance_skipping_newlines();
            return;
        }

        match kind {
            TokenKind::KeywordModule => self.parse_module(parent),
            TokenKind::KeywordClass => self.parse_class(parent),
            _ => self.parse_function(parent),
        }
    }

    fn parse_module(&mut self, parent: &mut Stmt) {
        self.expect_and_advance_skipping_newlines(&[TokenKind::KeywordModule]);
        let name = self.expect_and_advance_skipping_newlines(&[TokenKind::Identifier]);
        trace!(name = %name.text, line = name.line(), "module");

        let mut module = Stmt::new(StmtKind::Module, name);
        while !is_block_end(self.current().kind) {
            self.parse_statement(&mut module);
        }
        self.expect_end();
        parent.push(module);
    }

    fn parse_class(&mut self, parent: &mut Stmt) {
        self.expect_and_advance_skipping_newlines(&[TokenKind::KeywordClass]);
        let name = self.expect_and_advance_skipping_newlines(&[TokenKind::Identifier]);
        trace!(name = %name.text, line = name.line(), "class");

        let mut class = Stmt::new(StmtKind::Class, name);
        if self.check(TokenKind::LessThan) {
            self.advance_skipping_newlines();
            match self.require(&[TokenKind::Identifier]) {
                Ok(parent_name) => class.push(Stmt::new(StmtKind::Inherits, parent_name)),
                Err(err) => self.report(err),
            }
            self.advance_skipping_newlines();
        }
        self.parse_attribute_list(&mut class);

        self.skip_newlines();
        while !is_block_end(self.current().kind) {
            if self.check(TokenKind::KeywordFunction) {
                self.parse_function(&mut class);
            } else {
                self.expect_and_advance_skipping_newlines(&[TokenKind::KeywordFunction]);
            }
        }
        self.expect_end();
        parent.push(class);
    }

    fn parse_function(&mut self, parent: &mut Stmt) {
        self.expect_and_advance_skipping_newlines(&[TokenKind::KeywordFunction]);
        // The attribute list has to start on the declaration line.
        let name = self.expect_and_advance(&[TokenKind::Identifier]);
        trace!(name = %name.text, line = name.line(), "function");

        let mut function = Stmt::new(StmtKind::Function, name);
        self.parse_attribute_list(&mut function);
        self.parse_body(&mut function);
        parent.push(function);
    }

    /// Parse an optional attribute list into `owner`.
    ///
    /// Default values are restricted to literals.
    fn parse_attribute_list(&mut self, owner: &mut Stmt) {
        if !ATTRIBUTE_STARTS.contains(&self.current().kind) {
            return;
        }

        let parenthesized = self.check(TokenKind::LeftParens);
        if parenthesized {
            self.advance_skipping_newlines();
            if self.check(TokenKind::RightParens) {
                self.advance();
                return;
            }
        }

        loop {
            let name = self.expect_and_advance_skipping_newlines(&[TokenKind::Identifier]);
            let mut attribute = Stmt::new(StmtKind::Attribute, name);
            if self.check(TokenKind::Equal) {
                self.advance_skipping_newlines();
                match self.parse_literal() {
                    Ok(value) => attribute = attribute.with_expr(value),
                    Err(err) => self.report(err),
                }
            }
            owner.push(attribute);

            if self.check(TokenKind::Comma) {
                self.advance_skipping_newlines();
            } else {
                break;
            }
        }

        if parenthesized {
            self.expect_and_advance_skipping_newlines(&[TokenKind::RightParens]);
        }
    }

    /// Parse body statements up to and including the closing `end`.
    fn parse_body(&mut self, owner: &mut Stmt) {
        self.skip_newlines();
        while !is_block_end(self.current().kind) {
            match self.current().kind {
                TokenKind::KeywordIf => self.parse_block(StmtKind::Conditional, owner),
                TokenKind::KeywordLoop => self.parse_block(StmtKind::Loop, owner),
                _ => self.parse_expression_statement(owner),
            }
            self.skip_newlines();
        }
        self.expect_end();
    }

    /// Parse an `if` or `loop` block. Everything after the keyword up to `end` is
    /// parsed as nested statements; the condition slot stays empty.
    fn parse_block(&mut self, kind: StmtKind, owner: &mut Stmt) {
        let keyword = self.current().clone();
        trace!(kind = %kind, line = keyword.line(), "block");
        self.advance_skipping_newlines();

        let mut block = Stmt::new(kind, keyword);
        self.parse_body(&mut block);
        owner.push(block);
    }

    fn parse_expression_statement(&mut self, owner: &mut Stmt) {
        let start = self.pos;
        let first = self.current().clone();
        let result = self
            .parse_expression(0)
            .and_then(|expr| self.require(LINE_ENDS).map(|_| expr));

        match result {
            Ok(expr) => {
                let statement = Stmt::new(StmtKind::ExpressionStatement, first);
                owner.push(statement.with_expr(expr));
            }
            Err(err) => {
                self.report(err);
                self.synchronize_line(start);
            }
        }
    }

    fn expect_end(&mut self) {
        self.expect_and_advance_skipping_newlines(&[TokenKind::KeywordEnd]);
    }

    // ========== Cursor ==========

    /// The token at the cursor, or the virtual end-of-input token.
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// The token after the cursor, or the virtual end-of-input token.
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.pos + 1).unwrap_or(&self.eof)
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Move to the next token.
    pub fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Move to the next token, then skip any newlines.
    pub fn advance_skipping_newlines(&mut self) {
        self.advance();
        self.skip_newlines();
    }

    pub fn skip_newlines(&mut self) {
        while self.check(TokenKind::NewLine) {
            self.advance();
        }
    }

    /// The current token if its kind is one of `kinds`.
    pub fn require(&self, kinds: &[TokenKind]) -> Result<Token, ParseError> {
        let token = self.current();
        if kinds.contains(&token.kind) {
            Ok(token.clone())
        } else {
            Err(ParseError::expected(kinds, token))
        }
    }

    /// Return the current token, recording an error if its kind is not one of `kinds`.
    pub fn expect(&mut self, kinds: &[TokenKind]) -> Token {
        match self.require(kinds) {
            Ok(token) => token,
            Err(err) => {
                let token = err.token().clone();
                self.report(err);
                token
            }
        }
    }

    /// Like [`Parser::expect`], then advance whether or not the expectation held.
    pub fn expect_and_advance(&mut self, kinds: &[TokenKind]) -> Token {
        let token = self.expect(kinds);
        self.advance();
        token
    }

    /// Like [`Parser::expect_and_advance`], then skip any newlines.
    pub fn expect_and_advance_skipping_newlines(&mut self, kinds: &[TokenKind]) -> Token {
        let token = self.expect(kinds);
        self.advance_skipping_newlines();
        token
    }

    // ========== Error Recovery ==========

    pub(crate) fn report(&mut self, err: ParseError) {
        trace!(error = %err, "recording parser error");
        self.diagnostics.push(err.into_diagnostic());
    }

    /// Skip to the end of the current line, consuming at least one token past `start`.
    fn synchronize_line(&mut self, start: usize) {
        if self.pos == start {
            self.advance();
        }
        while !is_line_end(self.current().kind) {
            self.advance();
        }
    }
}
