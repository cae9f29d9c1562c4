//! Parser for wlang.
//!
//! This crate provides a recursive descent parser that converts tokens into a
//! statement tree, with precedence climbing for expressions.
//!
//! ## Error Recovery
//!
//! Errors are recorded as diagnostics and parsing continues, so a single pass reports
//! several problems and always produces a `Main` module. Every recovery consumes at
//! least one token.

mod config;
mod error;
mod expr;
mod parser;
mod recovery;

pub use config::{FrontendConfig, ParserConfig};
pub use error::ParseError;
pub use expr::{Associativity, associativity, is_infix_operator, precedence};
pub use parser::Parser;

use wlang_common::SourceFile;
use wlang_diagnostic::Diagnostic;
use wlang_lexer::{Lexer, Token};
use wlang_syntax::Stmt;

/// The result of running both phases over one source buffer.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    /// Display name of the source, used in headlines.
    pub file: String,
    pub root: Stmt,
    pub lexer_diagnostics: Vec<Diagnostic>,
    pub parser_diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.lexer_diagnostics.is_empty() || !self.parser_diagnostics.is_empty()
    }

    /// Lexer diagnostics followed by parser diagnostics.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.lexer_diagnostics
            .iter()
            .chain(self.parser_diagnostics.iter())
    }

    /// `tokenization error: ... at <file>:<line>:<column>` lines.
    pub fn lexer_errors(&self) -> Vec<String> {
        headlines(&self.file, &self.lexer_diagnostics)
    }

    /// `parser error: ... at <file>:<line>:<column>` lines.
    pub fn parser_errors(&self) -> Vec<String> {
        headlines(&self.file, &self.parser_diagnostics)
    }
}

fn headlines(file: &str, diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics.iter().map(|d| d.headline(file)).collect()
}

/// Tokenize and parse source code with the default configuration.
pub fn parse(source: &SourceFile) -> ParseOutput {
    parse_with_config(source, &FrontendConfig::default())
}

/// Tokenize and parse source code.
pub fn parse_with_config(source: &SourceFile, config: &FrontendConfig) -> ParseOutput {
    let (tokens, lexer_diagnostics) = Lexer::with_config(source, config.lexer.clone()).tokenize();
    ParseOutput {
        lexer_diagnostics,
        ..parse_tokens(source, tokens, &config.parser)
    }
}

/// Parse tokens already produced from `source`.
///
/// The returned output carries no lexer diagnostics.
pub fn parse_tokens(
    source: &SourceFile,
    tokens: Vec<Token>,
    config: &ParserConfig,
) -> ParseOutput {
    let mut parser =
        Parser::with_config(tokens, config.clone()).with_end(source.end_position(), source.len());
    let root = parser.parse_program();
    ParseOutput {
        file: source.name().to_string(),
        root,
        lexer_diagnostics: Vec::new(),
        parser_diagnostics: parser.diagnostics(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wlang_syntax::StmtKind;

    #[test]
    fn test_parse_tokens_places_eof_at_buffer_end() {
        let source = SourceFile::new("main.w", "module M

");
        let (tokens, _) = Lexer::new(&source).tokenize();
        let output = parse_tokens(&source, tokens, &ParserConfig::default());

        assert!(output.lexer_diagnostics.is_empty());
        assert_eq!(output.root.children[0].kind, StmtKind::Module);
        assert_eq!(
            output.parser_errors(),
            vec!["parser error: expected one of KeywordEnd got Eof at main.w:3:1".to_string()]
        );
    }

    #[test]
    fn test_parse_with_config_keeps_lexer_diagnostics() {
        let source = SourceFile::new("main.w", "@ module M
end
");
        let output = parse_with_config(&source, &FrontendConfig::default());
        assert_eq!(output.lexer_diagnostics.len(), 1);
        assert!(output.parser_diagnostics.is_empty());
        assert_eq!(output.root.children[0].name(), "M");
    }
}
