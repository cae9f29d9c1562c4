//! Expression parsing by precedence climbing.

use wlang_lexer::{Token, TokenKind};
use wlang_syntax::{Expr, ExprKind};

use crate::error::ParseError;
use crate::parser::Parser;

/// Operator associativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl Associativity {
    /// Added to an operator's precedence to get the minimum precedence of its right operand.
    fn delta(self) -> u8 {
        match self {
            Associativity::Left => 1,
            Associativity::Right => 0,
        }
    }
}

/// Binding power of a token used as an infix operator. Zero for anything else.
pub fn precedence(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::Equal => 1,
        TokenKind::EqualsEquals | TokenKind::BangEquals => 3,
        TokenKind::Plus | TokenKind::Minus => 4,
        TokenKind::FowardSlash | TokenKind::Star => 7,
        TokenKind::Dot => 14,
        _ => 0,
    }
}

pub fn associativity(kind: TokenKind) -> Associativity {
    match kind {
        TokenKind::Equal => Associativity::Right,
        _ => Associativity::Left,
    }
}

/// Tokens accepted as binary operators.
pub fn is_infix_operator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Dot
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::FowardSlash
            | TokenKind::EqualsEquals
            | TokenKind::BangEquals
            | TokenKind::Equal
    )
}

impl Parser {
    /// Parse an expression whose operators bind at least as tightly as `min_precedence`.
    ///
    /// Stops without consuming at a newline, the end of input or a closing parenthesis.
    pub fn parse_expression(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary()?;

        loop {
            let token = self.current();
            if matches!(
                token.kind,
                TokenKind::NewLine | TokenKind::Eof | TokenKind::RightParens
            ) {
                break;
            }

            let precedence = precedence(token.kind);
            if precedence < min_precedence {
                break;
            }
            if !is_infix_operator(token.kind) {
                return Err(ParseError::UnexpectedRhs {
                    found: token.clone(),
                });
            }

            let operator = token.clone();
            self.advance();
            let right = self.parse_expression(precedence + associativity(operator.kind).delta())?;
            left = Expr::binary(operator, left, right);
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::Number | TokenKind::String => self.parse_literal(),
            TokenKind::Identifier => {
                self.advance();
                Ok(Expr::new(ExprKind::Variable(token.text.clone()), token))
            }
            TokenKind::LeftParens => {
                self.advance();
                let inner = self.parse_expression(0)?;
                self.require(&[TokenKind::RightParens])?;
                self.advance();
                Ok(inner)
            }
            _ => Err(ParseError::UnexpectedLhs { found: token }),
        }
    }

    /// Parse a number or string literal. The current token is consumed even if it is
    /// not a literal.
    pub(crate) fn parse_literal(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().clone();
        self.advance();
        literal(token)
    }
}

fn literal(token: Token) -> Result<Expr, ParseError> {
    match token.kind {
        TokenKind::Number => match token.text.parse::<i64>() {
            Ok(value) => Ok(Expr::new(ExprKind::NumberLiteral(value), token)),
            Err(_) => Err(ParseError::InvalidNumber { found: token }),
        },
        TokenKind::String => {
            let text = token.text.as_str();
            let text = text.strip_prefix('"').unwrap_or(text);
            let text = text.strip_suffix('"').unwrap_or(text);
            Ok(Expr::new(ExprKind::StringLiteral(text.to_string()), token))
        }
        _ => Err(ParseError::expected(
            &[TokenKind::Number, TokenKind::String],
            &token,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wlang_common::SourceFile;
    use wlang_lexer::Lexer;
    use wlang_syntax::Literal;

    fn parse_expr(text: &str) -> Result<Expr, ParseError> {
        let source = SourceFile::new("test", text);
        let (tokens, diagnostics) = Lexer::new(&source).tokenize();
        assert!(diagnostics.is_empty(), "lexer errors: {diagnostics:?}");
        Parser::new(tokens).parse_expression(0)
    }

    fn render(text: &str) -> String {
        match parse_expr(text) {
            Ok(expr) => expr.to_string(),
            Err(err) => panic!("failed to parse {text:?}: {err}"),
        }
    }

    #[test]
    fn test_precedence() {
        assert_eq!(render("1 + 2 * 3"), "Plus(1, Star(2, 3))");
        assert_eq!(render("1 * 2 + 3"), "Plus(Star(1, 2), 3)");
        assert_eq!(render("a == b + 1"), "EqualsEquals(a, Plus(b, 1))");
        assert_eq!(render("a.b + c.d"), "Plus(Dot(a, b), Dot(c, d))");
        assert_eq!(render("a = b == c"), "Equal(a, EqualsEquals(b, c))");
    }

    #[test]
    fn test_associativity() {
        assert_eq!(render("a . b . c"), "Dot(Dot(a, b), c)");
        assert_eq!(render("1 - 2 - 3"), "Minus(Minus(1, 2), 3)");
        assert_eq!(render("8 / 4 / 2"), "FowardSlash(FowardSlash(8, 4), 2)");
        assert_eq!(render("a = b = c"), "Equal(a, Equal(b, c))");
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(render("(1 + 2) * 3"), "Star(Plus(1, 2), 3)");
        assert_eq!(render("((a))"), "a");
        assert_eq!(render("2 * (a = 1)"), "Star(2, Equal(a, 1))");
    }

    #[test]
    fn test_literals() {
        let expr = parse_expr("\"Thïs ìs\"").unwrap();
        assert_eq!(expr.literal(), Some(Literal::Text("Thïs ìs")));
        assert_eq!(expr.token.text, "\"Thïs ìs\"");

        let expr = parse_expr("1337").unwrap();
        assert_eq!(expr.literal(), Some(Literal::Int(1337)));
    }

    #[test]
    fn test_invalid_number() {
        let err = parse_expr("99999999999999999999").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { .. }));
    }

    #[test]
    fn test_unexpected_lhs() {
        let err = parse_expr("* 2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected token Star on left-hand side of expression"
        );
    }

    #[test]
    fn test_unexpected_rhs() {
        let err = parse_expr("a b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected token Identifier on right-hand side of expression"
        );

        let err = parse_expr("a < b").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedRhs { .. }));
    }

    #[test]
    fn test_unclosed_paren() {
        let err = parse_expr("(1 + 2\n").unwrap_err();
        assert_eq!(err.to_string(), "expected one of RightParens got NewLine");
    }

    #[test]
    fn test_stops_at_line_end() {
        let source = SourceFile::new("test", "a + 1\nb");
        let (tokens, _) = Lexer::new(&source).tokenize();
        let mut parser = Parser::new(tokens);
        let expr = parser.parse_expression(0).unwrap();
        assert_eq!(expr.to_string(), "Plus(a, 1)");
        assert_eq!(parser.current().kind, TokenKind::NewLine);
    }
}
