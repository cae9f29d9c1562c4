//! Integration tests for wlang-lexer crate.

use wlang_common::{Position, SourceFile};
use wlang_lexer::{Lexer, LexerConfig, Token, TokenKind, tokenize};

fn lex_tokens(source: &str) -> Vec<Token> {
    let file = SourceFile::new("test.w", source);
    let (tokens, _) = tokenize(&file);
    tokens
}

fn lex(source: &str) -> Vec<TokenKind> {
    lex_tokens(source).into_iter().map(|t| t.kind).collect()
}

fn lex_with_errors(source: &str) -> (Vec<TokenKind>, usize) {
    let file = SourceFile::new("test.w", source);
    let (tokens, errors) = tokenize(&file);
    (tokens.into_iter().map(|t| t.kind).collect(), errors.len())
}

// ============================================================================
// Basic Token Tests
// ============================================================================

#[test]
fn test_operators() {
    assert_eq!(
        lex(". = / * + - == <= >= < > ! !="),
        vec![
            TokenKind::Dot,
            TokenKind::Equal,
            TokenKind::FowardSlash,
            TokenKind::Star,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::EqualsEquals,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::LessThan,
            TokenKind::GreaterThan,
            TokenKind::Bang,
            TokenKind::BangEquals,
        ]
    );
}

#[test]
fn test_single_operators_alone() {
    let cases = [
        (".", TokenKind::Dot),
        ("=", TokenKind::Equal),
        ("/", TokenKind::FowardSlash),
        ("*", TokenKind::Star),
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("==", TokenKind::EqualsEquals),
        ("<=", TokenKind::LessEquals),
        (">=", TokenKind::GreaterEquals),
        ("<", TokenKind::LessThan),
        (">", TokenKind::GreaterThan),
        ("!", TokenKind::Bang),
        ("!=", TokenKind::BangEquals),
        (":", TokenKind::Colon),
        (":=", TokenKind::ColonEquals),
    ];
    for (source, kind) in cases {
        assert_eq!(lex(source), vec![kind], "input {source:?}");
    }
}

#[test]
fn test_adjacent_operators() {
    assert_eq!(
        lex("===<<=!!="),
        vec![
            TokenKind::EqualsEquals,
            TokenKind::Equal,
            TokenKind::LessThan,
            TokenKind::LessEquals,
            TokenKind::Bang,
            TokenKind::BangEquals,
        ]
    );
}

#[test]
fn test_keywords() {
    assert_eq!(
        lex("if module class end loop"),
        vec![
            TokenKind::KeywordIf,
            TokenKind::KeywordModule,
            TokenKind::KeywordClass,
            TokenKind::KeywordEnd,
            TokenKind::KeywordLoop,
        ]
    );
    assert_eq!(lex("function"), vec![TokenKind::KeywordFunction]);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_eq!(lex("iff"), vec![TokenKind::Identifier]);
    assert_eq!(
        lex("ending modules"),
        vec![TokenKind::Identifier, TokenKind::Identifier]
    );
}

#[test]
fn test_literals() {
    let tokens = lex_tokens("ideNtifier \"Thïs ìs á string\" 1337");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier, TokenKind::String, TokenKind::Number]
    );
    assert_eq!(tokens[0].text, "ideNtifier");
    assert_eq!(tokens[1].text, "\"Thïs ìs á string\"");
    assert_eq!(tokens[2].text.parse::<i64>().unwrap(), 1337);
}

#[test]
fn test_punctuation_and_comments() {
    assert_eq!(
        lex(", [ ( ] ) \n  \n// comment \n"),
        vec![
            TokenKind::Comma,
            TokenKind::LeftSquareBracket,
            TokenKind::LeftParens,
            TokenKind::RightSquareBracket,
            TokenKind::RightParens,
            TokenKind::NewLine,
            TokenKind::NewLine,
        ]
    );
}

#[test]
fn test_comma_is_not_dot() {
    assert_ne!(TokenKind::Comma, TokenKind::Dot);
    assert_eq!(TokenKind::Comma.to_string(), "Comma");
    assert_eq!(lex(",."), vec![TokenKind::Comma, TokenKind::Dot]);
}

// ============================================================================
// Lexemes and Positions
// ============================================================================

#[test]
fn test_fixed_tokens_have_empty_text() {
    for token in lex_tokens("+ == if end ( \n") {
        assert!(token.text.is_empty(), "{:?}", token.kind);
    }
}

#[test]
fn test_positions() {
    let tokens = lex_tokens("module Foo\n  bar = 1\n");
    let positions: Vec<_> = tokens.iter().map(|t| (t.kind, t.position)).collect();
    assert_eq!(
        positions,
        vec![
            (TokenKind::KeywordModule, Position::new(1, 1)),
            (TokenKind::Identifier, Position::new(1, 8)),
            (TokenKind::NewLine, Position::new(1, 11)),
            (TokenKind::Identifier, Position::new(2, 3)),
            (TokenKind::Equal, Position::new(2, 7)),
            (TokenKind::Number, Position::new(2, 9)),
            (TokenKind::NewLine, Position::new(2, 10)),
        ]
    );
}

#[test]
fn test_positions_never_decrease() {
    let tokens = lex_tokens("class A < B\n  function f x = 1, y\n    x + y // sum\n  end\nend\n");
    for pair in tokens.windows(2) {
        assert!(pair[0].position <= pair[1].position);
        assert!(pair[0].span.end <= pair[1].span.start);
    }
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_unexpected_characters_are_skipped() {
    let (kinds, errors) = lex_with_errors("a @ b");
    assert_eq!(kinds, vec![TokenKind::Identifier, TokenKind::Identifier]);
    assert_eq!(errors, 1);
}

#[test]
fn test_error_limit() {
    let (kinds, errors) = lex_with_errors("@@@@@@@@@@@ abc");
    assert_eq!(errors, 11);
    assert!(kinds.is_empty());

    let (kinds, errors) = lex_with_errors("@@@@@@@@@@@@@@@@@@@@ abc");
    assert_eq!(errors, 11);
    assert!(kinds.is_empty());
}

#[test]
fn test_ten_errors_keep_lexing() {
    let (kinds, errors) = lex_with_errors("@@@@@@@@@@ abc");
    assert_eq!(errors, 10);
    assert_eq!(kinds, vec![TokenKind::Identifier]);
}

#[test]
fn test_configured_error_limit() {
    let file = SourceFile::new("test.w", "@ @ @ x");
    let config = LexerConfig::new().max_errors(0);
    let (tokens, errors) = Lexer::with_config(&file, config).tokenize();
    assert_eq!(errors.len(), 1);
    assert!(tokens.is_empty());
}

#[test]
fn test_unterminated_string() {
    let (kinds, errors) = lex_with_errors("a \"never closed\nb");
    assert_eq!(kinds, vec![TokenKind::Identifier]);
    assert_eq!(errors, 0);
}

#[test]
fn test_error_headline() {
    let file = SourceFile::new("main.w", "x\n  ~");
    let (_, errors) = tokenize(&file);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].headline(file.name()),
        "tokenization error: unexpected character U+007E '~' at main.w:2:3"
    );
}

#[test]
fn test_idempotent() {
    let text = r#"class A
  function f a = "s"
    a.b == 2 @
  end
end"#;
    let file = SourceFile::new("test.w", text);
    let first = tokenize(&file);
    let second = tokenize(&file);
    assert_eq!(first.0, second.0);
    assert_eq!(first.1.len(), second.1.len());
}
