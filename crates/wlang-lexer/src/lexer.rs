//! The wlang lexer.
//! wlang 词法分析器。

use crate::config::LexerConfig;
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use tracing::{debug, warn};
use wlang_common::{Position, SourceFile, Span};
use wlang_diagnostic::{Diagnostic, DiagnosticKind, Label};

/// States of the lexer state machine.
/// 词法分析器状态机的状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerState {
    /// Between tokens - 位于 token 之间
    Initial,
    /// After `!` - 读到 `!` 之后
    SeenBang,
    /// After `:` - 读到 `:` 之后
    SeenColon,
    /// After `=` - 读到 `=` 之后
    SeenEquals,
    /// After `>` - 读到 `>` 之后
    SeenGreaterThan,
    /// After `<` - 读到 `<` 之后
    SeenLessThan,
    /// After `/` - 读到 `/` 之后
    SeenFowardSlash,
    /// Inside a string literal - 在字符串字面量内部
    SeenQuote,
    /// Inside an identifier or keyword - 在标识符或关键字内部
    SeenIdentifier,
    /// Inside a number literal - 在数字字面量内部
    SeenNumber,
    /// Inside a `//` comment - 在 `//` 注释内部
    InsideInlineComment,
}

/// Result of feeding one character to the state machine.
/// 向状态机输入一个字符的结果。
#[derive(Debug)]
struct Transition {
    next: LexerState,
    /// When false the same character is fed again in `next`.
    /// 为 false 时，同一字符会在 `next` 状态下再次处理。
    consumed: bool,
    token: Option<Token>,
}

impl Transition {
    fn advance(next: LexerState) -> Self {
        Self {
            next,
            consumed: true,
            token: None,
        }
    }

    fn emit(next: LexerState, token: Token) -> Self {
        Self {
            next,
            consumed: true,
            token: Some(token),
        }
    }

    fn reprocess(next: LexerState, token: Token) -> Self {
        Self {
            next,
            consumed: false,
            token: Some(token),
        }
    }
}

/// The wlang lexer.
/// wlang 词法分析器。
///
/// A single forward pass over the code points of a [`SourceFile`]. Multi-character tokens
/// are disambiguated by re-feeding the current character under a new state, so the read
/// position never moves backwards.
/// 对 [`SourceFile`] 的码点进行单次前向扫描。多字符 token 通过在新状态下重新处理当前字符来消歧，
/// 读取位置从不回退。
pub struct Lexer<'src> {
    source: &'src SourceFile,
    config: LexerConfig,
    state: LexerState,
    /// Index of the current character - 当前字符的索引
    index: usize,
    /// Position of the current character - 当前字符的位置
    position: Position,
    /// Where the pending multi-character token started - 待定多字符 token 的起点
    start: (Position, usize),
    /// Text of the pending identifier, number or string - 待定标识符、数字或字符串的文本
    lexeme: String,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source buffer.
    /// 为给定的源缓冲区创建新的词法分析器。
    pub fn new(source: &'src SourceFile) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'src SourceFile, config: LexerConfig) -> Self {
        Self {
            source,
            config,
            state: LexerState::Initial,
            index: 0,
            position: Position::START,
            start: (Position::START, 0),
            lexeme: String::new(),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire source and return tokens and diagnostics.
    /// 对整个源代码进行词法分析，返回 token 列表和诊断信息。
    ///
    /// When the error limit is exceeded the remaining input is discarded and the tokens
    /// are only a prefix of the file.
    /// 超过错误上限时，剩余输入会被丢弃，返回的 token 只是文件的前缀。
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        loop {
            if self.diagnostics.len() > self.config.max_errors {
                warn!(
                    file = self.source.name(),
                    errors = self.diagnostics.len(),
                    "too many tokenization errors, discarding the rest of the input"
                );
                break;
            }

            // `None` is the end-of-input sentinel; it flushes any pending token.
            // `None` 是输入结束的哨兵，用于输出待定的 token。
            let ch = self.source.char_at(self.index);
            loop {
                let transition = self.transition(ch);
                self.state = transition.next;
                if let Some(token) = transition.token {
                    self.tokens.push(token);
                }
                if transition.consumed {
                    break;
                }
            }

            match ch {
                Some(ch) => self.bump(ch),
                None => break,
            }
        }

        debug!(
            file = self.source.name(),
            tokens = self.tokens.len(),
            errors = self.diagnostics.len(),
            "tokenized"
        );
        (self.tokens, self.diagnostics)
    }

    /// Move past the current character.
    /// 前进到下一个字符。
    fn bump(&mut self, ch: char) {
        self.index += 1;
        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
    }

    /// Dispatch on the current state and character.
    /// 根据当前状态和字符进行分派。
    fn transition(&mut self, ch: Option<char>) -> Transition {
        match self.state {
            LexerState::Initial => self.initial(ch),
            LexerState::SeenBang => self.maybe_equals(ch, TokenKind::BangEquals, TokenKind::Bang),
            LexerState::SeenColon => {
                self.maybe_equals(ch, TokenKind::ColonEquals, TokenKind::Colon)
            }
            LexerState::SeenEquals => {
                self.maybe_equals(ch, TokenKind::EqualsEquals, TokenKind::Equal)
            }
            LexerState::SeenGreaterThan => {
                self.maybe_equals(ch, TokenKind::GreaterEquals, TokenKind::GreaterThan)
            }
            LexerState::SeenLessThan => {
                self.maybe_equals(ch, TokenKind::LessEquals, TokenKind::LessThan)
            }
            LexerState::SeenFowardSlash => match ch {
                Some('/') => Transition::advance(LexerState::InsideInlineComment),
                _ => Transition::reprocess(
                    LexerState::Initial,
                    self.finish(TokenKind::FowardSlash, false),
                ),
            },
            LexerState::SeenQuote => match ch {
                Some('"') => {
                    self.lexeme.push('"');
                    Transition::emit(LexerState::Initial, self.finish(TokenKind::String, true))
                }
                Some(ch) => {
                    self.lexeme.push(ch);
                    Transition::advance(LexerState::SeenQuote)
                }
                // Unterminated string: the rest of the input is swallowed silently.
                // 未终止的字符串：静默吞掉剩余输入。
                None => {
                    self.lexeme.clear();
                    Transition::advance(LexerState::Initial)
                }
            },
            LexerState::SeenIdentifier => match ch {
                Some(ch) if is_identifier_continue(ch) => {
                    self.lexeme.push(ch);
                    Transition::advance(LexerState::SeenIdentifier)
                }
                _ => {
                    let token = match TokenKind::keyword_from_str(&self.lexeme) {
                        Some(keyword) => {
                            self.lexeme.clear();
                            self.finish(keyword, false)
                        }
                        None => self.finish(TokenKind::Identifier, false),
                    };
                    Transition::reprocess(LexerState::Initial, token)
                }
            },
            LexerState::SeenNumber => match ch {
                Some(ch) if ch.is_ascii_digit() => {
                    self.lexeme.push(ch);
                    Transition::advance(LexerState::SeenNumber)
                }
                _ => Transition::reprocess(
                    LexerState::Initial,
                    self.finish(TokenKind::Number, false),
                ),
            },
            // The newline ending a comment is consumed without a `NewLine` token.
            // 结束注释的换行符被消耗，不产生 `NewLine` token。
            LexerState::InsideInlineComment => match ch {
                Some('\n') | None => Transition::advance(LexerState::Initial),
                Some(_) => Transition::advance(LexerState::InsideInlineComment),
            },
        }
    }

    fn initial(&mut self, ch: Option<char>) -> Transition {
        let Some(ch) = ch else {
            return Transition::advance(LexerState::Initial);
        };

        // Single character tokens - 单字符 token
        let single = match ch {
            '\n' => Some(TokenKind::NewLine),
            '.' => Some(TokenKind::Dot),
            ',' => Some(TokenKind::Comma),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '[' => Some(TokenKind::LeftSquareBracket),
            ']' => Some(TokenKind::RightSquareBracket),
            '(' => Some(TokenKind::LeftParens),
            ')' => Some(TokenKind::RightParens),
            _ => None,
        };
        if let Some(kind) = single {
            let span = Span::from_usize(self.index, self.index + 1);
            return Transition::emit(
                LexerState::Initial,
                Token::new(kind, String::new(), self.position, span),
            );
        }

        match ch {
            ' ' | '\t' => Transition::advance(LexerState::Initial),
            '!' => self.begin(LexerState::SeenBang),
            ':' => self.begin(LexerState::SeenColon),
            '=' => self.begin(LexerState::SeenEquals),
            '>' => self.begin(LexerState::SeenGreaterThan),
            '<' => self.begin(LexerState::SeenLessThan),
            '/' => self.begin(LexerState::SeenFowardSlash),
            '"' => {
                self.lexeme.push(ch);
                self.begin(LexerState::SeenQuote)
            }
            ch if is_identifier_start(ch) => {
                self.lexeme.push(ch);
                self.begin(LexerState::SeenIdentifier)
            }
            ch if ch.is_ascii_digit() => {
                self.lexeme.push(ch);
                self.begin(LexerState::SeenNumber)
            }
            ch => {
                self.error_unexpected_char(ch);
                Transition::advance(LexerState::Initial)
            }
        }
    }

    /// Maximal munch for `X=` operators: extend on `=`, otherwise fall back to `X`
    /// and reprocess the current character.
    /// `X=` 运算符的最长匹配：遇到 `=` 时扩展，否则回退为 `X` 并重新处理当前字符。
    fn maybe_equals(
        &mut self,
        ch: Option<char>,
        extended: TokenKind,
        fallback: TokenKind,
    ) -> Transition {
        match ch {
            Some('=') => Transition::emit(LexerState::Initial, self.finish(extended, true)),
            _ => Transition::reprocess(LexerState::Initial, self.finish(fallback, false)),
        }
    }

    /// Record the start of a multi-character token and enter `state`.
    /// 记录多字符 token 的起点并进入 `state`。
    fn begin(&mut self, state: LexerState) -> Transition {
        self.start = (self.position, self.index);
        Transition::advance(state)
    }

    /// Build the pending token, ending before or after the current character.
    /// 构造待定的 token，结束于当前字符之前或之后。
    fn finish(&mut self, kind: TokenKind, include_current: bool) -> Token {
        let (position, start) = self.start;
        let end = if include_current {
            self.index + 1
        } else {
            self.index
        };
        Token::new(
            kind,
            std::mem::take(&mut self.lexeme),
            position,
            Span::from_usize(start, end),
        )
    }

    /// Report an unexpected character error.
    /// 报告意外字符错误。
    fn error_unexpected_char(&mut self, ch: char) {
        let span = Span::from_usize(self.index, self.index + 1);
        let error = LexError::UnexpectedCharacter { ch };
        self.diagnostics.push(
            Diagnostic::error(
                DiagnosticKind::Lexer,
                self.position,
                span,
                error.to_string(),
            )
            .with_code(error.code())
            .with_label(Label::new(span, "unexpected character here")),
        );
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
