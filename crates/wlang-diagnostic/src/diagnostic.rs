//! Diagnostic types and builders.

use crate::ErrorCode;
use serde::Serialize;
use wlang_common::{Position, Span};

/// Kind of diagnostic for categorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    Lexer,
    Parser,
}

impl DiagnosticKind {
    /// The prefix used when the diagnostic is rendered on a single line.
    pub fn prefix(&self) -> &'static str {
        match self {
            DiagnosticKind::Lexer => "tokenization error",
            DiagnosticKind::Parser => "parser error",
        }
    }
}

/// A labeled span within a diagnostic.
#[derive(Debug, Clone, Serialize)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// An error message with optional labels and help.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub code: Option<ErrorCode>,
    pub message: String,
    pub position: Position,
    pub span: Span,
    pub labels: Vec<Label>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(
        kind: DiagnosticKind,
        position: Position,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
            position,
            span,
            labels: vec![],
            help: None,
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render as `<prefix>: <message> at <file>:<line>:<column>`.
    pub fn headline(&self, file: &str) -> String {
        format!(
            "{}: {} at {}:{}",
            self.kind.prefix(),
            self.message,
            file,
            self.position
        )
    }
}
