//! Lexer configuration.

/// Lexer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    /// Lexing stops once more than this many errors were recorded.
    pub max_errors: usize,
}

impl LexerConfig {
    pub const DEFAULT_MAX_ERRORS: usize = 10;

    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error limit.
    pub fn max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_errors: Self::DEFAULT_MAX_ERRORS,
        }
    }
}
