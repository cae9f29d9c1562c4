//! Parser and front end configuration.

use wlang_lexer::LexerConfig;

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Top-level parsing stops once more than this many errors were recorded,
    /// and the reported list is truncated to this length.
    pub max_errors: usize,
}

impl ParserConfig {
    pub const DEFAULT_MAX_ERRORS: usize = 5;

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

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_errors: Self::DEFAULT_MAX_ERRORS,
        }
    }
}

/// Configuration for both phases of the front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontendConfig {
    pub lexer: LexerConfig,
    pub parser: ParserConfig,
}

impl FrontendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lexer(mut self, lexer: LexerConfig) -> Self {
        self.lexer = lexer;
        self
    }

    pub fn parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FrontendConfig::default();
        assert_eq!(config.lexer.max_errors, 10);
        assert_eq!(config.parser.max_errors, 5);
    }

    #[test]
    fn test_builders() {
        let config = FrontendConfig::new()
            .lexer(LexerConfig::new().max_errors(1))
            .parser(ParserConfig::new().max_errors(2));
        assert_eq!(config.lexer.max_errors, 1);
        assert_eq!(config.parser.max_errors, 2);
    }
}
