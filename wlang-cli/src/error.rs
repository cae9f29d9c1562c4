//! CLI errors.
//! CLI 错误。

use thiserror::Error;
use wlang_common::SourceError;

/// Errors that end a CLI command with a failure status.
/// 导致 CLI 命令以失败状态结束的错误。
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("{count} tokenization error(s) found")]
    Tokenize { count: usize },

    #[error("{lexer} tokenization error(s) and {parser} parser error(s) found")]
    Diagnostics { lexer: usize, parser: usize },

    #[error("cannot serialize syntax tree: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
}
