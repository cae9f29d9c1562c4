//! The `wlang tokens` command.
//! `wlang tokens` 命令。

use super::report;
use crate::error::CliError;
use std::io::{self, Write};
use wlang_common::SourceFile;
use wlang_lexer::{Lexer, LexerConfig, Token};

/// Print every token of a file, one per line.
/// 逐行打印文件中的每个 token。
pub fn run(file: &str, config: &LexerConfig) -> Result<(), CliError> {
    let source = SourceFile::from_path(file)?;
    let (tokens, diagnostics) = Lexer::with_config(&source, config.clone()).tokenize();

    let mut out = io::stdout().lock();
    for token in &tokens {
        writeln!(out, "{}", format_token(token))?;
    }
    out.flush()?;

    report(&source, &diagnostics)?;
    if !diagnostics.is_empty() {
        return Err(CliError::Tokenize {
            count: diagnostics.len(),
        });
    }
    Ok(())
}

/// `line:column Kind "text"`, without the text for fixed tokens.
fn format_token(token: &Token) -> String {
    if token.text.is_empty() {
        format!("{} {}", token.position, token.kind)
    } else {
        format!("{} {} {:?}", token.position, token.kind, token.text)
    }
}
