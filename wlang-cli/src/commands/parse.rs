//! The `wlang parse` command.
//! `wlang parse` 命令。

use super::report;
use crate::error::CliError;
use crate::output;
use clap::ValueEnum;
use std::io::{self, Write};
use wlang_common::SourceFile;
use wlang_lexer::Lexer;
use wlang_parser::{FrontendConfig, parse_tokens};
use wlang_syntax::Stmt;

/// How the syntax tree is printed.
/// 语法树的打印方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TreeFormat {
    /// serde_json document.
    Json,
    /// Indented outline, one node per line.
    Outline,
}

#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub pretty: bool,
    pub format: TreeFormat,
    pub partial: bool,
}

/// Parse a file and print its syntax tree.
/// 解析文件并打印其语法树。
pub fn run(
    file: &str,
    options: &ParseOptions,
    config: &FrontendConfig,
    verbose: bool,
) -> Result<(), CliError> {
    let source = SourceFile::from_path(file)?;

    // Tokenize
    // 词法分析
    let (tokens, lexer_diagnostics) = Lexer::with_config(&source, config.lexer.clone()).tokenize();
    report(&source, &lexer_diagnostics)?;

    if !lexer_diagnostics.is_empty() {
        if !options.partial {
            return Err(CliError::Tokenize {
                count: lexer_diagnostics.len(),
            });
        }
        output::warning("tokenization failed, parsing the recovered tokens");
    }

    if verbose {
        output::info(&format!("Tokenized {} tokens", tokens.len()));
    }

    // Parse
    // 解析
    let parsed = parse_tokens(&source, tokens, &config.parser);
    report(&source, &parsed.parser_diagnostics)?;

    if verbose {
        output::info(&format!("Parsed {} statements", parsed.root.count() - 1));
    }

    let mut out = io::stdout().lock();
    out.write_all(render(&parsed.root, options)?.as_bytes())?;
    out.flush()?;

    if lexer_diagnostics.is_empty() && parsed.parser_diagnostics.is_empty() {
        Ok(())
    } else {
        Err(CliError::Diagnostics {
            lexer: lexer_diagnostics.len(),
            parser: parsed.parser_diagnostics.len(),
        })
    }
}

/// Render the tree in the requested format, newline terminated.
fn render(root: &Stmt, options: &ParseOptions) -> Result<String, CliError> {
    let mut rendered = match options.format {
        TreeFormat::Json if options.pretty => serde_json::to_string_pretty(root)?,
        TreeFormat::Json => serde_json::to_string(root)?,
        TreeFormat::Outline => root.to_string(),
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
