//! The `wlang check` command.
//! `wlang check` 命令。

use super::report;
use crate::error::CliError;
use crate::output;
use wlang_common::SourceFile;
use wlang_parser::{FrontendConfig, parse_with_config};

/// Tokenize and parse a file, reporting every problem found.
/// 对文件进行词法分析和解析，报告发现的所有问题。
pub fn run(file: &str, config: &FrontendConfig, verbose: bool) -> Result<(), CliError> {
    let source = SourceFile::from_path(file)?;
    let parsed = parse_with_config(&source, config);

    report(&source, &parsed.lexer_diagnostics)?;
    report(&source, &parsed.parser_diagnostics)?;

    if verbose {
        output::info(&format!("Parsed {} statements", parsed.root.count() - 1));
    }

    if parsed.has_errors() {
        return Err(CliError::Diagnostics {
            lexer: parsed.lexer_diagnostics.len(),
            parser: parsed.parser_diagnostics.len(),
        });
    }

    output::success("OK - No errors found");
    Ok(())
}
