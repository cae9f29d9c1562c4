//! CLI command implementations.
//! CLI 命令实现。

pub mod check;
pub mod parse;
pub mod tokens;

use crate::error::CliError;
use wlang_common::SourceFile;
use wlang_diagnostic::{Diagnostic, emit};

/// Print each diagnostic as a source report followed by its one-line headline.
/// 将每条诊断打印为源码报告，并附上单行摘要。
pub fn report(source: &SourceFile, diagnostics: &[Diagnostic]) -> Result<(), CliError> {
    for diagnostic in diagnostics {
        emit(source.text(), source.name(), diagnostic)?;
        eprintln!("{}", diagnostic.headline(source.name()));
    }
    Ok(())
}
