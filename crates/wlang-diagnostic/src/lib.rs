//! Diagnostic and error reporting for wlang.
//!
//! Diagnostics are plain values collected by each phase. They can be rendered as a
//! one-line headline or as a source-annotated report built with ariadne.

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label};

use ariadne::{ColorGenerator, Config, Label as AriadneLabel, Report, ReportKind, Source};
use std::io::{self, Write};
use std::ops::Range;

fn build_report<'a>(
    filename: &'a str,
    diagnostic: &Diagnostic,
    color: bool,
) -> Report<'a, (&'a str, Range<usize>)> {
    let mut colors = ColorGenerator::new();
    let offset = usize::from(diagnostic.span.start);
    let mut report = Report::build(ReportKind::Error, filename, offset)
        .with_config(Config::default().with_color(color))
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    for label in &diagnostic.labels {
        let mut ariadne_label =
            AriadneLabel::new((filename, label.span.range())).with_message(&label.message);
        if color {
            ariadne_label = ariadne_label.with_color(colors.next());
        }
        report = report.with_label(ariadne_label);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report.finish()
}

/// Render a diagnostic to stderr.
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) -> io::Result<()> {
    build_report(filename, diagnostic, true).eprint((filename, Source::from(source)))
}

/// Write an uncolored report for a diagnostic into `out`.
pub fn write_plain<W: Write>(
    source: &str,
    filename: &str,
    diagnostic: &Diagnostic,
    out: W,
) -> io::Result<()> {
    build_report(filename, diagnostic, false).write((filename, Source::from(source)), out)
}
