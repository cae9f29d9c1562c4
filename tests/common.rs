//! Integration tests for wlang-common crate.

use std::io::Write;
use wlang_common::{CharPos, Position, SourceFile, Span};

// ============================================================================
// Source Files
// ============================================================================

#[test]
fn test_source_file_is_addressed_by_code_point() {
    let file = SourceFile::new("main.w", "ïx\ny");
    assert_eq!(file.name(), "main.w");
    assert_eq!(file.len(), 4);
    assert_eq!(file.char_at(0), Some('ï'));
    assert_eq!(file.char_at(2), Some('\n'));
    assert_eq!(file.char_at(4), None);
    assert_eq!(file.end_position(), Position::new(2, 2));
}

#[test]
fn test_source_file_from_path() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    writeln!(tmp, "class Point").unwrap();
    writeln!(tmp, "end").unwrap();

    let file = SourceFile::from_path(tmp.path()).unwrap();
    assert_eq!(file.text(), "class Point\nend\n");
    assert_eq!(file.name(), tmp.path().display().to_string());
}

#[test]
fn test_source_file_with_latin1_comment() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(b"// caf\xe9\nmodule M\nend\n").unwrap();

    let file = SourceFile::from_path(tmp.path()).unwrap();
    assert!(file.text().starts_with("// caf\u{FFFD}\n"));
    assert_eq!(file.end_position(), Position::new(4, 1));
}

#[test]
fn test_source_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.w");
    let err = SourceFile::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("missing.w"));
}

// ============================================================================
// Positions and Spans
// ============================================================================

#[test]
fn test_position_display() {
    assert_eq!(Position::START.to_string(), "1:1");
    assert_eq!(Position::new(12, 3).to_string(), "12:3");
    assert!(Position::new(1, 9) < Position::new(2, 1));
}

#[test]
fn test_span_range() {
    let span = Span::from_usize(2, 9);
    assert_eq!(span.start, CharPos(2));
    assert_eq!(span.end, CharPos(9));
    assert_eq!(span.range(), 2..9);
    assert_eq!(Span::DUMMY.range(), 0..0);
    assert_eq!(format!("{span:?}"), "2..9");
}
