//! The source buffer handed to the lexer.

use crate::Position;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a source buffer.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An immutable source text addressed by code point.
///
/// The name is only used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    text: String,
    chars: Vec<char>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let chars = text.chars().collect();
        Self {
            name: name.into(),
            text,
            chars,
        }
    }

    /// Read a file from disk, using its path as the display name.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Self::new(path.display().to_string(), text))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The code point at `index`, or `None` past the end of the buffer.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Number of code points in the buffer.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The position just past the last code point.
    pub fn end_position(&self) -> Position {
        self.chars.iter().fold(Position::START, |pos, &ch| {
            if ch == '\n' {
                Position::new(pos.line + 1, 1)
            } else {
                Position::new(pos.line, pos.column + 1)
            }
        })
    }
}
