//! Positions and spans within a source buffer.
//! 源码缓冲区中的位置和范围。

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// An offset into a source buffer, counted in code points.
/// 源码缓冲区中的偏移量，以码点计数。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct CharPos(pub u32);

impl CharPos {
    pub const ZERO: CharPos = CharPos(0);
}

impl fmt::Debug for CharPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharPos({})", self.0)
    }
}

impl From<usize> for CharPos {
    fn from(pos: usize) -> Self {
        CharPos(pos as u32)
    }
}

impl From<CharPos> for usize {
    fn from(pos: CharPos) -> Self {
        pos.0 as usize
    }
}

/// A 1-based line and column, as shown to the user.
/// 从 1 开始的行号和列号，用于向用户显示。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The first character of a buffer. / 缓冲区的第一个字符。
    pub const START: Position = Position { line: 1, column: 1 };

    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The code points a token or diagnostic covers.
/// 词法单元或诊断覆盖的码点范围。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// First code point. / 第一个码点。
    pub start: CharPos,
    /// One past the last code point. / 最后一个码点之后。
    pub end: CharPos,
}

impl Span {
    pub const DUMMY: Span = Span {
        start: CharPos::ZERO,
        end: CharPos::ZERO,
    };

    pub fn new(start: CharPos, end: CharPos) -> Self {
        Span { start, end }
    }

    pub fn from_usize(start: usize, end: usize) -> Self {
        Self::new(CharPos::from(start), CharPos::from(end))
    }

    /// Code-point range for report rendering. / 用于报告渲染的码点区间。
    pub fn range(&self) -> Range<usize> {
        usize::from(self.start)..usize::from(self.end)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}
