//! Common utilities and data structures for wlang.
//!
//! This crate provides the foundational types shared by every phase of the front end:
//! - `SourceFile`: the source buffer, a display name plus its code points
//! - `Position`: 1-based line/column locations
//! - `Span`: code-point ranges used for rich diagnostics

mod source;
mod span;

pub use source::{SourceError, SourceFile};
pub use span::{CharPos, Position, Span};
