//! Source text model for fixture verification.
//!
//! A fixture is a plain source string; each string is one compilation unit.
//! This crate provides the shared vocabulary for talking about places in
//! fixture text:
//!
//! - [`Span`] - half-open byte ranges
//! - [`Position`] - zero-based line/character pairs, counted in characters
//! - [`LineIndex`] - bidirectional mapping between offsets and positions
//! - [`SourceFile`] - a named compilation unit
//! - [`markup`] - the `↓` annotation mini-language fixtures use to mark
//!   where a diagnostic must land

pub mod markup;

mod line_index;
mod position;
mod source_file;
mod span;

pub use line_index::LineIndex;
pub use position::Position;
pub use source_file::SourceFile;
pub use span::{Span, SpanError};
