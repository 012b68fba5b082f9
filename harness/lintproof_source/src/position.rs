//! Line and character positions.

use std::fmt;

/// Zero-based line and character position in a source text.
///
/// Both components count from zero, and `character` counts Unicode scalar
/// values rather than bytes, so a multi-byte character occupies one column.
/// This is the coordinate system of every rendered report: the first
/// character of a text is at line 0, character 0.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}
