//! A named source document.

use crate::line_index::LineIndex;
use crate::markup;
use crate::position::Position;

/// One document in a fixture, by name and full text.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SourceFile {
    /// File name, e.g. `Foo.cs`.
    pub name: String,
    /// Full text of the document.
    pub text: String,
}

impl SourceFile {
    /// Create a file with an explicit name.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        SourceFile {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Create a file whose name is derived from the first type declaration
    /// in the text, falling back to `AssemblyInfo.cs`.
    pub fn from_source(text: impl Into<String>) -> Self {
        let text = text.into();
        let name = markup::file_name(&text);
        SourceFile { name, text }
    }

    /// Content of a zero-based line, without its terminator.
    pub fn line(&self, line: usize) -> Option<&str> {
        self.text
            .split('\n')
            .nth(line)
            .map(|text| text.strip_suffix('\r').unwrap_or(text))
    }

    /// Position of a byte offset in this file's text.
    pub fn position_of(&self, offset: u32) -> Position {
        LineIndex::new(&self.text).position_of(&self.text, offset)
    }

    /// Byte offset of a position in this file's text.
    pub fn offset_of(&self, position: Position) -> Option<u32> {
        LineIndex::new(&self.text).offset_of(&self.text, position)
    }
}
