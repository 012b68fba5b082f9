//! Bidirectional mapping between byte offsets and positions.

use crate::position::Position;
use crate::span::Span;

/// Pre-computed line offset table for one source text.
///
/// Scans the text once at construction so repeated lookups cost a binary
/// search instead of a full scan. Lines are zero-based; a trailing newline
/// opens a final empty line.
#[derive(Clone, Debug, Default)]
pub struct LineIndex {
    /// Byte offset of each line start. `offsets[0]` is always 0.
    offsets: Vec<u32>,
}

impl LineIndex {
    /// Build a line index from source text.
    pub fn new(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineIndex { offsets }
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }

    /// Byte offset where a zero-based line starts, `None` past the end.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        self.offsets.get(line as usize).copied()
    }

    /// Zero-based line containing a byte offset.
    #[inline]
    pub fn line_of(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX)
    }

    /// Position of a byte offset, counting characters from the line start.
    ///
    /// Offsets beyond the end of the text clamp to the last position. The
    /// offset must fall on a character boundary of `source`.
    pub fn position_of(&self, source: &str, offset: u32) -> Position {
        let line = self.line_of(offset);
        let line_start = self.line_start(line).unwrap_or(0) as usize;
        let upto = &source[line_start..(offset as usize).min(source.len())];
        let character = u32::try_from(upto.chars().count()).unwrap_or(u32::MAX);
        Position::new(line, character)
    }

    /// Byte span of a line's content, excluding its terminator.
    ///
    /// A `\r` preceding the `\n` is excluded as well, so the span covers the
    /// same content for LF and CRLF texts.
    pub fn line_span(&self, source: &str, line: u32) -> Option<Span> {
        let start = self.line_start(line)? as usize;
        let end = match line.checked_add(1).and_then(|next| self.line_start(next)) {
            Some(next) => {
                let mut end = next as usize - 1;
                if end > start && source.as_bytes()[end - 1] == b'\r' {
                    end -= 1;
                }
                end
            }
            None => source.len(),
        };
        Span::try_from_range(start..end).ok()
    }

    /// Byte offset of a position.
    ///
    /// Returns `None` when the line does not exist or the character column
    /// lies beyond the end of that line. A column equal to the line's length
    /// maps to the offset just past its content.
    pub fn offset_of(&self, source: &str, position: Position) -> Option<u32> {
        let span = self.line_span(source, position.line)?;
        let line_text = &source[span.to_range()];
        let mut count = 0u32;
        for (byte_index, _) in line_text.char_indices() {
            if count == position.character {
                return Some(span.start + u32::try_from(byte_index).ok()?);
            }
            count += 1;
        }
        (count == position.character).then_some(span.end)
    }
}
