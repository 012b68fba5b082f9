//! Position markers in fixture text.
//!
//! Fixture code indicates where a diagnostic is expected by placing a `↓`
//! immediately before the character it points at. The marker occupies no
//! column of its own, so positions are reported in the coordinates of the
//! stripped text.

use thiserror::Error;

use crate::position::Position;

/// The character that marks an expected diagnostic position.
pub const MARKER: char = '↓';

/// Errors from reading marked-up fixture text.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum MarkupError {
    /// No `↓` marker was present where exactly one was required.
    #[error("Expected one error position indicated, was zero.")]
    NoPosition,
    /// More than one `↓` marker was present where exactly one was required.
    #[error("Expected one error position indicated, was {0}.")]
    ManyPositions(usize),
}

/// Positions of all `↓` markers, in the coordinates of the stripped text.
pub fn find_positions(text: &str) -> Vec<Position> {
    let mut positions = Vec::new();
    let mut line = 0u32;
    let mut character = 0u32;
    for c in text.chars() {
        match c {
            MARKER => positions.push(Position::new(line, character)),
            '\n' => {
                line += 1;
                character = 0;
            }
            _ => character += 1,
        }
    }
    positions
}

/// The text with every `↓` marker removed.
pub fn strip(text: &str) -> String {
    text.chars().filter(|&c| c != MARKER).collect()
}

/// The single marked position of a text.
///
/// Fails when the marker count is anything other than one.
pub fn one_position(text: &str) -> Result<Position, MarkupError> {
    let positions = find_positions(text);
    match positions[..] {
        [] => Err(MarkupError::NoPosition),
        [position] => Ok(position),
        _ => Err(MarkupError::ManyPositions(positions.len())),
    }
}

const TYPE_KEYWORDS: [&str; 4] = ["class", "struct", "interface", "enum"];
const FALLBACK_NAME: &str = "AssemblyInfo.cs";

/// Derive a file name from the first type declaration in the text.
///
/// Looks for the first `class`, `struct`, `interface` or `enum` keyword and
/// names the file after the identifier that follows it. Text without a type
/// declaration becomes `AssemblyInfo.cs`.
pub fn file_name(text: &str) -> String {
    let stripped = strip(text);
    let tokens: Vec<&str> = tokens(&stripped).collect();
    tokens
        .windows(2)
        .find(|pair| TYPE_KEYWORDS.contains(&pair[0]))
        .map_or_else(|| FALLBACK_NAME.to_string(), |pair| format!("{}.cs", pair[1]))
}

/// Insert a `↓` marker at a character column of one line and trim the
/// indentation, for quoting the line in a report.
///
/// A column at or past the end of the line appends the marker.
pub fn line_with_marker(line: &str, character: u32) -> String {
    let mut out = String::with_capacity(line.len() + MARKER.len_utf8());
    let mut inserted = false;
    for (column, c) in line.chars().enumerate() {
        if column == character as usize {
            out.push(MARKER);
            inserted = true;
        }
        out.push(c);
    }
    if !inserted {
        out.push(MARKER);
    }
    out.trim_start_matches(' ').to_string()
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| !token.is_empty())
}
