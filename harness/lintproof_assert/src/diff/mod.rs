//! Plain text comparison for fixed code, with a caret pointing at the first
//! difference.

use lintproof_source::markup;


/// Normalize `\r\n` and bare `\r` line endings to `\n`.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Compare expected and actual text, rendering a report on difference.
///
/// Line endings are normalized first, so texts differing only in `\r` never
/// fail. The file name quoted in the report is derived from the expected
/// text.
pub fn compare(expected: &str, actual: &str) -> Result<(), String> {
    let expected = normalize(expected);
    let actual = normalize(actual);
    if expected == actual {
        return Ok(());
    }
    let name = markup::file_name(&expected);
    let mismatch = expected
        .split('\n')
        .zip(actual.split('\n'))
        .enumerate()
        .find(|(_, (expected_line, actual_line))| expected_line != actual_line);
    Err(match mismatch {
        Some((index, (expected_line, actual_line))) => {
            line_report(&name, index, expected_line, actual_line, &expected, &actual)
        }
        // Every shared line agrees, so one text is a prefix of the other.
        None => format!(
            "Mismatch at end of file {name}\n{}",
            full_texts(&expected, &actual)
        ),
    })
}

/// Report for a difference inside a shared line. The quoted line number is
/// one-based; the caret column is counted in characters.
fn line_report(
    name: &str,
    index: usize,
    expected_line: &str,
    actual_line: &str,
    expected: &str,
    actual: &str,
) -> String {
    let column = expected_line
        .chars()
        .zip(actual_line.chars())
        .take_while(|(expected_char, actual_char)| expected_char == actual_char)
        .count();
    let mut out = format!("Mismatch on line {} of file {name}\n", index + 1);
    out.push_str(&format!("Expected:  {expected_line}\n"));
    out.push_str(&format!("Actual:    {actual_line}\n"));
    out.push_str(&" ".repeat(10 + column));
    out.push_str("^\n");
    out.push_str(&full_texts(expected, actual));
    out
}

fn full_texts(expected: &str, actual: &str) -> String {
    format!("Expected:\n\n{expected}\nActual:\n\n{actual}\n")
}
