//! Pairing produced diagnostics with expectations, and the reports that
//! describe the leftovers.

use lintproof_diagnostic::{Diagnostic, ExpectedDiagnostic};
use lintproof_source::{markup, Position, SourceFile};


/// Outcome of pairing expectations with produced diagnostics.
#[derive(Clone, Debug)]
pub struct MatchResult {
    /// Paired `(expected index, produced index)`.
    pub matched: Vec<(usize, usize)>,
    /// Indices of expectations no produced diagnostic satisfied.
    pub unmatched_expected: Vec<usize>,
    /// Indices of produced diagnostics no expectation claimed.
    pub unmatched_produced: Vec<usize>,
}

impl MatchResult {
    /// True when every expectation and every produced diagnostic paired up.
    pub fn is_match(&self) -> bool {
        self.unmatched_expected.is_empty() && self.unmatched_produced.is_empty()
    }
}

/// Pair expectations with produced diagnostics.
///
/// Expectations are visited in caller order and each claims the first
/// not-yet-claimed produced diagnostic it matches. Greedy, no backtracking:
/// with duplicate ids the pairing is first come, first served.
pub fn match_diagnostics(
    expected: &[ExpectedDiagnostic],
    produced: &[Diagnostic],
) -> MatchResult {
    let mut claimed = vec![false; produced.len()];
    let mut matched = Vec::new();
    let mut unmatched_expected = Vec::new();

    for (expected_index, expectation) in expected.iter().enumerate() {
        let found = produced
            .iter()
            .enumerate()
            .find(|(produced_index, diagnostic)| {
                !claimed[*produced_index] && expectation.matches(diagnostic)
            })
            .map(|(produced_index, _)| produced_index);
        match found {
            Some(produced_index) => {
                claimed[produced_index] = true;
                matched.push((expected_index, produced_index));
            }
            None => unmatched_expected.push(expected_index),
        }
    }

    let unmatched_produced = claimed
        .iter()
        .enumerate()
        .filter(|(_, claimed)| !**claimed)
        .map(|(produced_index, _)| produced_index)
        .collect();

    MatchResult {
        matched,
        unmatched_expected,
        unmatched_produced,
    }
}

/// Render one expectation as a report block.
///
/// The first line is `{id} {message}`; an expectation without a message
/// keeps the trailing space. A positioned expectation adds a location line
/// quoting the source with the marker re-inserted.
pub fn format_expected(expectation: &ExpectedDiagnostic, sources: &[SourceFile]) -> String {
    let mut out = String::new();
    out.push_str(&expectation.id);
    out.push(' ');
    if let Some(message) = &expectation.message {
        out.push_str(message);
    }
    out.push('\n');
    if let Some(span) = &expectation.span {
        let file = span.file.as_deref().unwrap_or_default();
        out.push_str(&location_line(file, span.start, sources));
    }
    out
}

/// Render one produced diagnostic as a report block, same shape as
/// [`format_expected`].
pub fn format_produced(diagnostic: &Diagnostic, sources: &[SourceFile]) -> String {
    let mut out = String::new();
    out.push_str(&diagnostic.id);
    out.push(' ');
    out.push_str(&diagnostic.message);
    out.push('\n');
    out.push_str(&location_line(&diagnostic.file, diagnostic.start, sources));
    out
}

/// Render the report for expectations and produced diagnostics that did not
/// pair up. Sections with nothing to show are omitted.
pub fn mismatch_report(
    result: &MatchResult,
    expected: &[ExpectedDiagnostic],
    produced: &[Diagnostic],
    sources: &[SourceFile],
) -> String {
    let mut out = String::from("Expected and actual diagnostics do not match.\n");
    if !result.unmatched_expected.is_empty() {
        out.push_str("Expected:\n");
        for &index in &result.unmatched_expected {
            out.push_str(&format_expected(&expected[index], sources));
        }
    }
    if produced.is_empty() {
        if !expected.is_empty() {
            out.push_str("Actual: <no errors>\n");
        }
    } else if !result.unmatched_produced.is_empty() {
        out.push_str("Actual:\n");
        for &index in &result.unmatched_produced {
            out.push_str(&format_produced(&produced[index], sources));
        }
    }
    out
}

/// Render the report for diagnostics produced where none were expected.
pub fn no_diagnostics_report(produced: &[Diagnostic], sources: &[SourceFile]) -> String {
    let mut out = String::from("Expected no diagnostics, found:\n");
    for diagnostic in produced {
        out.push_str(&format_produced(diagnostic, sources));
    }
    out
}

/// The `  at line .. | ..` location line of a report block.
///
/// The quoted line comes from the named source with the marker re-inserted
/// at the position's column. A file name not present in `sources` quotes
/// nothing.
fn location_line(file: &str, position: Position, sources: &[SourceFile]) -> String {
    let line = sources
        .iter()
        .find(|source| source.name == file)
        .and_then(|source| source.line(position.line as usize))
        .map(|text| markup::line_with_marker(text, position.character))
        .unwrap_or_default();
    format!(
        "  at line {} and character {} in file {file} | {line}\n",
        position.line, position.character,
    )
}
