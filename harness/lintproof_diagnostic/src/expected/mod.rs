//! Expected-diagnostic model.
//!
//! An [`ExpectedDiagnostic`] is what a test fixture claims an analyzer
//! should report. Requirements are opt-in: an expectation built from an id
//! alone accepts any message at any location, and each builder call narrows
//! it.

use lintproof_source::markup::{self, MarkupError};
use lintproof_source::Position;

use crate::Diagnostic;


/// Location requirement of an expected diagnostic.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ExpectedSpan {
    /// File the diagnostic must be reported in; `None` accepts any file.
    pub file: Option<String>,
    /// Required start position.
    pub start: Position,
    /// Required end position; equal to `start` when the end is unchecked.
    pub end: Position,
}

/// What a test fixture claims an analyzer should report.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ExpectedDiagnostic {
    /// Required diagnostic id.
    pub id: String,
    /// Required message; `None` accepts any message.
    pub message: Option<String>,
    /// Required location; `None` accepts any location.
    pub span: Option<ExpectedSpan>,
}

impl ExpectedDiagnostic {
    /// Expect a diagnostic with this id, anywhere, with any message.
    pub fn new(id: impl Into<String>) -> Self {
        ExpectedDiagnostic {
            id: id.into(),
            message: None,
            span: None,
        }
    }

    /// Require the produced message to equal `message` exactly.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Require the diagnostic to start at a zero-based line and character.
    ///
    /// Replaces any earlier position but keeps a file requirement.
    #[must_use]
    pub fn at(mut self, line: u32, character: u32) -> Self {
        let start = Position::new(line, character);
        self.span = Some(ExpectedSpan {
            file: self.span.and_then(|span| span.file),
            start,
            end: start,
        });
        self
    }

    /// Require the diagnostic to end at a zero-based line and character.
    ///
    /// Only meaningful after [`at`](Self::at); without a start position the
    /// end requirement is ignored.
    #[must_use]
    pub fn to(mut self, line: u32, character: u32) -> Self {
        if let Some(span) = &mut self.span {
            span.end = Position::new(line, character);
        }
        self
    }

    /// Require the diagnostic to be reported in a file with this name.
    ///
    /// Only meaningful after [`at`](Self::at); without a position the file
    /// is not checked.
    #[must_use]
    pub fn in_file(mut self, name: impl Into<String>) -> Self {
        if let Some(span) = &mut self.span {
            span.file = Some(name.into());
        }
        self
    }

    /// Build an expectation from marker-annotated text.
    ///
    /// Requires exactly one `↓` marker. Returns the expectation positioned
    /// at the marker and bound to the derived file name, plus the stripped
    /// text.
    pub fn from_markup(
        id: impl Into<String>,
        annotated: &str,
    ) -> Result<(Self, String), MarkupError> {
        let position = markup::one_position(annotated)?;
        let expectation = ExpectedDiagnostic {
            id: id.into(),
            message: None,
            span: Some(ExpectedSpan {
                file: Some(markup::file_name(annotated)),
                start: position,
                end: position,
            }),
        };
        Ok((expectation, markup::strip(annotated)))
    }

    /// Build one expectation per marker from annotated text.
    ///
    /// Requires at least one marker.
    pub fn many_from_markup(
        id: impl Into<String>,
        annotated: &str,
    ) -> Result<(Vec<Self>, String), MarkupError> {
        let positions = markup::find_positions(annotated);
        if positions.is_empty() {
            return Err(MarkupError::NoPosition);
        }
        let id = id.into();
        let file = markup::file_name(annotated);
        let expectations = positions
            .into_iter()
            .map(|position| ExpectedDiagnostic {
                id: id.clone(),
                message: None,
                span: Some(ExpectedSpan {
                    file: Some(file.clone()),
                    start: position,
                    end: position,
                }),
            })
            .collect();
        Ok((expectations, markup::strip(annotated)))
    }

    /// Re-position this expectation from a newly annotated text, keeping its
    /// id and message requirement.
    pub fn with_position_from_markup(
        &self,
        annotated: &str,
    ) -> Result<(Self, String), MarkupError> {
        let position = markup::one_position(annotated)?;
        let expectation = ExpectedDiagnostic {
            id: self.id.clone(),
            message: self.message.clone(),
            span: Some(ExpectedSpan {
                file: Some(markup::file_name(annotated)),
                start: position,
                end: position,
            }),
        };
        Ok((expectation, markup::strip(annotated)))
    }

    /// Whether a produced diagnostic satisfies this expectation.
    pub fn matches(&self, produced: &Diagnostic) -> bool {
        if self.id != produced.id {
            return false;
        }
        if let Some(message) = &self.message {
            if message != &produced.message {
                return false;
            }
        }
        let Some(span) = &self.span else {
            return true;
        };
        if span.start != produced.start {
            return false;
        }
        if let Some(file) = &span.file {
            if file != &produced.file {
                return false;
            }
        }
        if span.end != span.start && span.end != produced.end {
            return false;
        }
        true
    }
}
