//! Produced diagnostics and their severity.

use std::fmt;

use lintproof_source::{Position, SourceFile, Span};


/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
            Severity::Help => write!(f, "help"),
        }
    }
}

/// One diagnostic reported against one source file.
///
/// Positions are precomputed from the file's text at construction so that
/// matching and rendering never re-consult the text.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
    /// Stable identifier, e.g. `LP0001`.
    pub id: String,
    /// How serious the finding is.
    pub severity: Severity,
    /// Message without location information.
    pub message: String,
    /// Name of the file the diagnostic was reported in.
    pub file: String,
    /// Byte range in that file's text.
    pub span: Span,
    /// Zero-based position of the span start.
    pub start: Position,
    /// Zero-based position of the span end.
    pub end: Position,
}

impl Diagnostic {
    /// Create a diagnostic, computing line and character positions from the
    /// file's text.
    pub fn new(
        id: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        file: &SourceFile,
        span: Span,
    ) -> Self {
        Diagnostic {
            id: id.into(),
            severity,
            message: message.into(),
            file: file.name.clone(),
            span,
            start: file.position_of(span.start),
            end: file.position_of(span.end),
        }
    }

    /// Whether this diagnostic is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Whether this diagnostic is a warning.
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.message)
    }
}
