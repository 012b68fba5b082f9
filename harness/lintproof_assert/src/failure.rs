//! Failure taxonomy for verification outcomes.

use lintproof_source::markup::MarkupError;
use thiserror::Error;

/// Why a verification did not pass.
///
/// Each variant carries the fully rendered report, which is also the
/// `Display` output. The variant tells a caller what went wrong without
/// parsing the text: a fixture problem, a harness misuse, or a genuine
/// behavioral mismatch.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum Failure {
    /// Marker annotations in the fixture are missing or malformed.
    #[error("{0}")]
    Annotation(String),
    /// The analyzer or fix cannot serve the requested verification.
    #[error("{0}")]
    Configuration(String),
    /// The wrong number of fixable diagnostics or candidate actions.
    #[error("{0}")]
    Cardinality(String),
    /// A fix changed nothing, or batch fixing exceeded its iteration bound.
    #[error("{0}")]
    Convergence(String),
    /// Applying a fix introduced compiler errors.
    #[error("{0}")]
    Regression(String),
    /// Diagnostics or fixed text did not match the expectation.
    #[error("{0}")]
    Mismatch(String),
}

impl Failure {
    #[cold]
    pub(crate) fn annotation(message: impl Into<String>) -> Self {
        Failure::Annotation(message.into())
    }

    #[cold]
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Failure::Configuration(message.into())
    }

    #[cold]
    pub(crate) fn cardinality(message: impl Into<String>) -> Self {
        Failure::Cardinality(message.into())
    }

    #[cold]
    pub(crate) fn convergence(message: impl Into<String>) -> Self {
        Failure::Convergence(message.into())
    }

    #[cold]
    pub(crate) fn regression(message: impl Into<String>) -> Self {
        Failure::Regression(message.into())
    }

    #[cold]
    pub(crate) fn mismatch(message: impl Into<String>) -> Self {
        Failure::Mismatch(message.into())
    }

    /// The rendered report.
    pub fn message(&self) -> &str {
        match self {
            Failure::Annotation(message)
            | Failure::Configuration(message)
            | Failure::Cardinality(message)
            | Failure::Convergence(message)
            | Failure::Regression(message)
            | Failure::Mismatch(message) => message,
        }
    }

    /// True when the fixture's marker annotations were the problem.
    pub fn is_annotation(&self) -> bool {
        matches!(self, Failure::Annotation(_))
    }

    /// True when the analyzer or fix could not serve the verification.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Failure::Configuration(_))
    }

    /// True when the count of fixables or actions was wrong.
    pub fn is_cardinality(&self) -> bool {
        matches!(self, Failure::Cardinality(_))
    }

    /// True when fixing stalled or ran past its iteration bound.
    pub fn is_convergence(&self) -> bool {
        matches!(self, Failure::Convergence(_))
    }

    /// True when a fix introduced compiler errors.
    pub fn is_regression(&self) -> bool {
        matches!(self, Failure::Regression(_))
    }

    /// True when diagnostics or fixed text did not match.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Failure::Mismatch(_))
    }
}

impl From<MarkupError> for Failure {
    fn from(error: MarkupError) -> Self {
        Failure::annotation(error.to_string())
    }
}
