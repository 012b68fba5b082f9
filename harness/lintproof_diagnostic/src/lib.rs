//! Diagnostics, expectations and code fix surfaces.
//!
//! This crate defines the data that flows between an analysis toolchain and
//! the assertion layer:
//!
//! - [`Diagnostic`]: a finding reported by an analyzer or compiler, with its
//!   position in a [`SourceFile`](lintproof_source::SourceFile)
//! - [`ExpectedDiagnostic`]: what a test fixture claims should be reported
//! - [`fixes`]: text edits, code actions and the [`FixProvider`] trait
//! - [`Analyzer`] and [`Toolchain`]: the capability traits a test harness
//!   drives

mod diagnostic;
mod expected;
pub mod fixes;
mod toolchain;

pub use diagnostic::{Diagnostic, Severity};
pub use expected::{ExpectedDiagnostic, ExpectedSpan};
pub use fixes::{apply_edits, CodeAction, FixContext, FixProvider, TextEdit};
pub use toolchain::{Analyzer, LibraryRef, Toolchain};
