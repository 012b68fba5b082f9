//! Verification engine for fixture-driven analyzer and code fix tests.
//!
//! A test author writes a fixture: source text annotated with `↓` markers in
//! front of the characters where diagnostics are expected. The engine strips
//! the markers, runs the analyzer through a [`Toolchain`](lintproof_diagnostic::Toolchain),
//! pairs what was produced against what was expected, and for code fixes
//! applies the offered edits and compares the result against the expected
//! fixed text.
//!
//! Every check returns `Result<(), Failure>`; nothing in the engine panics.
//! [`require`] is the one adapter that turns a failed check into a test
//! panic, so assertion style stays at the edge of the caller's test.
//!
//! ```no_run
//! use lintproof_assert::{require, Verifier};
//! use lintproof_assert::testing::{TestToolchain, UnderscoreField};
//!
//! let toolchain = TestToolchain::new();
//! let verifier = Verifier::new(&toolchain);
//! require(verifier.diagnostics(
//!     &UnderscoreField,
//!     &["class Foo\n{\n    private readonly int ↓_value;\n}"],
//! ));
//! ```

pub mod diff;
mod failure;
pub mod matching;
mod settings;
pub mod testing;
mod verifier;

pub use failure::Failure;
pub use settings::{AllowedDiagnostics, Settings, DEFAULT_FIX_ITERATIONS};
pub use verifier::Verifier;

/// Panic with the rendered report when a verification failed.
///
/// The single bridge between the engine's `Result` world and the panicking
/// test framework. Marked `#[track_caller]` so the panic points at the
/// calling test, not at this function.
#[track_caller]
pub fn require(outcome: Result<(), Failure>) {
    if let Err(failure) = outcome {
        panic!("{failure}");
    }
}
