//! Testing utilities for the harness itself.
//!
//! This module provides a small, self-contained analysis stack for
//! exercising verifications without a real compiler:
//!
//! - **toolchain**: [`TestToolchain`], a [`Toolchain`](lintproof_diagnostic::Toolchain)
//!   over the C-family fixture surface, and [`EventTypeCheck`], its
//!   stand-in for compiler errors
//! - **rules**: mock analyzers with deliberately shaped id declarations
//! - **fixes**: mock fix providers, from well-behaved to pathological
//!
//! # Usage
//!
//! ```ignore
//! use lintproof_assert::testing::{TestToolchain, UnderscoreField};
//! use lintproof_assert::{require, Verifier};
//!
//! let toolchain = TestToolchain::new();
//! let verifier = Verifier::new(&toolchain);
//! require(verifier.valid(&UnderscoreField, &["class Foo { }"]));
//! ```

pub mod fixes;
pub mod rules;
pub mod toolchain;

pub use fixes::{InsertEventFix, NoActionFix, NoChangeFix, RenameFix, TwoRenameFix};
pub use rules::{ClassMustHaveEvent, DuplicateIdRule, NoopRule, TwoIdRule, UnderscoreField};
pub use toolchain::{EventTypeCheck, TestToolchain};

use lintproof_source::Span;

/// Word tokens of a text with their byte spans. A word is a maximal run of
/// alphanumerics and underscores.
pub(crate) fn words(text: &str) -> Vec<(Span, &str)> {
    let mut words = Vec::new();
    let mut start = None;
    for (index, c) in text.char_indices() {
        if c.is_alphanumeric() || c == '_' {
            if start.is_none() {
                start = Some(index);
            }
        } else if let Some(word_start) = start.take() {
            words.push((Span::from_range(word_start..index), &text[word_start..index]));
        }
    }
    if let Some(word_start) = start {
        words.push((Span::from_range(word_start..text.len()), &text[word_start..]));
    }
    words
}
