//! Fixes that must leave the sources alone.

use lintproof_assert::testing::{
    NoActionFix, NoChangeFix, RenameFix, TestToolchain, TwoRenameFix, UnderscoreField,
};
use lintproof_assert::{require, Verifier};
use pretty_assertions::assert_eq;

use crate::common::failure;

const MARKED: &str = "class Foo\n{\n    private int ↓_value;\n}";

#[test]
fn a_fix_offering_no_action_passes() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    require(verifier.no_fix(&UnderscoreField, &NoActionFix, &[MARKED]));
}

#[test]
fn an_action_without_edits_passes() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    require(verifier.no_fix(&UnderscoreField, &NoChangeFix, &[MARKED]));
}

#[test]
fn a_changing_fix_fails_with_a_diff() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let failed = failure(verifier.no_fix(&UnderscoreField, &RenameFix, &[MARKED]));
    assert!(failed.is_mismatch());
    assert!(failed.message().starts_with(
        "Expected the code fix to not change any document.\n\
         Mismatch on line 3 of file Foo.cs\n\
         Expected:      private int _value;\n\
         Actual:        private int value;\n",
    ));
}

#[test]
fn the_markers_still_have_to_match() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let failed = failure(verifier.no_fix(
        &UnderscoreField,
        &NoActionFix,
        &["class Foo\n{\n    ↓private int _value;\n}"],
    ));
    assert!(failed.is_mismatch());
    assert!(
        failed
            .message()
            .starts_with("Expected and actual diagnostics do not match.\n")
    );
}

#[test]
fn ambiguous_candidates_still_require_a_title() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let failed = failure(verifier.no_fix(&UnderscoreField, &TwoRenameFix, &[MARKED]));
    assert!(failed.is_cardinality());
    assert_eq!(
        failed.message(),
        "Expected only one code fix, found 2:\nRename to: value1\nRename to: value2\nUse the overload that specifies title.",
    );
}
