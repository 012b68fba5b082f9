//! The batch fix loop and its iteration bound.

use lintproof_assert::testing::{
    NoChangeFix, RenameFix, TestToolchain, TwoRenameFix, UnderscoreField,
};
use lintproof_assert::{require, Settings, Verifier};
use pretty_assertions::assert_eq;

use crate::common::failure;

#[test]
fn every_fixable_diagnostic_is_fixed_in_turn() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    require(verifier.fix_all(
        &UnderscoreField,
        &RenameFix,
        &["class Foo\n{\n    private int ↓_a;\n    private int ↓_b;\n}"],
        &["class Foo\n{\n    private int a;\n    private int b;\n}"],
    ));
}

#[test]
fn fixes_apply_across_files() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    require(verifier.fix_all(
        &UnderscoreField,
        &RenameFix,
        &[
            "class Foo\n{\n    private int ↓_a;\n}",
            "class Bar\n{\n    private int ↓_b;\n}",
        ],
        &[
            "class Foo\n{\n    private int a;\n}",
            "class Bar\n{\n    private int b;\n}",
        ],
    ));
}

#[test]
fn the_fixed_source_count_must_match() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let failed = failure(verifier.fix_all(
        &UnderscoreField,
        &RenameFix,
        &[
            "class Foo\n{\n    private int ↓_a;\n}",
            "class Bar\n{\n    private int ↓_b;\n}",
        ],
        &["class Foo\n{\n    private int a;\n}"],
    ));
    assert!(failed.is_configuration());
    assert_eq!(failed.message(), "Expected 2 fixed sources, was 1.");
}

#[test]
fn the_iteration_bound_stops_a_slow_fix() {
    let toolchain = TestToolchain::new();
    let settings = Settings::default().with_fix_iterations(1);
    let verifier = Verifier::with_settings(&toolchain, settings);
    let failed = failure(verifier.fix_all(
        &UnderscoreField,
        &RenameFix,
        &["class Foo\n{\n    private int ↓_a;\n    private int ↓_b;\n}"],
        &["class Foo\n{\n    private int a;\n    private int b;\n}"],
    ));
    assert!(failed.is_convergence());
    assert_eq!(
        failed.message(),
        "RenameFix did not converge after 1 iterations.",
    );
}

#[test]
fn titles_select_the_action_every_round() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    require(verifier.fix_all_with_title(
        &UnderscoreField,
        &TwoRenameFix,
        &[
            "class Foo\n{\n    private int ↓_a;\n}",
            "class Bar\n{\n    private int ↓_a;\n}",
        ],
        &[
            "class Foo\n{\n    private int a1;\n}",
            "class Bar\n{\n    private int a1;\n}",
        ],
        "Rename to: a1",
    ));
}

#[test]
fn a_fix_that_changes_nothing_cannot_converge() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let failed = failure(verifier.fix_all(
        &UnderscoreField,
        &NoChangeFix,
        &["class Foo\n{\n    private int ↓_a;\n}"],
        &["class Foo\n{\n    private int a;\n}"],
    ));
    assert!(failed.is_convergence());
    assert_eq!(failed.message(), "NoChangeFix did not change any document.");
}

#[test]
fn the_settled_sources_must_match_expectations() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let failed = failure(verifier.fix_all(
        &UnderscoreField,
        &RenameFix,
        &[
            "class Foo\n{\n    private int ↓_a;\n}",
            "class Bar\n{\n    private int ↓_b;\n}",
        ],
        &[
            "class Foo\n{\n    private int a;\n}",
            "class Bar\n{\n    private int c;\n}",
        ],
    ));
    assert!(failed.is_mismatch());
    assert!(failed.message().starts_with("Mismatch on line 3 of file Bar.cs\n"));
}
