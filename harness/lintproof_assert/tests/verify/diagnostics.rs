//! Marker-driven and explicit expectation matching.

use lintproof_assert::testing::{
    DuplicateIdRule, NoopRule, TestToolchain, TwoIdRule, UnderscoreField,
};
use lintproof_assert::{require, Verifier};
use lintproof_diagnostic::ExpectedDiagnostic;
use pretty_assertions::assert_eq;

use crate::common::failure;

#[test]
fn marker_at_the_reported_position_passes() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    require(verifier.diagnostics(
        &UnderscoreField,
        &["class Foo\n{\n    private readonly int ↓_value;\n}"],
    ));
}

#[test]
fn one_marker_per_field_passes_across_files() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    require(verifier.diagnostics(
        &UnderscoreField,
        &[
            "class Foo\n{\n    private int ↓_a;\n}",
            "class Bar\n{\n    private int ↓_b;\n}",
        ],
    ));
}

#[test]
fn a_misplaced_marker_reports_both_positions() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let failed = failure(verifier.diagnostics(
        &UnderscoreField,
        &["class Foo\n{\n    ↓private readonly int _value;\n}"],
    ));
    assert!(failed.is_mismatch());
    assert_eq!(
        failed.message(),
        "Expected and actual diagnostics do not match.\n\
         Expected:\n\
         LP0001 \n\
         \x20 at line 2 and character 4 in file Foo.cs | ↓private readonly int _value;\n\
         Actual:\n\
         LP0001 Field '_value' must not begin with an underscore\n\
         \x20 at line 2 and character 25 in file Foo.cs | private readonly int ↓_value;\n",
    );
}

#[test]
fn nothing_produced_collapses_the_actual_section() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let failed = failure(verifier.diagnostics(
        &UnderscoreField,
        &["class Foo\n{\n    private int ↓value;\n}"],
    ));
    assert_eq!(
        failed.message(),
        "Expected and actual diagnostics do not match.\n\
         Expected:\n\
         LP0001 \n\
         \x20 at line 2 and character 16 in file Foo.cs | private int ↓value;\n\
         Actual: <no errors>\n",
    );
}

#[test]
fn sources_without_markers_are_rejected() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let failed = failure(verifier.diagnostics(&UnderscoreField, &["class Foo { }"]));
    assert!(failed.is_annotation());
    assert_eq!(
        failed.message(),
        "Expected code to have at least one error position indicated with '↓'",
    );
}

#[test]
fn analyzers_with_two_distinct_ids_are_rejected() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let failed = failure(verifier.diagnostics(&TwoIdRule, &["class Foo\n{\n    int ↓_a;\n}"]));
    assert!(failed.is_configuration());
    assert_eq!(
        failed.message(),
        "Analyzer TwoIdRule supports multiple diagnostics: {LP0001, LP0004}.\nSpecify the expected diagnostic explicitly.",
    );
}

#[test]
fn analyzers_without_declared_ids_are_rejected() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let failed = failure(verifier.diagnostics(&NoopRule, &["class Foo\n{\n    int ↓_a;\n}"]));
    assert_eq!(
        failed.message(),
        "Analyzer NoopRule does not declare any diagnostics.",
    );
}

#[test]
fn explicit_expectations_match_message_and_position() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let expected = [ExpectedDiagnostic::new("LP0001")
        .with_message("Field '_value' must not begin with an underscore")
        .at(2, 16)
        .in_file("Foo.cs")];
    require(verifier.diagnostics_with(
        &UnderscoreField,
        &expected,
        &["class Foo\n{\n    private int _value;\n}"],
    ));
}

#[test]
fn explicit_expectations_may_leave_the_file_open() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let expected = [ExpectedDiagnostic::new("LP0001").at(2, 16)];
    require(verifier.diagnostics_with(
        &UnderscoreField,
        &expected,
        &["class Foo\n{\n    private int _value;\n}"],
    ));
}

#[test]
fn a_wrong_message_fails_the_match() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let expected = [ExpectedDiagnostic::new("LP0001")
        .with_message("Completely different text")
        .at(2, 16)
        .in_file("Foo.cs")];
    let failed = failure(verifier.diagnostics_with(
        &UnderscoreField,
        &expected,
        &["class Foo\n{\n    private int _value;\n}"],
    ));
    assert!(failed.is_mismatch());
    assert!(failed.message().contains("LP0001 Completely different text\n"));
    assert!(
        failed
            .message()
            .contains("LP0001 Field '_value' must not begin with an underscore\n")
    );
}

#[test]
fn expected_ids_must_be_declared() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let expected = [ExpectedDiagnostic::new("LP0002").at(0, 0)];
    let failed = failure(verifier.diagnostics_with(
        &UnderscoreField,
        &expected,
        &["class Foo\n{\n    private int _value;\n}"],
    ));
    assert!(failed.is_configuration());
    assert_eq!(
        failed.message(),
        "Analyzer UnderscoreField does not produce a diagnostic with ID LP0002.\nThe analyzer produces the following diagnostics: {LP0001}\nThe expected diagnostic is: LP0002",
    );
}

#[test]
fn doubly_declared_ids_are_rejected() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let expected = [ExpectedDiagnostic::new("LP0001").at(2, 16)];
    let failed = failure(verifier.diagnostics_with(
        &DuplicateIdRule,
        &expected,
        &["class Foo\n{\n    private int _value;\n}"],
    ));
    assert_eq!(
        failed.message(),
        "Analyzer DuplicateIdRule supports multiple diagnostics with ID LP0001.\nThe analyzer produces the following diagnostics: {LP0001, LP0001}\nThe expected diagnostic is: LP0001",
    );
}

#[test]
fn a_two_id_analyzer_works_with_explicit_expectations() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let expected = [ExpectedDiagnostic::new("LP0001").at(2, 16).in_file("Foo.cs")];
    require(verifier.diagnostics_with(
        &TwoIdRule,
        &expected,
        &["class Foo\n{\n    private int _value;\n}"],
    ));
}

#[test]
fn an_expected_end_position_is_checked_when_given() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let wrong_end = [ExpectedDiagnostic::new("LP0001")
        .at(2, 16)
        .to(2, 18)
        .in_file("Foo.cs")];
    let failed = failure(verifier.diagnostics_with(
        &UnderscoreField,
        &wrong_end,
        &["class Foo\n{\n    private int _value;\n}"],
    ));
    assert!(failed.is_mismatch());

    let right_end = [ExpectedDiagnostic::new("LP0001")
        .at(2, 16)
        .to(2, 22)
        .in_file("Foo.cs")];
    require(verifier.diagnostics_with(
        &UnderscoreField,
        &right_end,
        &["class Foo\n{\n    private int _value;\n}"],
    ));
}
