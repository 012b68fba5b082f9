//! The `valid` flow: analyzers must stay silent on clean code.

use lintproof_assert::testing::{TestToolchain, UnderscoreField};
use lintproof_assert::{require, Verifier};
use pretty_assertions::assert_eq;

use crate::common::failure;

#[test]
fn clean_code_passes() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    require(verifier.valid(&UnderscoreField, &["class Foo\n{\n    private int value;\n}"]));
}

#[test]
fn clean_code_passes_across_files() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    require(verifier.valid(
        &UnderscoreField,
        &["class Foo { }", "struct Bar { }", "enum Color { Red }"],
    ));
}

#[test]
fn produced_diagnostics_are_reported() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let outcome = verifier.valid(&UnderscoreField, &["class Foo\n{\n    private int _value;\n}"]);
    let failed = failure(outcome);
    assert!(failed.is_mismatch());
    assert_eq!(
        failed.message(),
        "Expected no diagnostics, found:\n\
         LP0001 Field '_value' must not begin with an underscore\n\
         \x20 at line 2 and character 16 in file Foo.cs | private int ↓_value;\n",
    );
}

#[test]
fn every_produced_diagnostic_is_listed() {
    let toolchain = TestToolchain::new();
    let verifier = Verifier::new(&toolchain);
    let failed = failure(verifier.valid(
        &UnderscoreField,
        &["class Foo\n{\n    private int _a;\n    private int _b;\n}"],
    ));
    assert!(failed.message().contains("Field '_a'"));
    assert!(failed.message().contains("Field '_b'"));
}
