//! Mock analyzers with deliberately shaped id declarations.

use lintproof_diagnostic::{Analyzer, Diagnostic, Severity};
use lintproof_source::SourceFile;

use super::words;

/// Warns on every identifier that begins with an underscore.
#[derive(Copy, Clone, Default, Debug)]
pub struct UnderscoreField;

impl Analyzer for UnderscoreField {
    fn name(&self) -> &str {
        "UnderscoreField"
    }

    fn supported_ids(&self) -> &'static [&'static str] {
        &["LP0001"]
    }

    fn check(&self, file: &SourceFile) -> Vec<Diagnostic> {
        words(&file.text)
            .into_iter()
            .filter(|(_, word)| word.starts_with('_'))
            .map(|(span, word)| {
                Diagnostic::new(
                    "LP0001",
                    Severity::Warning,
                    format!("Field '{word}' must not begin with an underscore"),
                    file,
                    span,
                )
            })
            .collect()
    }
}

/// Warns on the `class` keyword of a class without an `event` member.
#[derive(Copy, Clone, Default, Debug)]
pub struct ClassMustHaveEvent;

impl Analyzer for ClassMustHaveEvent {
    fn name(&self) -> &str {
        "ClassMustHaveEvent"
    }

    fn supported_ids(&self) -> &'static [&'static str] {
        &["LP0002"]
    }

    fn check(&self, file: &SourceFile) -> Vec<Diagnostic> {
        let words = words(&file.text);
        if words.iter().any(|(_, word)| *word == "event") {
            return Vec::new();
        }
        let mut diagnostics = Vec::new();
        for window in words.windows(2) {
            let [(span, keyword), (_, name)] = window else {
                continue;
            };
            if *keyword == "class" {
                diagnostics.push(Diagnostic::new(
                    "LP0002",
                    Severity::Warning,
                    format!("Class '{name}' must declare an event"),
                    file,
                    *span,
                ));
            }
        }
        diagnostics
    }
}

/// Declares no diagnostics at all.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoopRule;

impl Analyzer for NoopRule {
    fn name(&self) -> &str {
        "NoopRule"
    }

    fn supported_ids(&self) -> &'static [&'static str] {
        &[]
    }

    fn check(&self, _file: &SourceFile) -> Vec<Diagnostic> {
        Vec::new()
    }
}

/// Declares `LP0001` twice over.
#[derive(Copy, Clone, Default, Debug)]
pub struct DuplicateIdRule;

impl Analyzer for DuplicateIdRule {
    fn name(&self) -> &str {
        "DuplicateIdRule"
    }

    fn supported_ids(&self) -> &'static [&'static str] {
        &["LP0001", "LP0001"]
    }

    fn check(&self, file: &SourceFile) -> Vec<Diagnostic> {
        UnderscoreField.check(file)
    }
}

/// Declares two distinct ids, reporting only the first.
#[derive(Copy, Clone, Default, Debug)]
pub struct TwoIdRule;

impl Analyzer for TwoIdRule {
    fn name(&self) -> &str {
        "TwoIdRule"
    }

    fn supported_ids(&self) -> &'static [&'static str] {
        &["LP0001", "LP0004"]
    }

    fn check(&self, file: &SourceFile) -> Vec<Diagnostic> {
        UnderscoreField.check(file)
    }
}
