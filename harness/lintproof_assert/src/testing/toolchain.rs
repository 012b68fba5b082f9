//! A reference toolchain over the C-family fixture surface.

use lintproof_diagnostic::{Analyzer, Diagnostic, LibraryRef, Severity, Toolchain};
use lintproof_source::SourceFile;
use rustc_hash::{FxHashMap, FxHashSet};

use super::words;

/// Toolchain whose analysis step runs the analyzer file by file and whose
/// compile step runs the configured [`EventTypeCheck`], when present.
///
/// Without an event check, compilation reports nothing, so every fixed
/// source passes the regression check.
#[derive(Default)]
pub struct TestToolchain {
    event_check: Option<EventTypeCheck>,
}

impl TestToolchain {
    pub fn new() -> Self {
        TestToolchain::default()
    }

    /// Use the event type check as the compiler's own diagnostics.
    #[must_use]
    pub fn with_event_check(mut self, check: EventTypeCheck) -> Self {
        self.event_check = Some(check);
        self
    }
}

impl Toolchain for TestToolchain {
    fn analyze(
        &self,
        sources: &[SourceFile],
        analyzer: &dyn Analyzer,
        _references: &[LibraryRef],
    ) -> Vec<Vec<Diagnostic>> {
        sources.iter().map(|file| analyzer.check(file)).collect()
    }

    fn compile(&self, sources: &[SourceFile], references: &[LibraryRef]) -> Vec<Vec<Diagnostic>> {
        match &self.event_check {
            Some(check) => sources
                .iter()
                .map(|file| check.check(file, references))
                .collect(),
            None => sources.iter().map(|_| Vec::new()).collect(),
        }
    }
}

/// Flags `event {Type}` declarations whose type is unknown, with `E0412`.
///
/// The stand-in for a compiler's unresolved-name error. A type is known
/// when registered with [`with_known`](EventTypeCheck::with_known), or when
/// a library registered with [`with_library`](EventTypeCheck::with_library)
/// exports it and the current references include that library.
#[derive(Clone, Debug)]
pub struct EventTypeCheck {
    known: Vec<String>,
    libraries: FxHashMap<String, Vec<String>>,
    severity: Severity,
}

impl Default for EventTypeCheck {
    fn default() -> Self {
        EventTypeCheck::new()
    }
}

impl EventTypeCheck {
    pub fn new() -> Self {
        EventTypeCheck {
            known: Vec::new(),
            libraries: FxHashMap::default(),
            severity: Severity::Error,
        }
    }

    /// Register a built-in type name.
    #[must_use]
    pub fn with_known(mut self, name: impl Into<String>) -> Self {
        self.known.push(name.into());
        self
    }

    /// Register the type names a library exports.
    #[must_use]
    pub fn with_library(mut self, name: impl Into<String>, types: &[&str]) -> Self {
        self.libraries
            .insert(name.into(), types.iter().map(|&ty| ty.to_owned()).collect());
        self
    }

    /// Report findings at this severity instead of [`Severity::Error`].
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn check(&self, file: &SourceFile, references: &[LibraryRef]) -> Vec<Diagnostic> {
        let mut known: FxHashSet<&str> = self.known.iter().map(String::as_str).collect();
        for reference in references {
            if let Some(exported) = self.libraries.get(&reference.name) {
                known.extend(exported.iter().map(String::as_str));
            }
        }
        let words = words(&file.text);
        let mut diagnostics = Vec::new();
        for window in words.windows(2) {
            let [(_, keyword), (span, type_name)] = window else {
                continue;
            };
            if *keyword == "event" && !known.contains(type_name) {
                diagnostics.push(Diagnostic::new(
                    "E0412",
                    self.severity,
                    format!("cannot find type `{type_name}`"),
                    file,
                    *span,
                ));
            }
        }
        diagnostics
    }
}
