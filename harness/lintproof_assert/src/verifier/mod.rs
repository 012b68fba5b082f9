//! The verification entry points.

use lintproof_diagnostic::{Analyzer, Diagnostic, ExpectedDiagnostic, Toolchain};
use lintproof_source::{markup, SourceFile};
use rustc_hash::FxHashSet;

use crate::failure::Failure;
use crate::matching;
use crate::settings::Settings;

mod fix;


/// Drives verifications against one toolchain with one set of settings.
///
/// The verifier owns no compiler of its own; every analysis and compilation
/// goes through the [`Toolchain`] it borrows. All checks return
/// `Result<(), Failure>` and are usually wrapped in
/// [`require`](crate::require) at the call site.
pub struct Verifier<'t> {
    toolchain: &'t dyn Toolchain,
    settings: Settings,
}

impl<'t> Verifier<'t> {
    /// A verifier with default [`Settings`].
    pub fn new(toolchain: &'t dyn Toolchain) -> Self {
        Verifier {
            toolchain,
            settings: Settings::default(),
        }
    }

    pub fn with_settings(toolchain: &'t dyn Toolchain, settings: Settings) -> Self {
        Verifier {
            toolchain,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Check that the analyzer stays silent on the given sources.
    ///
    /// The sources carry no markers. Any produced diagnostic fails with a
    /// report listing all of them.
    #[tracing::instrument(level = "debug", skip_all, fields(analyzer = analyzer.name()))]
    pub fn valid(&self, analyzer: &dyn Analyzer, sources: &[&str]) -> Result<(), Failure> {
        let files = source_files(sources);
        let produced = self.run_analyzer(&files, analyzer);
        if produced.is_empty() {
            return Ok(());
        }
        Err(Failure::mismatch(matching::no_diagnostics_report(
            &produced, &files,
        )))
    }

    /// Check that the analyzer reports exactly at the `↓` markers.
    ///
    /// The analyzer must declare exactly one distinct diagnostic id; every
    /// marker becomes an expectation of that id at the marked position, and
    /// expectations and produced diagnostics must pair up one to one.
    #[tracing::instrument(level = "debug", skip_all, fields(analyzer = analyzer.name()))]
    pub fn diagnostics(&self, analyzer: &dyn Analyzer, sources: &[&str]) -> Result<(), Failure> {
        let id = single_supported_id(analyzer)?;
        let (expected, files) = expectations_from_markup(id, sources)?;
        let produced = self.run_analyzer(&files, analyzer);
        check_match(&expected, &produced, &files)
    }

    /// Check that the analyzer reports exactly the given expectations.
    ///
    /// Positions come from the expectations, not from markers, so the
    /// sources are used as written. Each distinct expected id must appear
    /// exactly once in the analyzer's declared ids.
    #[tracing::instrument(level = "debug", skip_all, fields(analyzer = analyzer.name()))]
    pub fn diagnostics_with(
        &self,
        analyzer: &dyn Analyzer,
        expected: &[ExpectedDiagnostic],
        sources: &[&str],
    ) -> Result<(), Failure> {
        let mut checked = FxHashSet::default();
        for expectation in expected {
            if checked.insert(expectation.id.as_str()) {
                assert_supports_id(analyzer, &expectation.id)?;
            }
        }
        let files = source_files(sources);
        let produced = self.run_analyzer(&files, analyzer);
        check_match(expected, &produced, &files)
    }

    /// Run the analyzer over all files and flatten the per-file groups in
    /// document order.
    fn run_analyzer(&self, files: &[SourceFile], analyzer: &dyn Analyzer) -> Vec<Diagnostic> {
        let produced: Vec<Diagnostic> = self
            .toolchain
            .analyze(files, analyzer, &self.settings.references)
            .into_iter()
            .flatten()
            .collect();
        tracing::debug!(count = produced.len(), "analysis complete");
        produced
    }
}

fn source_files(sources: &[&str]) -> Vec<SourceFile> {
    sources
        .iter()
        .map(|text| SourceFile::from_source(*text))
        .collect()
}

/// Build one expectation per `↓` marker, stripping the markers from the
/// sources. Fails when no source carries a marker.
fn expectations_from_markup(
    id: &str,
    sources: &[&str],
) -> Result<(Vec<ExpectedDiagnostic>, Vec<SourceFile>), Failure> {
    let mut expected = Vec::new();
    let mut files = Vec::new();
    for annotated in sources {
        let positions = markup::find_positions(annotated);
        let file = SourceFile::from_source(markup::strip(annotated));
        for position in positions {
            expected.push(
                ExpectedDiagnostic::new(id)
                    .at(position.line, position.character)
                    .in_file(file.name.clone()),
            );
        }
        files.push(file);
    }
    if expected.is_empty() {
        return Err(Failure::annotation(
            "Expected code to have at least one error position indicated with '↓'",
        ));
    }
    Ok((expected, files))
}

fn check_match(
    expected: &[ExpectedDiagnostic],
    produced: &[Diagnostic],
    files: &[SourceFile],
) -> Result<(), Failure> {
    let result = matching::match_diagnostics(expected, produced);
    if result.is_match() {
        return Ok(());
    }
    Err(Failure::mismatch(matching::mismatch_report(
        &result, expected, produced, files,
    )))
}

/// The single distinct id an analyzer must declare for marker-driven
/// checks. Declaring the same id twice is fine here; declaring two
/// different ids is not.
fn single_supported_id(analyzer: &dyn Analyzer) -> Result<&'static str, Failure> {
    let mut distinct: Vec<&'static str> = Vec::new();
    for id in analyzer.supported_ids().iter().copied() {
        if !distinct.contains(&id) {
            distinct.push(id);
        }
    }
    match distinct[..] {
        [] => Err(Failure::configuration(format!(
            "Analyzer {} does not declare any diagnostics.",
            analyzer.name(),
        ))),
        [id] => Ok(id),
        _ => Err(Failure::configuration(format!(
            "Analyzer {} supports multiple diagnostics: {}.\nSpecify the expected diagnostic explicitly.",
            analyzer.name(),
            braced(&distinct),
        ))),
    }
}

/// Require the analyzer to declare `id` exactly once, counting repeats.
fn assert_supports_id(analyzer: &dyn Analyzer, id: &str) -> Result<(), Failure> {
    let declared = analyzer.supported_ids();
    let count = declared
        .iter()
        .filter(|&&declared_id| declared_id == id)
        .count();
    match count {
        1 => Ok(()),
        0 => Err(Failure::configuration(format!(
            "Analyzer {} does not produce a diagnostic with ID {id}.\nThe analyzer produces the following diagnostics: {}\nThe expected diagnostic is: {id}",
            analyzer.name(),
            braced(declared),
        ))),
        _ => Err(Failure::configuration(format!(
            "Analyzer {} supports multiple diagnostics with ID {id}.\nThe analyzer produces the following diagnostics: {}\nThe expected diagnostic is: {id}",
            analyzer.name(),
            braced(declared),
        ))),
    }
}

fn braced(ids: &[&str]) -> String {
    format!("{{{}}}", ids.join(", "))
}
