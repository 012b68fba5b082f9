//! The code fix flows: single fix, batch fix and the no-fix check.

use lintproof_diagnostic::fixes::{apply_edits, CodeAction, FixContext, FixProvider};
use lintproof_diagnostic::{Analyzer, Diagnostic, ExpectedDiagnostic};
use lintproof_source::SourceFile;
use rustc_hash::FxHashSet;

use crate::diff;
use crate::failure::Failure;
use crate::matching;

use super::{braced, check_match, expectations_from_markup, single_supported_id, Verifier};

impl Verifier<'_> {
    /// Check that applying the single offered fix yields `fixed_code`.
    ///
    /// The markers must match first, exactly as in
    /// [`diagnostics`](Verifier::diagnostics). Exactly one produced
    /// diagnostic may be fixable and the fix must offer exactly one action
    /// for it. After applying, the fixed sources must compile without
    /// introduced errors and the edited document must equal `fixed_code`.
    #[tracing::instrument(level = "debug", skip_all, fields(
        analyzer = analyzer.name(),
        fix = fix.name(),
    ))]
    pub fn code_fix(
        &self,
        analyzer: &dyn Analyzer,
        fix: &dyn FixProvider,
        sources: &[&str],
        fixed_code: &str,
    ) -> Result<(), Failure> {
        self.run_code_fix(analyzer, fix, sources, fixed_code, None)
    }

    /// Like [`code_fix`](Verifier::code_fix), but selects the action whose
    /// title equals `title` when the fix offers several.
    pub fn code_fix_with_title(
        &self,
        analyzer: &dyn Analyzer,
        fix: &dyn FixProvider,
        sources: &[&str],
        fixed_code: &str,
        title: &str,
    ) -> Result<(), Failure> {
        self.run_code_fix(analyzer, fix, sources, fixed_code, Some(title))
    }

    /// Check that repeatedly applying the fix settles on `fixed_sources`.
    ///
    /// Fixes one diagnostic per round, re-analyzing in between, until no
    /// fixable diagnostic remains or the round bound from the settings is
    /// hit. `fixed_sources` pairs with `sources` by index.
    #[tracing::instrument(level = "debug", skip_all, fields(
        analyzer = analyzer.name(),
        fix = fix.name(),
    ))]
    pub fn fix_all(
        &self,
        analyzer: &dyn Analyzer,
        fix: &dyn FixProvider,
        sources: &[&str],
        fixed_sources: &[&str],
    ) -> Result<(), Failure> {
        self.run_fix_all(analyzer, fix, sources, fixed_sources, None)
    }

    /// Like [`fix_all`](Verifier::fix_all), but selects actions by title.
    pub fn fix_all_with_title(
        &self,
        analyzer: &dyn Analyzer,
        fix: &dyn FixProvider,
        sources: &[&str],
        fixed_sources: &[&str],
        title: &str,
    ) -> Result<(), Failure> {
        self.run_fix_all(analyzer, fix, sources, fixed_sources, Some(title))
    }

    /// Check that the fix leaves the sources alone.
    ///
    /// Passes when the fix offers no action for the single fixable
    /// diagnostic, or offers one whose application changes nothing.
    #[tracing::instrument(level = "debug", skip_all, fields(
        analyzer = analyzer.name(),
        fix = fix.name(),
    ))]
    pub fn no_fix(
        &self,
        analyzer: &dyn Analyzer,
        fix: &dyn FixProvider,
        sources: &[&str],
    ) -> Result<(), Failure> {
        let (expected, files) = prepare(analyzer, fix, sources)?;
        let produced = self.run_analyzer(&files, analyzer);
        check_match(&expected, &produced, &files)?;
        let fixable = single_fixable(analyzer, fix, &produced)?;
        let index = document_index(&files, &fixable)?;
        let actions = {
            let context = FixContext::new(&fixable, &files[index]);
            fix.fixes(&context)
        };
        let Some(action) = select_action(fix.name(), actions, None)? else {
            return Ok(());
        };
        let fixed_text = apply_edits(&files[index].text, &action.edits);
        match diff::compare(&files[index].text, &fixed_text) {
            Ok(()) => Ok(()),
            Err(report) => Err(Failure::mismatch(format!(
                "Expected the code fix to not change any document.\n{report}",
            ))),
        }
    }

    fn run_code_fix(
        &self,
        analyzer: &dyn Analyzer,
        fix: &dyn FixProvider,
        sources: &[&str],
        fixed_code: &str,
        title: Option<&str>,
    ) -> Result<(), Failure> {
        let (expected, files) = prepare(analyzer, fix, sources)?;
        let produced = self.run_analyzer(&files, analyzer);
        check_match(&expected, &produced, &files)?;
        let fixable = single_fixable(analyzer, fix, &produced)?;
        let index = document_index(&files, &fixable)?;
        let actions = {
            let context = FixContext::new(&fixable, &files[index]);
            fix.fixes(&context)
        };
        let Some(action) = select_action(fix.name(), actions, title)? else {
            return Err(Failure::cardinality(format!(
                "{} did not change any document.",
                fix.name(),
            )));
        };
        let fixed_text = apply_edits(&files[index].text, &action.edits);
        if fixed_text == files[index].text {
            return Err(Failure::convergence(format!(
                "{} did not change any document.",
                fix.name(),
            )));
        }
        let mut fixed = files.clone();
        fixed[index].text = fixed_text;
        self.assert_no_introduced_errors(fix.name(), &fixed)?;
        for (position, file) in fixed.iter().enumerate() {
            let expected_text = if position == index {
                fixed_code
            } else {
                files[position].text.as_str()
            };
            if let Err(report) = diff::compare(expected_text, &file.text) {
                return Err(Failure::mismatch(report));
            }
        }
        Ok(())
    }

    fn run_fix_all(
        &self,
        analyzer: &dyn Analyzer,
        fix: &dyn FixProvider,
        sources: &[&str],
        fixed_sources: &[&str],
        title: Option<&str>,
    ) -> Result<(), Failure> {
        if fixed_sources.len() != sources.len() {
            return Err(Failure::configuration(format!(
                "Expected {} fixed sources, was {}.",
                sources.len(),
                fixed_sources.len(),
            )));
        }
        let (expected, files) = prepare(analyzer, fix, sources)?;
        let mut produced = self.run_analyzer(&files, analyzer);
        check_match(&expected, &produced, &files)?;

        let fixable_ids: FxHashSet<&str> = fix.fixable_ids().iter().copied().collect();
        let mut current = files;
        let mut rounds = 0usize;
        loop {
            let Some(diagnostic) = produced
                .iter()
                .find(|diagnostic| fixable_ids.contains(diagnostic.id.as_str()))
                .cloned()
            else {
                break;
            };
            if rounds == self.settings.fix_iterations {
                return Err(Failure::convergence(format!(
                    "{} did not converge after {} iterations.",
                    fix.name(),
                    self.settings.fix_iterations,
                )));
            }
            rounds += 1;
            tracing::debug!(round = rounds, id = %diagnostic.id, "applying fix");
            let index = document_index(&current, &diagnostic)?;
            let actions = {
                let context = FixContext::new(&diagnostic, &current[index]);
                fix.fixes(&context)
            };
            let Some(action) = select_action(fix.name(), actions, title)? else {
                // A fixable diagnostic with no action on offer will never
                // make progress.
                return Err(Failure::convergence(format!(
                    "{} did not change any document.",
                    fix.name(),
                )));
            };
            let fixed_text = apply_edits(&current[index].text, &action.edits);
            if fixed_text == current[index].text {
                return Err(Failure::convergence(format!(
                    "{} did not change any document.",
                    fix.name(),
                )));
            }
            current[index].text = fixed_text;
            produced = self.run_analyzer(&current, analyzer);
        }

        self.assert_no_introduced_errors(fix.name(), &current)?;
        for (file, expected_text) in current.iter().zip(fixed_sources) {
            if let Err(report) = diff::compare(expected_text, &file.text) {
                return Err(Failure::mismatch(report));
            }
        }
        Ok(())
    }

    /// Compile the fixed sources and fail when the fix introduced errors.
    ///
    /// The severity policy from the settings decides which introduced
    /// diagnostics count; the suppressed-id allowlist excuses the rest.
    pub(super) fn assert_no_introduced_errors(
        &self,
        fix_name: &str,
        fixed: &[SourceFile],
    ) -> Result<(), Failure> {
        let compiled = self.toolchain.compile(fixed, &self.settings.references);
        let included: Vec<&Diagnostic> = compiled
            .iter()
            .flatten()
            .filter(|diagnostic| self.settings.allowed.flags(diagnostic.severity))
            .collect();
        let Some(first) = included.first() else {
            return Ok(());
        };
        let suppressed: FxHashSet<&str> = self
            .settings
            .suppressed
            .iter()
            .map(String::as_str)
            .collect();
        if included
            .iter()
            .all(|diagnostic| suppressed.contains(diagnostic.id.as_str()))
        {
            return Ok(());
        }
        let mut message = format!(
            "{fix_name} introduced syntax error{}.\n",
            if included.len() > 1 { "s" } else { "" },
        );
        for diagnostic in &included {
            message.push_str(&matching::format_produced(diagnostic, fixed));
        }
        message.push_str("First source file with error is:\n");
        if let Some(source) = fixed.iter().find(|file| file.name == first.file) {
            message.push_str(&source.text);
            message.push('\n');
        }
        Err(Failure::regression(message))
    }
}

/// The shared preconditions of every fix flow: the fix must claim at least
/// one of the analyzer's ids, the analyzer must declare a single distinct
/// id, and the sources must carry at least one marker.
fn prepare(
    analyzer: &dyn Analyzer,
    fix: &dyn FixProvider,
    sources: &[&str],
) -> Result<(Vec<ExpectedDiagnostic>, Vec<SourceFile>), Failure> {
    assert_fixable_overlap(analyzer, fix)?;
    let id = single_supported_id(analyzer)?;
    expectations_from_markup(id, sources)
}

fn assert_fixable_overlap(analyzer: &dyn Analyzer, fix: &dyn FixProvider) -> Result<(), Failure> {
    let fixable: FxHashSet<&str> = fix.fixable_ids().iter().copied().collect();
    if analyzer
        .supported_ids()
        .iter()
        .any(|id| fixable.contains(id))
    {
        return Ok(());
    }
    Err(Failure::configuration(format!(
        "Analyzer {} does not produce diagnostics fixable by {}.\nThe analyzer produces the following diagnostics: {}\nThe code fix supports the following diagnostics: {}",
        analyzer.name(),
        fix.name(),
        braced(analyzer.supported_ids()),
        braced(fix.fixable_ids()),
    )))
}

/// The one produced diagnostic the fix claims to handle.
pub(super) fn single_fixable(
    analyzer: &dyn Analyzer,
    fix: &dyn FixProvider,
    produced: &[Diagnostic],
) -> Result<Diagnostic, Failure> {
    let fixable_ids: FxHashSet<&str> = fix.fixable_ids().iter().copied().collect();
    let mut fixable = produced
        .iter()
        .filter(|diagnostic| fixable_ids.contains(diagnostic.id.as_str()));
    let Some(first) = fixable.next() else {
        return Err(Failure::cardinality("Expected one code fix, was 0."));
    };
    if fixable.next().is_some() {
        let produced_ids: Vec<&str> = produced
            .iter()
            .map(|diagnostic| diagnostic.id.as_str())
            .collect();
        return Err(Failure::cardinality(format!(
            "Code analyzed with {} generated more than one diagnostic fixable by {}.\nThe analyzed code contained the following diagnostics: {}\nThe code fix supports the following diagnostics: {}\nMaybe you meant to call fix_all?",
            analyzer.name(),
            fix.name(),
            braced(&produced_ids),
            braced(fix.fixable_ids()),
        )));
    }
    Ok(first.clone())
}

/// Pick the action to apply.
///
/// Without a title, one candidate is required; several fail with the full
/// title list. With a title, the titles must contain it. `Ok(None)` means
/// the fix offered nothing at all, which each flow judges for itself.
pub(super) fn select_action(
    fix_name: &str,
    actions: Vec<CodeAction>,
    title: Option<&str>,
) -> Result<Option<CodeAction>, Failure> {
    if actions.is_empty() {
        return Ok(None);
    }
    match title {
        Some(title) => {
            if let Some(position) = actions.iter().position(|action| action.title == title) {
                return Ok(actions.into_iter().nth(position));
            }
            let mut found = String::new();
            for action in &actions {
                found.push_str(&action.title);
                found.push('\n');
            }
            Err(Failure::cardinality(format!(
                "Did not find a code fix with title {title}.\nFound:\n{found}",
            )))
        }
        None => {
            if actions.len() == 1 {
                return Ok(actions.into_iter().next());
            }
            let titles: Vec<&str> = actions.iter().map(|action| action.title.as_str()).collect();
            Err(Failure::cardinality(format!(
                "Expected only one code fix, found {}:\n{}\nUse the overload that specifies title.",
                actions.len(),
                titles.join("\n"),
            )))
        }
    }
}

/// Index of the document a diagnostic points into.
pub(super) fn document_index(files: &[SourceFile], diagnostic: &Diagnostic) -> Result<usize, Failure> {
    files
        .iter()
        .position(|file| file.name == diagnostic.file)
        .ok_or_else(|| {
            Failure::configuration(format!(
                "The diagnostic with ID {} references unknown file {}.",
                diagnostic.id, diagnostic.file,
            ))
        })
}

