//! Per-run verification settings.

use lintproof_diagnostic::{LibraryRef, Severity};

/// Default bound on apply rounds in the batch fix loop.
pub const DEFAULT_FIX_ITERATIONS: usize = 32;

/// Which severities the post-fix regression check treats as introduced
/// errors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum AllowedDiagnostics {
    /// Introduced warnings and errors both fail the check.
    None,
    /// Introduced warnings are tolerated, errors fail.
    #[default]
    Warnings,
    /// Introduced warnings and errors are both tolerated.
    WarningsAndErrors,
}

impl AllowedDiagnostics {
    /// Whether an introduced diagnostic of this severity fails the
    /// regression check. Notes and help hints never do.
    pub fn flags(self, severity: Severity) -> bool {
        match severity {
            Severity::Error => !matches!(self, AllowedDiagnostics::WarningsAndErrors),
            Severity::Warning => matches!(self, AllowedDiagnostics::None),
            Severity::Note | Severity::Help => false,
        }
    }
}

/// Settings a [`Verifier`](crate::Verifier) applies to every check.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Library references handed to the toolchain on every call.
    pub references: Vec<LibraryRef>,
    /// Diagnostic ids the regression check ignores even when flagged.
    pub suppressed: Vec<String>,
    /// Severity policy for the regression check.
    pub allowed: AllowedDiagnostics,
    /// Upper bound on apply rounds in the batch fix loop.
    pub fix_iterations: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            references: Vec::new(),
            suppressed: Vec::new(),
            allowed: AllowedDiagnostics::default(),
            fix_iterations: DEFAULT_FIX_ITERATIONS,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Settings::default()
    }

    /// Add a library reference.
    #[must_use]
    pub fn with_reference(mut self, reference: LibraryRef) -> Self {
        self.references.push(reference);
        self
    }

    /// Allowlist a diagnostic id for the regression check.
    #[must_use]
    pub fn with_suppressed(mut self, id: impl Into<String>) -> Self {
        self.suppressed.push(id.into());
        self
    }

    /// Set the severity policy for the regression check.
    #[must_use]
    pub fn with_allowed(mut self, allowed: AllowedDiagnostics) -> Self {
        self.allowed = allowed;
        self
    }

    /// Set the bound on apply rounds in the batch fix loop.
    #[must_use]
    pub fn with_fix_iterations(mut self, iterations: usize) -> Self {
        self.fix_iterations = iterations;
        self
    }
}
