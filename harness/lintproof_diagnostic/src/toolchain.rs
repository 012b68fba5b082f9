//! Capability seams toward the host toolchain.

use std::fmt;

use lintproof_source::SourceFile;

use crate::Diagnostic;

/// An analysis rule under test.
pub trait Analyzer {
    /// Name used verbatim in failure messages.
    fn name(&self) -> &str;

    /// Ids of the diagnostics this rule can report.
    fn supported_ids(&self) -> &'static [&'static str];

    /// Run the rule over one compiled file.
    ///
    /// Called by toolchain implementations, never by the harness directly.
    fn check(&self, file: &SourceFile) -> Vec<Diagnostic>;
}

/// Opaque reference to a support library.
///
/// The harness forwards references to the toolchain and never interprets
/// them.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LibraryRef {
    /// Library name, in whatever form the toolchain resolves.
    pub name: String,
}

impl LibraryRef {
    /// Create a reference from a library name.
    pub fn new(name: impl Into<String>) -> Self {
        LibraryRef { name: name.into() }
    }
}

impl fmt::Display for LibraryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The compile seam.
///
/// Implementations wrap a host compiler. Both operations compile all sources
/// as one unit and return diagnostics grouped per source file, aligned with
/// `sources` by index and order-preserving within a file.
pub trait Toolchain {
    /// Compile the sources and run one analyzer, returning its diagnostics.
    fn analyze(
        &self,
        sources: &[SourceFile],
        analyzer: &dyn Analyzer,
        references: &[LibraryRef],
    ) -> Vec<Vec<Diagnostic>>;

    /// Compile without an analyzer and return the compiler's own diagnostics.
    fn compile(&self, sources: &[SourceFile], references: &[LibraryRef]) -> Vec<Vec<Diagnostic>>;
}
