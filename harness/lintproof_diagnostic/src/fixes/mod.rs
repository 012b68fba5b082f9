//! Code actions and text edits.
//!
//! A [`FixProvider`] proposes [`CodeAction`]s for a diagnostic; the harness
//! applies their [`TextEdit`]s to fixture text and verifies the result.

use lintproof_source::{SourceFile, Span};

use crate::Diagnostic;


/// A text edit that modifies source code.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TextEdit {
    /// The span to replace (empty span for insert).
    pub span: Span,
    /// The new text to insert.
    pub new_text: String,
}

impl TextEdit {
    /// Create a replacement edit.
    pub fn replace(span: Span, new_text: impl Into<String>) -> Self {
        TextEdit {
            span,
            new_text: new_text.into(),
        }
    }

    /// Create an insertion edit at a specific offset.
    pub fn insert(at: u32, text: impl Into<String>) -> Self {
        TextEdit {
            span: Span::point(at),
            new_text: text.into(),
        }
    }

    /// Create a deletion edit.
    pub fn delete(span: Span) -> Self {
        TextEdit {
            span,
            new_text: String::new(),
        }
    }

    /// Check if this edit is an insertion.
    pub fn is_insert(&self) -> bool {
        self.span.is_empty() && !self.new_text.is_empty()
    }

    /// Check if this edit is a deletion.
    pub fn is_delete(&self) -> bool {
        self.new_text.is_empty() && !self.span.is_empty()
    }

    /// Check if this edit is a replacement.
    pub fn is_replace(&self) -> bool {
        !self.is_insert() && !self.is_delete()
    }
}

/// Apply a set of non-overlapping edits to a text.
///
/// Edits are applied from end to start so earlier offsets stay valid; the
/// order of the input slice does not matter. Spans are clamped to the text.
pub fn apply_edits(text: &str, edits: &[TextEdit]) -> String {
    if edits.is_empty() {
        return text.to_string();
    }

    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by(|a, b| {
        b.span
            .start
            .cmp(&a.span.start)
            .then(b.span.end.cmp(&a.span.end))
    });

    let mut result = text.to_string();
    for edit in sorted {
        let start = (edit.span.start as usize).min(result.len());
        let end = (edit.span.end as usize).min(result.len()).max(start);
        result.replace_range(start..end, &edit.new_text);
    }
    result
}

/// A proposed fix: a titled set of edits to one document.
///
/// An action with no edits is a no-op action.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CodeAction {
    /// Title shown to the user, matched exactly when a title is specified.
    pub title: String,
    /// Edits to apply to the diagnostic's document.
    pub edits: Vec<TextEdit>,
}

impl CodeAction {
    /// Create an action with no edits.
    pub fn new(title: impl Into<String>) -> Self {
        CodeAction {
            title: title.into(),
            edits: Vec::new(),
        }
    }

    /// Add an edit.
    #[must_use]
    pub fn with_edit(mut self, edit: TextEdit) -> Self {
        self.edits.push(edit);
        self
    }
}

/// What a fix provider sees for one diagnostic.
#[derive(Copy, Clone, Debug)]
pub struct FixContext<'a> {
    diagnostic: &'a Diagnostic,
    file: &'a SourceFile,
}

impl<'a> FixContext<'a> {
    /// Pair a diagnostic with the document it was reported in.
    pub fn new(diagnostic: &'a Diagnostic, file: &'a SourceFile) -> Self {
        FixContext { diagnostic, file }
    }

    /// The diagnostic being fixed.
    pub fn diagnostic(&self) -> &'a Diagnostic {
        self.diagnostic
    }

    /// The document the diagnostic was reported in.
    pub fn source(&self) -> &'a SourceFile {
        self.file
    }

    /// Byte span of the diagnostic.
    pub fn span(&self) -> Span {
        self.diagnostic.span
    }

    /// Text under the diagnostic's span.
    pub fn target_text(&self) -> &'a str {
        &self.file.text[self.diagnostic.span.to_range()]
    }
}

/// A provider of candidate fixes for diagnostics.
pub trait FixProvider {
    /// Name used verbatim in failure messages.
    fn name(&self) -> &str;

    /// Ids of the diagnostics this provider can fix.
    fn fixable_ids(&self) -> &'static [&'static str];

    /// Candidate actions for one diagnostic, in preference order.
    fn fixes(&self, ctx: &FixContext<'_>) -> Vec<CodeAction>;
}
