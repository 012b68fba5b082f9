//! Mock fix providers, from well-behaved to pathological.

use lintproof_diagnostic::fixes::{CodeAction, FixContext, FixProvider, TextEdit};

/// Renames the flagged identifier by trimming its leading underscores.
#[derive(Copy, Clone, Default, Debug)]
pub struct RenameFix;

impl FixProvider for RenameFix {
    fn name(&self) -> &str {
        "RenameFix"
    }

    fn fixable_ids(&self) -> &'static [&'static str] {
        &["LP0001"]
    }

    fn fixes(&self, context: &FixContext<'_>) -> Vec<CodeAction> {
        let renamed = context.target_text().trim_start_matches('_');
        vec![CodeAction::new(format!("Rename to: {renamed}"))
            .with_edit(TextEdit::replace(context.span(), renamed))]
    }
}

/// Offers two candidate renames, for exercising title selection.
#[derive(Copy, Clone, Default, Debug)]
pub struct TwoRenameFix;

impl FixProvider for TwoRenameFix {
    fn name(&self) -> &str {
        "TwoRenameFix"
    }

    fn fixable_ids(&self) -> &'static [&'static str] {
        &["LP0001"]
    }

    fn fixes(&self, context: &FixContext<'_>) -> Vec<CodeAction> {
        let stem = context.target_text().trim_start_matches('_');
        [1u8, 2]
            .iter()
            .map(|suffix| {
                let renamed = format!("{stem}{suffix}");
                CodeAction::new(format!("Rename to: {renamed}"))
                    .with_edit(TextEdit::replace(context.span(), renamed))
            })
            .collect()
    }
}

/// Claims to handle `LP0001` but never offers an action.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoActionFix;

impl FixProvider for NoActionFix {
    fn name(&self) -> &str {
        "NoActionFix"
    }

    fn fixable_ids(&self) -> &'static [&'static str] {
        &["LP0001"]
    }

    fn fixes(&self, _context: &FixContext<'_>) -> Vec<CodeAction> {
        Vec::new()
    }
}

/// Offers one action that carries no edits.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoChangeFix;

impl FixProvider for NoChangeFix {
    fn name(&self) -> &str {
        "NoChangeFix"
    }

    fn fixable_ids(&self) -> &'static [&'static str] {
        &["LP0001"]
    }

    fn fixes(&self, _context: &FixContext<'_>) -> Vec<CodeAction> {
        vec![CodeAction::new("Change nothing")]
    }
}

/// Inserts an event declaration at the end of the class body.
#[derive(Copy, Clone, Default, Debug)]
pub struct InsertEventFix;

impl FixProvider for InsertEventFix {
    fn name(&self) -> &str {
        "InsertEventFix"
    }

    fn fixable_ids(&self) -> &'static [&'static str] {
        &["LP0002"]
    }

    fn fixes(&self, context: &FixContext<'_>) -> Vec<CodeAction> {
        let text = &context.source().text;
        let Some(close) = text.rfind('}') else {
            return Vec::new();
        };
        let at = u32::try_from(close).unwrap_or(u32::MAX);
        vec![CodeAction::new("Insert event").with_edit(TextEdit::insert(
            at,
            "    public event EventHandler SomeEvent;\n",
        ))]
    }
}
