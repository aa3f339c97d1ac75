//! Lint for nodes without help text.

use clitree_schema::{NONE_SENTINEL, Schema};

use super::super::{Lint, walk};
use crate::lint::Diagnostic;

/// Lint that warns about groups and commands missing help text.
pub struct EmptyHelpLint;

impl Lint for EmptyHelpLint {
    fn name(&self) -> &'static str {
        "empty-help"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        walk(schema, &mut |visit| {
            if visit.help.trim().is_empty() || visit.help == NONE_SENTINEL {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("{} '{}' has no help", visit.kind, visit.path),
                    )
                    .at(visit.path.clone()),
                );
            }
        });
    }
}
