//! Lint for argument parameters, which the compiler does not emit.

use clitree_schema::Schema;

use super::super::{Lint, walk};
use crate::lint::Diagnostic;

pub struct ArgumentDroppedLint;

impl Lint for ArgumentDroppedLint {
    fn name(&self) -> &'static str {
        "argument-dropped"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        walk(schema, &mut |visit| {
            for param in visit.params.iter().filter(|p| !p.is_option()) {
                let name = param.name().unwrap_or("<unnamed>");
                diagnostics.push(
                    Diagnostic::info(
                        self.name(),
                        format!("argument '{}' of '{}' will not be emitted", name, visit.path),
                    )
                    .at(visit.path.clone()),
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use clitree_schema::{Command, Param};

    use super::*;
    use crate::lint::Severity;

    #[test]
    fn test_argument_is_reported() {
        let schema = Schema::new(vec![
            Command::new("copy", "")
                .with_param(Param::argument([("name", "src")]))
                .with_param(Param::option([("name", "force")]))
                .into(),
        ]);

        let mut diagnostics = Vec::new();
        ArgumentDroppedLint.check(&schema, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Info);
        assert_eq!(
            diagnostics[0].message,
            "argument 'src' of 'copy' will not be emitted"
        );
    }
}
