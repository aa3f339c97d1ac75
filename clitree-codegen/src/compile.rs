//! Schema Compiler driver.

use clitree_schema::Schema;
use tracing::debug;

use crate::{ConfigurationError, Declaration, Literal, Parent, Result, Target, lower};

/// Compile a schema into the body text of `target`.
///
/// The body holds one declaration per node in document order. Lowering
/// runs to completion first, so on error no text is returned at all.
pub fn compile(schema: &Schema, target: &dyn Target) -> Result<String> {
    debug!(
        target = target.name(),
        nodes = schema.node_count(),
        "compiling schema"
    );

    let declarations = lower(schema)?;
    Ok(render_body(&declarations, target))
}

fn render_body(declarations: &[Declaration], target: &dyn Target) -> String {
    let body: String = declarations
        .iter()
        .map(|declaration| target.declaration(declaration))
        .collect();

    debug!(
        declarations = declarations.len(),
        bytes = body.len(),
        "compiled schema"
    );
    body
}

/// Compile a complete source file: header, body and footer.
pub fn compile_source(
    schema: &Schema,
    target: &dyn Target,
    entry_point: Option<&str>,
) -> Result<String> {
    debug!(
        target = target.name(),
        nodes = schema.node_count(),
        "compiling schema"
    );

    let declarations = lower(schema)?;
    let entry = entry_point_of(&declarations, entry_point)?;

    let mut source = target.header();
    source.push_str(&render_body(&declarations, target));
    source.push_str(&target.footer(&entry));
    Ok(source)
}

/// Identifier of the node the footer invokes.
///
/// Defaults to the first top-level node. A requested entry point must name
/// a top-level node, by schema name or by identifier.
pub fn resolve_entry_point(schema: &Schema, requested: Option<&str>) -> Result<String> {
    entry_point_of(&lower(schema)?, requested)
}

fn entry_point_of(declarations: &[Declaration], requested: Option<&str>) -> Result<String> {
    let mut roots = declarations
        .iter()
        .filter(|declaration| declaration.parent == Parent::Root);

    match requested {
        Some(name) => roots
            .find(|declaration| {
                declaration.identifier == name
                    || declaration.attributes.get("name") == Some(&Literal::Str(name.to_string()))
            })
            .map(|declaration| declaration.identifier.clone())
            .ok_or_else(|| ConfigurationError::UnknownEntryPoint {
                name: name.to_string(),
            }),
        None => roots
            .next()
            .map(|declaration| declaration.identifier.clone())
            .ok_or(ConfigurationError::NoEntryPoint),
    }
}

#[cfg(test)]
mod tests {
    use clitree_schema::{Command, Group};

    use super::*;
    use crate::testing::Echo;

    fn schema() -> Schema {
        Schema::new(vec![
            Group::new("test", "").with_command(Command::new("print", "")).into(),
            Command::new("dev-tools", "").into(),
        ])
    }

    #[test]
    fn test_entry_point_defaults_to_first_node() {
        assert_eq!(resolve_entry_point(&schema(), None).unwrap(), "test");
    }

    #[test]
    fn test_entry_point_override() {
        assert_eq!(
            resolve_entry_point(&schema(), Some("dev-tools")).unwrap(),
            "dev_tools"
        );
        assert_eq!(
            resolve_entry_point(&schema(), Some("dev_tools")).unwrap(),
            "dev_tools"
        );
        assert_eq!(
            resolve_entry_point(&schema(), Some("print")),
            Err(ConfigurationError::UnknownEntryPoint {
                name: "print".into()
            })
        );
    }

    #[test]
    fn test_entry_point_uses_unique_identifier() {
        let schema = Schema::new(vec![
            Group::new("tool", "").with_command(Command::new("tool", "")).into(),
            Command::new("tool", "").into(),
        ]);

        assert_eq!(resolve_entry_point(&schema, None).unwrap(), "tool");
        assert_eq!(
            resolve_entry_point(&schema, Some("tool_3")).unwrap(),
            "tool_3"
        );
        assert!(resolve_entry_point(&schema, Some("tool_2")).is_err());
    }

    #[test]
    fn test_empty_schema_has_no_entry_point() {
        assert_eq!(
            resolve_entry_point(&Schema::default(), None),
            Err(ConfigurationError::NoEntryPoint)
        );
    }

    #[test]
    fn test_compile_follows_document_order() {
        let body = compile(&schema(), &Echo).unwrap();
        assert_eq!(body, "group test <- root\ncommand print <- test\ncommand dev_tools <- root\n");
    }

    #[test]
    fn test_compile_source_wraps_body() {
        let source = compile_source(&schema(), &Echo, None).unwrap();
        assert!(source.starts_with("# header\n"));
        assert!(source.ends_with("main(test)\n"));
    }

    #[test]
    fn test_compile_error_yields_no_text() {
        let mut command = Command::new("x", "");
        command.hidden = "no".into();
        let schema = Schema::new(vec![command.into()]);

        assert!(compile(&schema, &Echo).is_err());
        assert!(compile_source(&schema, &Echo, None).is_err());
    }
}
