use clitree_codegen::{Declaration, Literal, OptionDecl, Target, ValueType, builder::SourceBuilder};

/// Decorator-style Python target built on `click`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickTarget;

impl ClickTarget {
    pub fn new() -> Self {
        Self
    }

    fn decorator(&self, declaration: &Declaration) -> String {
        let args: Vec<String> = declaration
            .attributes
            .iter()
            .map(|(key, value)| format!("{}={}", key, self.render_literal(value)))
            .collect();

        format!(
            "@{}.{}({})",
            self.parent_name(&declaration.parent),
            declaration.kind,
            args.join(", ")
        )
    }

    fn option(&self, option: &OptionDecl) -> String {
        // The explicit parameter name keeps click from deriving its own from the flag
        let mut args = vec![
            self.render_literal(&Literal::Str(option.flag.clone())),
            quote(&option.argument),
        ];
        args.extend(
            option
                .attributes
                .iter()
                .map(|(key, value)| format!("{}={}", key, self.render_literal(value))),
        );
        if let Some(value_type) = option.value_type.and_then(|t| self.render_value_type(t)) {
            args.push(format!("type={}", value_type));
        }

        format!("@click.option({})", args.join(", "))
    }

    fn context_call(&self, options: &[OptionDecl]) -> String {
        if options.is_empty() {
            return "set_context_obj(ctx)".to_string();
        }

        let entries: Vec<String> = options
            .iter()
            .map(|o| format!("{}: {}", quote(&o.argument), o.argument))
            .collect();
        format!("set_context_obj(ctx, {{{}}})", entries.join(", "))
    }
}

impl Target for ClickTarget {
    fn name(&self) -> &'static str {
        "click"
    }

    fn root_sentinel(&self) -> &'static str {
        "click"
    }

    fn render_literal(&self, literal: &Literal) -> String {
        match literal {
            Literal::Str(s) => quote(s),
            Literal::Bool(true) => "True".to_string(),
            Literal::Bool(false) => "False".to_string(),
            Literal::Int(i) => i.to_string(),
            Literal::None => "None".to_string(),
        }
    }

    fn render_value_type(&self, value_type: ValueType) -> Option<String> {
        let name = match value_type {
            ValueType::Str => "click.STRING",
            ValueType::Bool => "click.BOOL",
            ValueType::Int => "click.INT",
            ValueType::None => return None,
        };
        Some(name.to_string())
    }

    fn header(&self) -> String {
        HEADER.to_string()
    }

    fn declaration(&self, declaration: &Declaration) -> String {
        let params: Vec<&str> = std::iter::once("ctx")
            .chain(declaration.options.iter().map(|o| o.argument.as_str()))
            .collect();

        SourceBuilder::python()
            .line(&self.decorator(declaration))
            .each(&declaration.options, |b, option| b.line(&self.option(option)))
            .line("@click.pass_context")
            .block(
                &format!("def {}({}):", declaration.identifier, params.join(", ")),
                |b| b.line(&self.context_call(&declaration.options)),
            )
            .blank()
            .blank()
            .build()
    }

    fn footer(&self, entry_point: &str) -> String {
        SourceBuilder::python()
            .block("if __name__ == \"__main__\":", |b| {
                b.line(&format!("{}()", entry_point))
            })
            .build()
    }
}

/// Render a Python double-quoted string literal
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

const HEADER: &str = r#"import logging

import click


def set_context_obj(ctx, attrs=None):
    """Merge attrs into ctx.obj; values set by a child overwrite its parent's."""
    ctx.ensure_object(dict)
    for key, value in (attrs or {}).items():
        ctx.obj[key] = value


def get_logger(name):
    """Return a logger writing to <name>.log, rebuilt on every invocation."""
    logger = logging.getLogger(str(name))
    logger.setLevel(logging.DEBUG)
    handler = logging.FileHandler(str(name) + ".log")
    handler.setFormatter(
        logging.Formatter(
            "[%(asctime)s] p%(process)s {%(filename)s:%(lineno)d} %(levelname)s - %(message)s",
            "%Y-%m-%d %H:%M:%S",
        )
    )
    logger.handlers.clear()
    logger.addHandler(handler)
    return logger


"#;
