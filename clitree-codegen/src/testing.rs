//! Test utilities for the compiler.

use crate::{Declaration, Literal, Target, ValueType};

/// Minimal target that prints one line per declaration.
pub struct Echo;

impl Target for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn root_sentinel(&self) -> &'static str {
        "root"
    }

    fn render_literal(&self, literal: &Literal) -> String {
        format!("{:?}", literal)
    }

    fn render_value_type(&self, value_type: ValueType) -> Option<String> {
        Some(value_type.as_str().to_string())
    }

    fn header(&self) -> String {
        "# header\n".to_string()
    }

    fn declaration(&self, declaration: &Declaration) -> String {
        format!(
            "{} {} <- {}\n",
            declaration.kind,
            declaration.identifier,
            self.parent_name(&declaration.parent)
        )
    }

    fn footer(&self, entry_point: &str) -> String {
        format!("main({})\n", entry_point)
    }
}
