//! Schema tree display formatting.
//!
//! # Example
//!
//! ```
//! use clitree_codegen::{DisplayStyle, SchemaTreeDisplay};
//! use clitree_schema::{Command, Group, Schema};
//!
//! let schema = Schema::new(vec![
//!     Group::new("test", "Test").with_command(Command::new("print", "Print")).into(),
//! ]);
//!
//! let display = SchemaTreeDisplay::new(&schema).style(DisplayStyle::WithHelp);
//! assert_eq!(display.to_string(), "test - Test\n  print - Print");
//! ```

use std::fmt;

use clitree_schema::{Command, Group, Node, Param, Schema};

/// Display style for schema trees.
#[derive(Debug, Clone, Copy, Default)]
pub enum DisplayStyle {
    /// Indented names only.
    ///
    /// ```text
    /// test
    ///   print
    ///   counting
    ///     log
    /// ```
    #[default]
    Simple,

    /// Names with help text.
    ///
    /// ```text
    /// test - Test
    ///   print - Print
    /// ```
    WithHelp,

    /// Box-drawing tree with metadata.
    ///
    /// ```text
    /// └─ test (group)
    ///    ├─ print (1 option)
    ///    └─ counting (group, hidden)
    /// ```
    TreeBox,
}

/// Declarative schema tree display formatter.
///
/// Nodes are listed in document order: commands of a group before its
/// subgroups, matching the compiler's emission order.
#[derive(Debug, Clone)]
pub struct SchemaTreeDisplay<'a> {
    schema: &'a Schema,
    style: DisplayStyle,
    indent_str: &'a str,
}

/// A row of the tree, borrowed from the schema.
enum Row<'a> {
    Group(&'a Group),
    Command(&'a Command),
}

impl<'a> Row<'a> {
    fn name(&self) -> &'a str {
        match self {
            Row::Group(g) => &g.name,
            Row::Command(c) => &c.name,
        }
    }

    fn help(&self) -> &'a str {
        match self {
            Row::Group(g) => &g.help,
            Row::Command(c) => &c.help,
        }
    }

    fn hidden(&self) -> bool {
        match self {
            Row::Group(g) => g.hidden == "True",
            Row::Command(c) => c.hidden == "True",
        }
    }

    fn params(&self) -> &'a [Param] {
        match self {
            Row::Group(g) => &g.params,
            Row::Command(c) => &c.params,
        }
    }

    fn children(&self) -> Vec<Row<'a>> {
        match self {
            Row::Group(g) => g
                .commands
                .iter()
                .map(Row::Command)
                .chain(g.groups.iter().map(Row::Group))
                .collect(),
            Row::Command(_) => Vec::new(),
        }
    }
}

impl<'a> From<&'a Node> for Row<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Group(g) => Row::Group(g),
            Node::Command(c) => Row::Command(c),
        }
    }
}

impl<'a> SchemaTreeDisplay<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            style: DisplayStyle::default(),
            indent_str: "  ",
        }
    }

    pub fn style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the indentation string (default: two spaces).
    pub fn indent(mut self, indent: &'a str) -> Self {
        self.indent_str = indent;
        self
    }

    /// Render the tree to a string.
    pub fn render(&self) -> String {
        let mut output = String::new();
        let rows: Vec<Row<'a>> = self.schema.nodes.iter().map(Row::from).collect();

        match self.style {
            DisplayStyle::Simple | DisplayStyle::WithHelp => {
                for row in &rows {
                    self.render_indented(&mut output, row, 0);
                }
            }
            DisplayStyle::TreeBox => {
                let total = rows.len();
                for (i, row) in rows.iter().enumerate() {
                    self.render_tree_box(&mut output, row, "", i == total - 1);
                }
            }
        }
        output
    }

    fn render_indented(&self, output: &mut String, row: &Row<'a>, depth: usize) {
        output.push_str(&self.indent_str.repeat(depth));
        output.push_str(row.name());
        if let DisplayStyle::WithHelp = self.style {
            output.push_str(" - ");
            output.push_str(row.help());
        }
        output.push('\n');

        for child in row.children() {
            self.render_indented(output, &child, depth + 1);
        }
    }

    fn render_tree_box(&self, output: &mut String, row: &Row<'a>, prefix: &str, is_last: bool) {
        let connector = if is_last { "└─" } else { "├─" };
        let child_prefix = if is_last { "   " } else { "│  " };

        output.push_str(prefix);
        output.push_str(connector);
        output.push(' ');
        output.push_str(row.name());

        let meta = Self::format_metadata(row);
        if !meta.is_empty() {
            output.push_str(" (");
            output.push_str(&meta);
            output.push(')');
        }
        output.push('\n');

        let children = row.children();
        let total = children.len();
        let new_prefix = format!("{}{}", prefix, child_prefix);
        for (i, child) in children.iter().enumerate() {
            self.render_tree_box(output, child, &new_prefix, i == total - 1);
        }
    }

    fn format_metadata(row: &Row<'_>) -> String {
        let mut meta = Vec::new();

        if let Row::Group(_) = row {
            meta.push("group".to_string());
        }

        let options = row.params().iter().filter(|p| p.is_option()).count();
        let arguments = row.params().len() - options;
        for (count, noun) in [(options, "option"), (arguments, "argument")] {
            if count > 0 {
                meta.push(format!(
                    "{} {}{}",
                    count,
                    noun,
                    if count == 1 { "" } else { "s" }
                ));
            }
        }

        if row.hidden() {
            meta.push("hidden".to_string());
        }

        meta.join(", ")
    }
}

impl fmt::Display for SchemaTreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let output = self.render();
        // Remove trailing newline for Display
        write!(f, "{}", output.trim_end())
    }
}
