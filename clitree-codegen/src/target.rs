use crate::{Declaration, Literal, Parent, ValueType};

/// A language/framework the schema compiler can emit.
///
/// Implement this trait to emit command-line source for a new host
/// framework. The compiler drives it: `header`, then one `declaration` per
/// node in document order, then `footer`.
pub trait Target {
    /// Target identifier (e.g., "click")
    fn name(&self) -> &'static str;

    /// Name that top-level declarations attach to
    fn root_sentinel(&self) -> &'static str;

    /// Render a normalized literal in target syntax
    fn render_literal(&self, literal: &Literal) -> String;

    /// Render a declared option value type, if the target has one for it
    fn render_value_type(&self, value_type: ValueType) -> Option<String>;

    /// Fixed text emitted before all declarations
    fn header(&self) -> String;

    /// Text for a single group or command
    fn declaration(&self, declaration: &Declaration) -> String;

    /// Fixed text emitted after all declarations, invoking `entry_point`
    fn footer(&self, entry_point: &str) -> String;

    /// Name a declaration attaches to
    fn parent_name<'a>(&'a self, parent: &'a Parent) -> &'a str {
        match parent {
            Parent::Root => self.root_sentinel(),
            Parent::Node(identifier) => identifier,
        }
    }
}
