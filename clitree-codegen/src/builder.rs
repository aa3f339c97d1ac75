//! Line-oriented source text builder shared by targets.

/// Builds indented source text one line at a time.
///
/// ```
/// use clitree_codegen::builder::SourceBuilder;
///
/// let code = SourceBuilder::python()
///     .block("def main():", |b| b.line("pass"))
///     .build();
///
/// assert_eq!(code, "def main():\n    pass\n");
/// ```
#[derive(Debug, Clone)]
pub struct SourceBuilder {
    unit: &'static str,
    depth: usize,
    out: String,
}

impl SourceBuilder {
    /// Builder indenting each level by `unit`
    pub fn with_unit(unit: &'static str) -> Self {
        Self {
            unit,
            depth: 0,
            out: String::new(),
        }
    }

    /// Four spaces per level
    pub fn python() -> Self {
        Self::with_unit("    ")
    }

    pub fn line(mut self, text: &str) -> Self {
        for _ in 0..self.depth {
            self.out.push_str(self.unit);
        }
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    /// Empty line, never indented
    pub fn blank(mut self) -> Self {
        self.out.push('\n');
        self
    }

    /// `header` followed by the lines added in `body`, one level deeper
    pub fn block(mut self, header: &str, body: impl FnOnce(Self) -> Self) -> Self {
        self = self.line(header);
        self.depth += 1;
        let mut inner = body(self);
        inner.depth -= 1;
        inner
    }

    pub fn each<T>(self, items: impl IntoIterator<Item = T>, f: impl Fn(Self, T) -> Self) -> Self {
        items.into_iter().fold(self, f)
    }

    pub fn build(self) -> String {
        self.out
    }
}
