use std::path::{Path, PathBuf};

use clitree_core::GeneratedFile;
use clitree_schema::Schema;

/// JSON descriptor of the schema a project was compiled from
pub struct SchemaJson {
    content: String,
}

impl SchemaJson {
    pub fn new(schema: &Schema) -> clitree_schema::Result<Self> {
        let mut content = schema.to_json_pretty()?;
        content.push('\n');
        Ok(Self { content })
    }
}

impl GeneratedFile for SchemaJson {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("schema.json")
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
