use std::path::{Path, PathBuf};

use clitree_core::GeneratedFile;
use clitree_schema::Schema;

/// YAML descriptor of the schema a project was compiled from
pub struct SchemaYaml {
    content: String,
}

impl SchemaYaml {
    pub fn new(schema: &Schema) -> clitree_schema::Result<Self> {
        Ok(Self {
            content: schema.to_yaml()?,
        })
    }
}

impl GeneratedFile for SchemaYaml {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("schema.yaml")
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
