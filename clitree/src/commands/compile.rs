use std::path::PathBuf;

use clap::Args;
use clitree_codegen_click::ProjectGenerator;
use clitree_schema::Schema;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::config::Config;

#[derive(Args)]
pub struct CompileCommand {
    /// Schema to compile (defaults to schema.json)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Project name used for the interface file name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Node invoked when the script runs (defaults to the first node)
    #[arg(long)]
    pub entry: Option<String>,

    /// Print only the interface source
    #[arg(long)]
    pub source_only: bool,
}

impl CompileCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let schema = Schema::from_file(config.schema_path(self.schema.as_deref())).unwrap_or_exit();

        let name = self
            .name
            .clone()
            .or_else(|| config.project.name.clone())
            .unwrap_or_else(|| "app".to_string());

        let mut generator = ProjectGenerator::new(&name, &name);
        if let Some(entry) = config.entry(self.entry.as_deref()) {
            generator = generator.with_entry_point(entry);
        }

        let artifacts = generator
            .artifacts(&schema)
            .wrap_err("Failed to compile schema")?;

        if self.source_only {
            if let Some(source) = artifacts.first() {
                print!("{}", source.content());
            }
            return Ok(());
        }

        for artifact in &artifacts {
            println!("── {} ──", artifact.path().display());
            println!("{}", artifact.content());
        }

        println!("── Summary ──");
        println!("{} files would be generated", artifacts.len());

        Ok(())
    }
}
