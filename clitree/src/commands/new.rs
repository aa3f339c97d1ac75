use std::path::PathBuf;

use clap::Args;
use clitree_codegen_click::{AlwaysReplace, GeneratedProject, ProjectGenerator, ReplacePrompt};
use clitree_schema::Schema;
use eyre::{Context, Result, eyre};

use super::UnwrapOrExit;
use crate::{config::Config, prompt::TerminalPrompt};

#[derive(Args)]
pub struct NewCommand {
    /// Project name; the interface is written to `<name>cli.py`
    pub name: Option<String>,

    /// Project directory (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Schema to compile (defaults to schema.json)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Node invoked when the script runs (defaults to the first node)
    #[arg(long)]
    pub entry: Option<String>,

    /// Replace an existing directory without asking
    #[arg(long)]
    pub force: bool,
}

impl NewCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let name = self
            .name
            .clone()
            .or_else(|| config.project.name.clone())
            .ok_or_else(|| eyre!("no project name given; pass NAME or set project.name"))?;

        let schema_path = config.schema_path(self.schema.as_deref());
        let schema = Schema::from_file(&schema_path).unwrap_or_exit();

        let path = self.output.clone().unwrap_or_else(|| PathBuf::from(&name));
        let mut generator = ProjectGenerator::new(&path, &name);
        if let Some(entry) = config.entry(self.entry.as_deref()) {
            generator = generator.with_entry_point(entry);
        }

        let prompt: &dyn ReplacePrompt = if self.force {
            &AlwaysReplace
        } else {
            &TerminalPrompt
        };

        let project = generator
            .generate(&schema, prompt)
            .wrap_err("Failed to generate project")?;

        Self::print_summary(&project, &schema);
        Ok(())
    }

    fn print_summary(project: &GeneratedProject, schema: &Schema) {
        let verb = if project.replaced { "Replaced" } else { "Created" };
        println!("✓ {} {}", verb, project.path.display());

        let count = schema.node_count();
        println!(
            "  {} node{} compiled",
            count,
            if count == 1 { "" } else { "s" }
        );
        println!();

        for file in &project.files {
            println!("  + {}", file.display());
        }
    }
}
