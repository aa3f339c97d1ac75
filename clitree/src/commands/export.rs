use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clitree_codegen::lower;
use clitree_reflect::{Reflector, export, export_all, host};
use clitree_schema::Schema;
use eyre::{Context, Result};

use super::{Cli, UnwrapOrExit};
use crate::config::Config;

#[derive(Args)]
pub struct ExportCommand {
    /// Descriptor to write
    #[arg(short, long, default_value = "schema.json")]
    pub output: PathBuf,

    /// Also print the descriptor
    #[arg(long)]
    pub display: bool,

    /// Reflect the tree compiled from this schema instead of clitree itself
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Permission recorded on every node
    #[arg(long)]
    pub permission: Option<String>,
}

impl ExportCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let mut reflector = Reflector::new();
        if let Some(permission) = self
            .permission
            .clone()
            .or_else(|| config.export.permission.clone())
        {
            reflector = reflector.with_default_permission(permission);
        }

        let text = match &self.schema {
            Some(path) => {
                let schema = Schema::from_file(path).unwrap_or_exit();
                let declarations = lower(&schema).wrap_err("Schema cannot be compiled")?;
                export_all(&reflector, &host::build_compiled(&declarations), &self.output)
            }
            None => export(&reflector, &Cli::command(), &self.output),
        }
        .wrap_err("Failed to export schema")?;

        if self.display {
            print!("{}", text);
        }
        eprintln!("✓ Exported to {}", self.output.display());

        Ok(())
    }
}
