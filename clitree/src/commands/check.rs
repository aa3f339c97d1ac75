use std::path::PathBuf;

use clap::Args;
use clitree_codegen::{
    DisplayStyle, SchemaTreeDisplay, lower,
    lint::{Severity, lint},
};
use clitree_schema::Schema;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::config::Config;

#[derive(Args)]
pub struct CheckCommand {
    /// Schema to check (defaults to schema.json)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,
}

impl CheckCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let path = config.schema_path(self.schema.as_deref());
        let schema = Schema::from_file(&path).unwrap_or_exit();

        // Normalization errors would only surface at generation time
        let declarations = lower(&schema).wrap_err("Schema cannot be compiled")?;

        let diagnostics = lint(&schema);
        for diag in &diagnostics {
            let line = format!("{}: {}", diag.severity, diag.message);
            let location = diag.location.as_deref().map(|loc| format!("  --> {}", loc));
            if diag.severity == Severity::Info {
                println!("{}", line);
                location.iter().for_each(|loc| println!("{}", loc));
            } else {
                eprintln!("{}", line);
                location.iter().for_each(|loc| eprintln!("{}", loc));
            }
        }

        let has_errors = diagnostics.iter().any(|d| d.severity == Severity::Error);
        let has_warnings = diagnostics.iter().any(|d| d.severity == Severity::Warning);

        if has_errors {
            std::process::exit(1);
        }

        if has_warnings {
            println!();
        }

        println!("✓ {} is valid\n", path.display());

        let count = declarations.len();
        println!("  {} node{}:", count, if count == 1 { "" } else { "s" });
        println!(
            "{}",
            SchemaTreeDisplay::new(&schema)
                .style(DisplayStyle::Simple)
                .indent("    ")
        );

        Ok(())
    }
}
