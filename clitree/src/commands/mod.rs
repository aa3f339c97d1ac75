mod check;
mod compile;
mod completions;
mod export;
mod new;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use compile::CompileCommand;
use completions::CompletionsCommand;
use eyre::Result;
use export::ExportCommand;
use new::NewCommand;

use crate::config::Config;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for clitree_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "clitree")]
#[command(version)]
#[command(about = "Compile command-tree schemas into Click CLIs")]
pub(crate) struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to clitree.toml (defaults to ./clitree.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;

        match &self.command {
            Commands::New(cmd) => cmd.run(&config),
            Commands::Check(cmd) => cmd.run(&config),
            Commands::Compile(cmd) => cmd.run(&config),
            Commands::Export(cmd) => cmd.run(&config),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Click project from a schema
    New(NewCommand),

    /// Validate a schema without generating anything
    Check(CheckCommand),

    /// Preview the generated files
    Compile(CompileCommand),

    /// Reflect a command tree into a schema descriptor
    Export(ExportCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["clitree", "check", "-v", "--config", "x.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn test_new_requires_no_flags() {
        let cli = Cli::try_parse_from(["clitree", "new", "cat"]).unwrap();
        assert!(matches!(cli.command, Commands::New(_)));
    }
}
