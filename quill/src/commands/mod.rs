mod completions;
mod generate;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use quill_codegen::GeneratorError;

/// Extension trait for exiting on generator errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for Result<T, GeneratorError> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "quill")]
#[command(version)]
#[command(about = "Generate graphql-go type definitions from GraphQL schema documents")]
pub(crate) struct Cli {
    /// Log generator activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Go code from a parsed schema document (JSON)
    Generate(GenerateCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
