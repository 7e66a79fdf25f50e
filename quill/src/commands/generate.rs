use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Parsed schema document (JSON)
    pub input: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Generator options as a JSON object, e.g. '{"package": "api"}'
    #[arg(long, value_name = "JSON")]
    pub options: Option<String>,

    /// Go package name (overrides --options and the document)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Copy schema descriptions into the generated code
    #[arg(long)]
    pub descriptions: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let doc = ops::load_document(&self.input)?;
        let overlay = ops::build_overlay(
            self.options.as_deref(),
            self.package.as_deref(),
            self.descriptions,
        )?;

        let report = ops::generate(
            &doc,
            GenerateOptions {
                output_dir: &self.output,
                overlay: &overlay,
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
