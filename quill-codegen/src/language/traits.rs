//! Language-agnostic code generation traits.

use std::io::{self, Write};

use quill_ast::Document;
use quill_core::{OutputSink, output_file_name};
use tracing::debug;

use crate::{GenerateFailure, GeneratorError};

/// Trait for language-specific code generators.
///
/// A generator turns one [`Document`] into one output file. `options` is the
/// invocation option blob (JSON text, possibly empty); how it combines with
/// options embedded in the document is up to the generator.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "go"). Also names the option directive.
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "go")
    fn file_extension(&self) -> &'static str;

    /// Name of the output produced for `doc`.
    fn output_name(&self, doc: &Document) -> String {
        output_file_name(&doc.name, self.file_extension())
    }

    /// Render `doc` without writing anything.
    fn preview(&self, doc: &Document, options: &str) -> Result<PreviewFile, GeneratorError>;

    /// Render `doc` and write it to `sink`.
    fn generate(
        &self,
        doc: &Document,
        options: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<(), GeneratorError>;
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Output name relative to the sink root
    pub path: String,
    /// File content
    pub content: String,
}

/// Open `name` on `sink` and write `bytes` to it.
///
/// Open, write, and flush failures are all reported as
/// [`GenerateFailure::Sink`].
pub fn write_output(
    sink: &mut dyn OutputSink,
    name: &str,
    bytes: &[u8],
) -> Result<(), GenerateFailure> {
    let to_failure = |source: io::Error| GenerateFailure::Sink {
        file: name.to_string(),
        source,
    };

    let mut out = sink.open(name).map_err(to_failure)?;
    out.write_all(bytes).map_err(to_failure)?;
    out.flush().map_err(to_failure)?;
    debug!(file = name, bytes = bytes.len(), "wrote output");
    Ok(())
}
