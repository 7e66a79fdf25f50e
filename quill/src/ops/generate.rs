//! Generate operation - Go code from a parsed schema document.

use std::{fs, path::Path};

use eyre::{Context, Result, bail};
use quill_ast::Document;
use quill_codegen::{GeneratorError, LanguageCodegen};
use quill_codegen_go::Generator;
use quill_core::DirSink;
use serde_json::{Map, Value};
use tracing::debug;

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Invocation option blob handed to the generator (JSON, possibly empty).
    pub overlay: &'a str,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Read a JSON schema document from disk.
pub fn load_document(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let doc: Document = serde_json::from_str(&text)
        .wrap_err_with(|| format!("Failed to parse schema document {}", path.display()))?;
    debug!(
        doc = %doc.name,
        declarations = doc.declarations.len(),
        "loaded document"
    );
    Ok(doc)
}

/// Combine `--options` with the `--package` and `--descriptions` flags.
///
/// Flags take precedence over keys in `options`. Without flags, `options`
/// is passed through untouched so the generator reports malformed input.
pub fn build_overlay(
    options: Option<&str>,
    package: Option<&str>,
    descriptions: bool,
) -> Result<String> {
    if package.is_none() && !descriptions {
        return Ok(options.unwrap_or_default().to_string());
    }

    let mut overlay = match options.filter(|s| !s.is_empty()) {
        Some(text) => match serde_json::from_str::<Value>(text).wrap_err("Invalid --options")? {
            Value::Object(map) => map,
            _ => bail!("--options must be a JSON object"),
        },
        None => Map::new(),
    };
    if let Some(package) = package {
        overlay.insert("package".to_string(), Value::from(package));
    }
    if descriptions {
        overlay.insert("descriptions".to_string(), Value::Bool(true));
    }
    Ok(Value::Object(overlay).to_string())
}

/// Execute the generate operation.
pub fn generate(doc: &Document, opts: GenerateOptions) -> Result<GenerateReport, GeneratorError> {
    let generator = Generator::new();

    let result = if opts.dry_run {
        GenerationResult::Preview(generator.preview(doc, opts.overlay)?)
    } else {
        let mut sink = DirSink::new(opts.output_dir);
        generator.generate(doc, opts.overlay, &mut sink)?;
        GenerationResult::Written(sink.path_of(&generator.output_name(doc)))
    };

    Ok(GenerateReport {
        doc_name: doc.name.clone(),
        declarations: doc.declarations.len(),
        result,
    })
}
