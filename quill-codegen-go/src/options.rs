//! Resolution of Go generator options.
//!
//! Precedence, lowest to highest: defaults, the document's `@go(...)`
//! directive, then the invocation option blob (JSON).

use quill_ast::Document;
use quill_codegen::{
    OptionError,
    options::{literal_bool, literal_text, strip_quotes, visit_directive_options},
};
use serde::Deserialize;
use tracing::debug;

/// Package used when neither the document nor the invocation names one.
pub const DEFAULT_PACKAGE: &str = "main";

/// Options controlling Go emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Go package clause of the generated file.
    pub package: String,
    /// Copy schema descriptions into `Description:` entries.
    pub descriptions: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            descriptions: false,
        }
    }
}

/// Invocation overlay; absent keys leave the current value alone.
#[derive(Debug, Default, Deserialize)]
struct Overlay {
    package: Option<String>,
    descriptions: Option<bool>,
}

impl GeneratorOptions {
    /// Resolve options for `doc`, applying the `directive` named options and
    /// then the invocation blob `overlay` (ignored when empty).
    pub fn resolve(doc: &Document, directive: &str, overlay: &str) -> Result<Self, OptionError> {
        let mut opts = Self::default();

        visit_directive_options(doc, directive, |key, value| {
            match key {
                "package" => opts.package = literal_text(key, value)?.to_string(),
                "descriptions" => opts.descriptions = literal_bool(key, value)?,
                _ => debug!(option = key, "ignoring unknown option"),
            }
            Ok(())
        })?;

        if !overlay.is_empty() {
            let overlay: Overlay = serde_json::from_str(overlay)
                .map_err(|source| OptionError::Malformed { source })?;
            if let Some(package) = overlay.package {
                opts.package = package;
            }
            if let Some(descriptions) = overlay.descriptions {
                opts.descriptions = descriptions;
            }
        }

        opts.package = strip_quotes(&opts.package).to_string();
        if opts.package.is_empty() {
            return Err(OptionError::Empty {
                option: "package".to_string(),
            });
        }

        debug!(
            package = %opts.package,
            descriptions = opts.descriptions,
            "resolved options"
        );
        Ok(opts)
    }
}
