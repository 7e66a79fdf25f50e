//! Errors surfaced by code generators.

use miette::Diagnostic;
use thiserror::Error;

/// A generator failure, tagged with the document and the generator it came from.
///
/// Displayed as `<generator>: <doc_name>: <message>`; diagnostic codes and
/// help come from the underlying [`GenerateFailure`].
#[derive(Debug, Error, Diagnostic)]
#[error("{generator}: {doc_name}: {kind}")]
#[diagnostic(forward(kind))]
pub struct GeneratorError {
    /// Name of the source document being generated.
    pub doc_name: String,
    /// Identifier of the generator (e.g. `go`).
    pub generator: &'static str,
    pub kind: GenerateFailure,
}

impl GeneratorError {
    pub fn new(
        doc_name: impl Into<String>,
        generator: &'static str,
        kind: impl Into<GenerateFailure>,
    ) -> Self {
        Self {
            doc_name: doc_name.into(),
            generator,
            kind: kind.into(),
        }
    }

    /// Returns true if generation was rejected during option resolution.
    pub fn is_option_error(&self) -> bool {
        matches!(self.kind, GenerateFailure::Options(_))
    }

    /// Returns true if the output sink failed.
    pub fn is_sink_error(&self) -> bool {
        matches!(self.kind, GenerateFailure::Sink { .. })
    }
}

/// The two ways a generation call can fail.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateFailure {
    /// Options could not be resolved; nothing was emitted.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Options(#[from] OptionError),

    /// The output sink failed to open or accept the generated bytes.
    #[error("failed to write '{file}': {source}")]
    #[diagnostic(code(quill::sink))]
    Sink {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

/// Invalid generator options, from a document directive or the invocation.
#[derive(Debug, Error, Diagnostic)]
pub enum OptionError {
    #[error("invalid boolean '{value}' for option '{option}'")]
    #[diagnostic(
        code(quill::options::invalid_bool),
        help("accepted values are true/false, True/False, TRUE/FALSE, t/f, T/F and 1/0")
    )]
    InvalidBool { option: String, value: String },

    #[error("option '{option}' must be {expected}")]
    #[diagnostic(code(quill::options::unexpected_value))]
    UnexpectedValue {
        option: String,
        expected: &'static str,
    },

    #[error("malformed generator options: {source}")]
    #[diagnostic(
        code(quill::options::malformed),
        help("options must be a JSON object, e.g. {{\"package\": \"api\", \"descriptions\": true}}")
    )]
    Malformed {
        #[source]
        source: serde_json::Error,
    },

    #[error("option '{option}' must not be empty")]
    #[diagnostic(code(quill::options::empty))]
    Empty { option: String },
}
