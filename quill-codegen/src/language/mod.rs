//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`PreviewFile`] - Generated file preview
//! - [`write_output`] - Hand rendered bytes to an output sink

mod traits;

pub use traits::{LanguageCodegen, PreviewFile, write_output};
