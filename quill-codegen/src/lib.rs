//! Shared code generation utilities for the Quill schema compiler.
//!
//! This crate provides the language-agnostic pieces used by the
//! language-specific generators (e.g., `quill-codegen-go`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, TypeMapper, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, PreviewFile)
//! - [`options`] - Decoding of generator options embedded in documents
//! - [`GeneratorError`] - Errors surfaced by every generator

pub mod builder;
mod error;
pub mod language;
pub mod options;

pub use error::{GenerateFailure, GeneratorError, OptionError};
pub use language::{LanguageCodegen, PreviewFile};
