//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Indent-aware text accumulator
//! - [`Indent`] - Indentation configuration
//! - [`TypeMapper`] - Trait rendering schema type references for a target language

mod code_builder;
mod indent;
mod types;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use types::TypeMapper;
