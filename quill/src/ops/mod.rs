//! Core operations behind the CLI commands.
//!
//! Operations return reports and errors; rendering is left to the caller.

mod generate;

pub use generate::{GenerateOptions, build_overlay, generate, load_document};
