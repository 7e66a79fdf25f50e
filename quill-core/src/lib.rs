//! Core utilities for Quill code generators.
//!
//! This crate provides the output side of generation: the [`OutputSink`]
//! abstraction generators write through, a filesystem sink, an in-memory
//! sink, and output file naming.

mod file;

pub use file::{DirSink, MemorySink, OutputSink, output_file_name};
