//! Generate report.

use std::path::PathBuf;

use quill_codegen::PreviewFile;

use super::output::{Output, Report};

/// Outcome of a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    pub doc_name: String,
    pub declarations: usize,
    pub result: GenerationResult,
}

#[derive(Debug)]
pub enum GenerationResult {
    /// Dry run: the file that would be written.
    Preview(PreviewFile),
    /// Path of the written file.
    Written(PathBuf),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Preview(file) => {
                out.divider(&file.path);
                out.preformatted(&file.content);
                out.divider("Summary");
                out.key_value("Declarations", &self.declarations.to_string());
                out.key_value("Would write", &file.path);
            }
            GenerationResult::Written(path) => {
                out.key_value("Source", &self.doc_name);
                out.key_value("Declarations", &self.declarations.to_string());
                out.key_value("Generated", &path.display().to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::RecordingOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            doc_name: "todo.gql".to_string(),
            declarations: 3,
            result: GenerationResult::Written(PathBuf::from("out/todo.go")),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            ["Source: todo.gql", "Declarations: 3", "Generated: out/todo.go"]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            doc_name: "todo.gql".to_string(),
            declarations: 0,
            result: GenerationResult::Preview(PreviewFile {
                path: "todo.go".to_string(),
                content: "package main\n".to_string(),
            }),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "── todo.go ──",
                "package main\n",
                "── Summary ──",
                "Declarations: 0",
                "Would write: todo.go",
            ]
        );
    }
}
