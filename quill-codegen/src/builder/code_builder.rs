//! Code builder utility for generating properly indented code.

use super::Indent;

/// Indent-aware text accumulator.
///
/// Line-oriented writes (`push_line`, `push_indented`) start with the current
/// indentation; raw writes append text as-is. A builder can be [`reset`] and
/// reused, which clears both its content and its indentation depth.
///
/// # Example
///
/// ```
/// use quill_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::go();
/// builder
///     .push_line("func main() {")
///     .push_indent()
///     .push_line("println(\"hello\")")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.as_str(), "func main() {\n\tprintln(\"hello\")\n}\n");
/// ```
///
/// [`reset`]: CodeBuilder::reset
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with tab indentation (Go default).
    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add the current indentation followed by `s`, without a newline.
    ///
    /// Used to start a line whose tail is produced by another writer.
    pub fn push_indented(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Add a single character.
    pub fn push_char(&mut self, c: char) -> &mut Self {
        self.buffer.push(c);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level. No-op at level zero.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Clear the content and indentation, keeping the allocation.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.indent_level = 0;
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::go()
    }
}
