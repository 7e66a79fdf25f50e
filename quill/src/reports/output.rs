//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        print!("{}", text);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Output;

    /// Output collecting rendered lines, for report tests.
    #[derive(Default)]
    pub struct RecordingOutput {
        pub lines: Vec<String>,
    }

    impl Output for RecordingOutput {
        fn key_value(&mut self, key: &str, value: &str) {
            self.lines.push(format!("{}: {}", key, value));
        }

        fn divider(&mut self, label: &str) {
            self.lines.push(format!("── {} ──", label));
        }

        fn preformatted(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }
    }
}
