//! Indentation configuration for code generation.

/// Indentation unit for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Tab character.
    Tab,
    /// Spaces with the specified width.
    Spaces(u8),
}

impl Indent {
    /// Tab indentation, as `gofmt` writes it.
    pub const GO: Self = Self::Tab;

    /// The text for one indent level.
    pub fn as_str(&self) -> &'static str {
        const SPACES: &str = "        ";
        match self {
            Self::Tab => "\t",
            Self::Spaces(n) => &SPACES[..usize::from(*n).min(SPACES.len())],
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::GO
    }
}
