//! Indentation configuration for code generation.

use tagsmith_manifest::IndentStyle;

const SPACES: &str = "        ";

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (1 to 8).
    Spaces(u8),
    /// Tab character.
    #[default]
    Tab,
}

impl Indent {
    /// 4-space indentation (Visual Studio default for C#).
    pub const FOUR: Self = Self::Spaces(4);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(n @ 1..=8) => &SPACES[..usize::from(*n)],
            // Fallback to 4 whitespaces
            Self::Spaces(_) => &SPACES[..4],
            Self::Tab => "\t",
        }
    }
}

impl From<IndentStyle> for Indent {
    fn from(style: IndentStyle) -> Self {
        match style {
            IndentStyle::Tab => Indent::Tab,
            IndentStyle::Spaces(n) => Indent::Spaces(n),
        }
    }
}
