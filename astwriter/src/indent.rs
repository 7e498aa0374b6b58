//! Indentation unit.

use serde::{Deserialize, Serialize};

/// Whitespace written once per indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Four spaces, the unit callers expect by default.
    pub const DEFAULT: Self = Self::Spaces(4);

    /// Append `level` indentation units to `buffer`.
    pub fn write_to(&self, buffer: &mut String, level: usize) {
        match self {
            Self::Spaces(width) => {
                buffer.extend(std::iter::repeat_n(' ', level * usize::from(*width)))
            }
            Self::Tab => buffer.extend(std::iter::repeat_n('\t', level)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::DEFAULT
    }
}
