//! Writer configuration.

use serde::{Deserialize, Serialize};

use crate::Indent;

/// Formatting knobs, usually read from `astwriter.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterConfig {
    /// Unit written once per indentation level.
    pub indent: Indent,
    /// Text prepended to every non-empty output line.
    pub indent_prefix: Option<String>,
}

impl WriterConfig {
    pub fn with_indent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.indent_prefix = Some(prefix.into());
        self
    }
}
