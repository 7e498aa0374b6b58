use serde::{Deserialize, Serialize};

use crate::NodeId;

/// One attribute inside a specifier. The argument clause is kept as raw
/// token text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(default)]
    pub scope: Option<String>,
    pub name: String,
    #[serde(default)]
    pub argument: Option<String>,
    #[serde(default)]
    pub is_pack_expansion: bool,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scope: None,
            name: name.into(),
            argument: None,
            is_pack_expansion: false,
        }
    }

    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.argument = Some(argument.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeSpecifier {
    /// `[[...]]`
    Cpp(Vec<Attribute>),
    /// `__attribute__((...))`
    Gcc(Vec<Attribute>),
    /// `alignas(...)` over an expression or a type-id.
    Alignas { argument: NodeId },
}

impl AttributeSpecifier {
    pub fn is_gcc(&self) -> bool {
        matches!(self, AttributeSpecifier::Gcc(_))
    }
}
