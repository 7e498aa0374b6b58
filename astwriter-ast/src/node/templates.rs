use serde::{Deserialize, Serialize};

use crate::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeParameterKey {
    Class,
    Typename,
}

impl TypeParameterKey {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeParameterKey::Class => "class",
            TypeParameterKey::Typename => "typename",
        }
    }
}

/// Type and template-template parameters. Non-type parameters are
/// [`ParameterDeclaration`](super::ParameterDeclaration) nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateParameter {
    Type {
        key: TypeParameterKey,
        #[serde(default)]
        is_pack: bool,
        #[serde(default)]
        name: Option<NodeId>,
        #[serde(default)]
        default_type: Option<NodeId>,
    },
    Template {
        parameters: Vec<NodeId>,
        key: TypeParameterKey,
        #[serde(default)]
        is_pack: bool,
        #[serde(default)]
        name: Option<NodeId>,
        #[serde(default)]
        default_value: Option<NodeId>,
    },
}

impl TemplateParameter {
    pub(crate) fn children(&self) -> Vec<NodeId> {
        match self {
            TemplateParameter::Type {
                name, default_type, ..
            } => name.iter().chain(default_type.iter()).copied().collect(),
            TemplateParameter::Template {
                parameters,
                name,
                default_value,
                ..
            } => parameters
                .iter()
                .chain(name.iter())
                .chain(default_value.iter())
                .copied()
                .collect(),
        }
    }
}
