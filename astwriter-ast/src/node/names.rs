use serde::{Deserialize, Serialize};

use crate::NodeId;

/// What a name resolved to, as far as rendering cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Binding {
    TemplateTypeParameter,
    TemplateTemplateParameter,
    ClassTemplate,
    Type,
    Variable,
    Function,
    Namespace,
}

impl Binding {
    pub fn is_template_parameter(self) -> bool {
        matches!(
            self,
            Binding::TemplateTypeParameter | Binding::TemplateTemplateParameter
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Name {
    /// A plain identifier. Operator and destructor names are stored verbatim
    /// (`operator +`, `~Widget`). An empty id is an abstract name.
    Simple {
        id: String,
        #[serde(default)]
        binding: Option<Binding>,
    },
    /// `a::b::c`, with `last` being `c`.
    Qualified {
        qualifiers: Vec<NodeId>,
        last: NodeId,
        #[serde(default)]
        fully_qualified: bool,
    },
    TemplateId {
        template_name: NodeId,
        #[serde(default)]
        arguments: Vec<NodeId>,
    },
    ConversionOperator {
        type_id: NodeId,
    },
}

impl Name {
    pub fn simple(id: impl Into<String>) -> Self {
        Name::Simple {
            id: id.into(),
            binding: None,
        }
    }

    pub(crate) fn children(&self) -> Vec<NodeId> {
        match self {
            Name::Simple { .. } => Vec::new(),
            Name::Qualified {
                qualifiers, last, ..
            } => qualifiers.iter().copied().chain([*last]).collect(),
            Name::TemplateId {
                template_name,
                arguments,
            } => [*template_name]
                .into_iter()
                .chain(arguments.iter().copied())
                .collect(),
            Name::ConversionOperator { type_id } => vec![*type_id],
        }
    }
}
