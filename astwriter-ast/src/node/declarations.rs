use serde::{Deserialize, Serialize};

use super::{Problem, RefQualifier};
use crate::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionBody {
    #[default]
    Provided,
    Defaulted,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    #[serde(default)]
    pub attributes: Vec<NodeId>,
    pub decl_spec: NodeId,
    pub declarator: NodeId,
    #[serde(default)]
    pub member_initializers: Vec<NodeId>,
    #[serde(default)]
    pub body_kind: FunctionBody,
    /// Compound statement, absent for `= default` / `= delete`.
    #[serde(default)]
    pub body: Option<NodeId>,
    /// Catch handlers of a function-try-block.
    #[serde(default)]
    pub catch_handlers: Option<Vec<NodeId>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstantiationModifier {
    Extern,
    Static,
    Inline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Declaration {
    Simple {
        #[serde(default)]
        attributes: Vec<NodeId>,
        decl_spec: NodeId,
        #[serde(default)]
        declarators: Vec<NodeId>,
    },
    FunctionDefinition(FunctionDefinition),
    Asm {
        assembly: String,
    },
    Namespace {
        /// Empty simple name for anonymous namespaces.
        name: NodeId,
        #[serde(default)]
        declarations: Vec<NodeId>,
        #[serde(default)]
        is_inline: bool,
    },
    NamespaceAlias {
        alias: NodeId,
        target: NodeId,
    },
    Template {
        parameters: Vec<NodeId>,
        declaration: NodeId,
        #[serde(default)]
        is_exported: bool,
    },
    TemplateSpecialization {
        declaration: NodeId,
    },
    ExplicitInstantiation {
        declaration: NodeId,
        #[serde(default)]
        modifier: Option<InstantiationModifier>,
    },
    Linkage {
        /// Quoted literal, e.g. `"C"`.
        literal: String,
        #[serde(default)]
        declarations: Vec<NodeId>,
    },
    UsingDeclaration {
        name: NodeId,
        #[serde(default)]
        is_typename: bool,
    },
    UsingDirective {
        name: NodeId,
    },
    Alias {
        alias: NodeId,
        type_id: NodeId,
        #[serde(default)]
        attributes: Vec<NodeId>,
    },
    VisibilityLabel(Visibility),
    StaticAssert {
        condition: NodeId,
        #[serde(default)]
        message: Option<NodeId>,
    },
    StructuredBinding {
        decl_spec: NodeId,
        #[serde(default)]
        ref_qualifier: Option<RefQualifier>,
        names: Vec<NodeId>,
        #[serde(default)]
        initializer: Option<NodeId>,
    },
    Problem(Problem),
}

impl Declaration {
    pub(crate) fn children(&self) -> Vec<NodeId> {
        match self {
            Declaration::Simple {
                attributes,
                decl_spec,
                declarators,
            } => attributes
                .iter()
                .copied()
                .chain([*decl_spec])
                .chain(declarators.iter().copied())
                .collect(),
            Declaration::FunctionDefinition(definition) => {
                let mut children = definition.attributes.clone();
                children.push(definition.decl_spec);
                children.push(definition.declarator);
                children.extend(&definition.member_initializers);
                children.extend(definition.body);
                children.extend(definition.catch_handlers.iter().flatten());
                children
            }
            Declaration::Asm { .. } | Declaration::VisibilityLabel(_) | Declaration::Problem(_) => {
                Vec::new()
            }
            Declaration::Namespace {
                name, declarations, ..
            } => [*name]
                .into_iter()
                .chain(declarations.iter().copied())
                .collect(),
            Declaration::NamespaceAlias { alias, target } => vec![*alias, *target],
            Declaration::Template {
                parameters,
                declaration,
                ..
            } => parameters.iter().copied().chain([*declaration]).collect(),
            Declaration::TemplateSpecialization { declaration }
            | Declaration::ExplicitInstantiation { declaration, .. } => vec![*declaration],
            Declaration::Linkage { declarations, .. } => declarations.clone(),
            Declaration::UsingDeclaration { name, .. } | Declaration::UsingDirective { name } => {
                vec![*name]
            }
            Declaration::Alias {
                alias,
                type_id,
                attributes,
            } => [*alias]
                .into_iter()
                .chain(attributes.iter().copied())
                .chain([*type_id])
                .collect(),
            Declaration::StaticAssert { condition, message } => {
                [*condition].into_iter().chain(*message).collect()
            }
            Declaration::StructuredBinding {
                decl_spec,
                names,
                initializer,
                ..
            } => [*decl_spec]
                .into_iter()
                .chain(names.iter().copied())
                .chain(*initializer)
                .collect(),
        }
    }
}
