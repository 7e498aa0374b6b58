//! Syntax node categories.
//!
//! Every category is a closed enum (or a struct for single-shape categories).
//! Children are referenced by [`NodeId`] into the owning arena.

mod attributes;
mod declarations;
mod declarators;
mod expressions;
mod initializers;
mod names;
mod specifiers;
mod statements;
mod templates;

pub use attributes::{Attribute, AttributeSpecifier};
pub use declarations::{
    Declaration, FunctionBody, FunctionDefinition, InstantiationModifier, Visibility,
};
pub use declarators::{
    ArrayModifier, ArrayQualifiers, Declarator, DeclaratorKind, FunctionDeclarator, Noexcept,
    ParameterDeclaration, PointerKind, PointerOperator, PointerQualifiers, RefQualifier, TypeId,
    VirtSpecifier,
};
pub use expressions::{
    BinaryOperator, CastKind, Capture, CaptureDefault, Expression, LiteralKind, TypeIdOperator,
    UnaryOperator,
};
pub use initializers::{Designator, Initializer};
pub use names::{Binding, Name};
use serde::{Deserialize, Serialize};
pub use specifiers::{
    BaseSpecifier, CompositeKey, CompositeType, DeclSpecKind, DeclSpecifier, ElaboratedKind,
    EnumScope, EnumerationType, Enumerator, SimpleDeclSpec, SimpleType, SpecifierFlags,
    StorageClass,
};
pub use statements::Statement;
pub use templates::{TemplateParameter, TypeParameterKey};

use crate::NodeId;

/// Parser error placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub message: String,
}

impl Problem {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDefinition {
    pub name: String,
    #[serde(default)]
    pub expansion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeDirective {
    /// Resolved path of the included file.
    pub path: String,
    #[serde(default)]
    pub is_system: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationUnit {
    pub file_name: String,
    #[serde(default)]
    pub declarations: Vec<NodeId>,
    #[serde(default)]
    pub macro_definitions: Vec<MacroDefinition>,
    #[serde(default)]
    pub includes: Vec<IncludeDirective>,
}

impl TranslationUnit {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            declarations: Vec::new(),
            macro_definitions: Vec::new(),
            includes: Vec::new(),
        }
    }

    /// The unit's own file plus every non-system include.
    pub fn reachable_files(&self) -> Vec<&str> {
        std::iter::once(self.file_name.as_str())
            .chain(
                self.includes
                    .iter()
                    .filter(|include| !include.is_system)
                    .map(|include| include.path.as_str()),
            )
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    TranslationUnit(TranslationUnit),
    /// Synthetic wrapper for rendering several siblings at once.
    Container(Vec<NodeId>),
    /// Literal source text emitted as is.
    Literal(String),
    Name(Name),
    DeclSpecifier(DeclSpecifier),
    Declarator(Declarator),
    Declaration(Declaration),
    Initializer(Initializer),
    Expression(Expression),
    Statement(Statement),
    ArrayModifier(ArrayModifier),
    PointerOperator(PointerOperator),
    ParameterDeclaration(ParameterDeclaration),
    AttributeSpecifier(AttributeSpecifier),
    TemplateParameter(TemplateParameter),
    TypeId(TypeId),
    Enumerator(Enumerator),
    BaseSpecifier(BaseSpecifier),
    Designator(Designator),
    Capture(Capture),
    Problem(Problem),
}

impl Node {
    /// Human readable category, used in diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            Node::TranslationUnit(_) => "translation unit",
            Node::Container(_) => "container",
            Node::Literal(_) => "literal",
            Node::Name(_) => "name",
            Node::DeclSpecifier(_) => "decl-specifier",
            Node::Declarator(_) => "declarator",
            Node::Declaration(_) => "declaration",
            Node::Initializer(_) => "initializer",
            Node::Expression(_) => "expression",
            Node::Statement(_) => "statement",
            Node::ArrayModifier(_) => "array modifier",
            Node::PointerOperator(_) => "pointer operator",
            Node::ParameterDeclaration(_) => "parameter declaration",
            Node::AttributeSpecifier(_) => "attribute specifier",
            Node::TemplateParameter(_) => "template parameter",
            Node::TypeId(_) => "type-id",
            Node::Enumerator(_) => "enumerator",
            Node::BaseSpecifier(_) => "base specifier",
            Node::Designator(_) => "designator",
            Node::Capture(_) => "capture",
            Node::Problem(_) => "problem",
        }
    }

    /// The parser error carried by this node, whatever its category.
    pub fn as_problem(&self) -> Option<&Problem> {
        match self {
            Node::Problem(problem)
            | Node::Declaration(Declaration::Problem(problem))
            | Node::Expression(Expression::Problem(problem))
            | Node::Statement(Statement::Problem(problem)) => Some(problem),
            _ => None,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            Node::TranslationUnit(unit) => unit.declarations.clone(),
            Node::Container(children) => children.clone(),
            Node::Literal(_) | Node::Problem(_) => Vec::new(),
            Node::Name(name) => name.children(),
            Node::DeclSpecifier(spec) => spec.children(),
            Node::Declarator(declarator) => declarator.children(),
            Node::Declaration(declaration) => declaration.children(),
            Node::Initializer(initializer) => initializer.children(),
            Node::Expression(expression) => expression.children(),
            Node::Statement(statement) => statement.children(),
            Node::ArrayModifier(modifier) => modifier
                .expression
                .iter()
                .chain(modifier.attributes.iter())
                .copied()
                .collect(),
            Node::PointerOperator(operator) => {
                let mut children = operator.attributes.clone();
                if let PointerKind::PointerToMember { class_name } = operator.kind {
                    children.insert(0, class_name);
                }
                children
            }
            Node::ParameterDeclaration(parameter) => {
                vec![parameter.decl_spec, parameter.declarator]
            }
            Node::AttributeSpecifier(specifier) => match specifier {
                AttributeSpecifier::Alignas { argument } => vec![*argument],
                AttributeSpecifier::Cpp(_) | AttributeSpecifier::Gcc(_) => Vec::new(),
            },
            Node::TemplateParameter(parameter) => parameter.children(),
            Node::TypeId(type_id) => [type_id.decl_spec]
                .into_iter()
                .chain(type_id.declarator)
                .collect(),
            Node::Enumerator(enumerator) => [enumerator.name]
                .into_iter()
                .chain(enumerator.value)
                .collect(),
            Node::BaseSpecifier(base) => vec![base.name],
            Node::Designator(designator) => designator.children(),
            Node::Capture(capture) => capture
                .name
                .iter()
                .chain(capture.initializer.iter())
                .copied()
                .collect(),
        }
    }
}

macro_rules! impl_from_category {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::$variant(value)
                }
            }
        )*
    };
}

impl_from_category! {
    TranslationUnit => TranslationUnit,
    Name => Name,
    DeclSpecifier => DeclSpecifier,
    Declarator => Declarator,
    Declaration => Declaration,
    Initializer => Initializer,
    Expression => Expression,
    Statement => Statement,
    ArrayModifier => ArrayModifier,
    PointerOperator => PointerOperator,
    ParameterDeclaration => ParameterDeclaration,
    AttributeSpecifier => AttributeSpecifier,
    TemplateParameter => TemplateParameter,
    TypeId => TypeId,
    Enumerator => Enumerator,
    BaseSpecifier => BaseSpecifier,
    Designator => Designator,
    Capture => Capture,
    Problem => Problem,
}
