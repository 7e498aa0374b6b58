use serde::{Deserialize, Serialize};

use crate::NodeId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declarator {
    #[serde(default)]
    pub pointer_ops: Vec<NodeId>,
    /// `None` for lambda declarators.
    #[serde(default)]
    pub name: Option<NodeId>,
    /// Parenthesized inner declarator, as in `(*fp)(int)`.
    #[serde(default)]
    pub nested: Option<NodeId>,
    #[serde(default)]
    pub initializer: Option<NodeId>,
    #[serde(default)]
    pub attributes: Vec<NodeId>,
    #[serde(default)]
    pub is_pack_expansion: bool,
    #[serde(default)]
    pub kind: DeclaratorKind,
}

impl Declarator {
    pub fn named(name: NodeId) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(
            self.kind,
            DeclaratorKind::Function(_) | DeclaratorKind::KnRFunction { .. }
        )
    }

    pub(crate) fn children(&self) -> Vec<NodeId> {
        let mut children = self.pointer_ops.clone();
        children.extend(self.name);
        children.extend(self.nested);
        match &self.kind {
            DeclaratorKind::Plain => {}
            DeclaratorKind::Function(function) => {
                children.extend(&function.parameters);
                children.extend(function.exception_specification.iter().flatten());
                if let Some(Noexcept::Expression(expression)) = function.noexcept {
                    children.push(expression);
                }
                children.extend(&function.attributes);
                children.extend(function.trailing_return_type);
            }
            DeclaratorKind::KnRFunction {
                parameter_names,
                parameter_declarations,
            } => {
                children.extend(parameter_names);
                children.extend(parameter_declarations);
            }
            DeclaratorKind::Array { modifiers } => children.extend(modifiers),
            DeclaratorKind::Field { bit_width } => children.push(*bit_width),
        }
        children.extend(&self.attributes);
        children.extend(self.initializer);
        children
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclaratorKind {
    #[default]
    Plain,
    Function(FunctionDeclarator),
    /// Pre-ANSI `f(a, b) int a; char b;`.
    KnRFunction {
        parameter_names: Vec<NodeId>,
        parameter_declarations: Vec<NodeId>,
    },
    Array {
        modifiers: Vec<NodeId>,
    },
    /// Bit-field member.
    Field {
        bit_width: NodeId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefQualifier {
    LValue,
    RValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Noexcept {
    /// Bare `noexcept`.
    Unconditional,
    Expression(NodeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VirtSpecifier {
    Override,
    Final,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionDeclarator {
    pub parameters: Vec<NodeId>,
    pub takes_var_args: bool,
    pub is_const: bool,
    pub is_volatile: bool,
    pub ref_qualifier: Option<RefQualifier>,
    pub is_mutable: bool,
    /// Dynamic `throw(...)` list; `Some(vec![])` is `throw()`.
    pub exception_specification: Option<Vec<NodeId>>,
    pub noexcept: Option<Noexcept>,
    pub attributes: Vec<NodeId>,
    pub trailing_return_type: Option<NodeId>,
    pub virt_specifiers: Vec<VirtSpecifier>,
    pub is_pure_virtual: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayQualifiers {
    pub is_const: bool,
    pub is_restrict: bool,
    pub is_static: bool,
    pub is_volatile: bool,
    /// C99 `[*]`.
    pub is_variable_sized: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayModifier {
    #[serde(default)]
    pub expression: Option<NodeId>,
    #[serde(default)]
    pub qualifiers: ArrayQualifiers,
    #[serde(default)]
    pub attributes: Vec<NodeId>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerQualifiers {
    pub is_const: bool,
    pub is_volatile: bool,
    pub is_restrict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Pointer,
    /// `C::*`
    PointerToMember { class_name: NodeId },
    Reference,
    RValueReference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerOperator {
    pub kind: PointerKind,
    #[serde(default)]
    pub qualifiers: PointerQualifiers,
    #[serde(default)]
    pub attributes: Vec<NodeId>,
}

impl PointerOperator {
    pub fn new(kind: PointerKind) -> Self {
        Self {
            kind,
            qualifiers: PointerQualifiers::default(),
            attributes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDeclaration {
    pub decl_spec: NodeId,
    pub declarator: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeId {
    pub decl_spec: NodeId,
    #[serde(default)]
    pub declarator: Option<NodeId>,
    #[serde(default)]
    pub is_pack_expansion: bool,
}
