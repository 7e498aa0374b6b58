use serde::{Deserialize, Serialize};

use super::Visibility;
use crate::NodeId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageClass {
    #[default]
    Unspecified,
    Typedef,
    Extern,
    Static,
    Auto,
    Register,
    Mutable,
}

/// Qualifier and function-specifier keywords shared by every decl-specifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecifierFlags {
    pub is_const: bool,
    pub is_volatile: bool,
    pub is_restrict: bool,
    pub is_inline: bool,
    pub is_virtual: bool,
    pub is_explicit: bool,
    pub is_friend: bool,
    pub is_constexpr: bool,
    pub is_thread_local: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclSpecifier {
    #[serde(default)]
    pub storage_class: StorageClass,
    #[serde(default)]
    pub flags: SpecifierFlags,
    #[serde(default)]
    pub attributes: Vec<NodeId>,
    pub kind: DeclSpecKind,
}

impl DeclSpecifier {
    pub fn new(kind: DeclSpecKind) -> Self {
        Self {
            storage_class: StorageClass::Unspecified,
            flags: SpecifierFlags::default(),
            attributes: Vec::new(),
            kind,
        }
    }

    /// True for the implicit type of e.g. constructors and K&R `main()`.
    pub fn is_unspecified_type(&self) -> bool {
        matches!(&self.kind, DeclSpecKind::Simple(simple) if simple.ty == SimpleType::Unspecified)
    }

    pub(crate) fn children(&self) -> Vec<NodeId> {
        let mut children = self.attributes.clone();
        match &self.kind {
            DeclSpecKind::Simple(simple) => children.extend(simple.declared_type),
            DeclSpecKind::Named { name, .. } | DeclSpecKind::Elaborated { name, .. } => {
                children.push(*name)
            }
            DeclSpecKind::Composite(composite) => {
                children.push(composite.name);
                children.extend(&composite.bases);
                children.extend(&composite.members);
            }
            DeclSpecKind::Enumeration(enumeration) => {
                children.push(enumeration.name);
                children.extend(enumeration.base_type);
                children.extend(&enumeration.enumerators);
            }
        }
        children
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclSpecKind {
    Simple(SimpleDeclSpec),
    /// A type named by an identifier, optionally `typename`-prefixed.
    Named {
        name: NodeId,
        #[serde(default)]
        typename: bool,
    },
    Elaborated {
        kind: ElaboratedKind,
        name: NodeId,
    },
    Composite(CompositeType),
    Enumeration(EnumerationType),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimpleType {
    #[default]
    Unspecified,
    Void,
    Char,
    WChar,
    Char8,
    Char16,
    Char32,
    Int,
    Float,
    Double,
    Bool,
    /// C `_Bool`.
    CBool,
    Int128,
    Float128,
    Decimal32,
    Decimal64,
    Decimal128,
    Auto,
    Typeof,
    Decltype,
    DecltypeAuto,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleDeclSpec {
    pub ty: SimpleType,
    pub is_signed: bool,
    pub is_unsigned: bool,
    pub is_short: bool,
    pub is_long: bool,
    pub is_long_long: bool,
    pub is_complex: bool,
    pub is_imaginary: bool,
    /// Operand of `typeof(...)` / `decltype(...)`.
    pub declared_type: Option<NodeId>,
}

impl SimpleDeclSpec {
    pub fn new(ty: SimpleType) -> Self {
        Self {
            ty,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElaboratedKind {
    Enum,
    Struct,
    Union,
    Class,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeKey {
    Struct,
    Union,
    Class,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeType {
    pub key: CompositeKey,
    /// Empty simple name for anonymous types.
    pub name: NodeId,
    #[serde(default)]
    pub bases: Vec<NodeId>,
    #[serde(default)]
    pub members: Vec<NodeId>,
    #[serde(default)]
    pub is_final: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumScope {
    Class,
    Struct,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationType {
    pub name: NodeId,
    #[serde(default)]
    pub scope: Option<EnumScope>,
    #[serde(default)]
    pub base_type: Option<NodeId>,
    #[serde(default)]
    pub enumerators: Vec<NodeId>,
    /// `enum class E : int;` without a body.
    #[serde(default)]
    pub is_opaque: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enumerator {
    pub name: NodeId,
    #[serde(default)]
    pub value: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSpecifier {
    pub name: NodeId,
    #[serde(default)]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub is_pack_expansion: bool,
}
