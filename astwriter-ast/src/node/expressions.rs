use serde::{Deserialize, Serialize};

use super::Problem;
use crate::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOperator {
    Multiply,
    Divide,
    Modulo,
    Plus,
    Minus,
    ShiftLeft,
    ShiftRight,
    LessThan,
    GreaterThan,
    LessEqual,
    GreaterEqual,
    ThreeWayComparison,
    BinaryAnd,
    BinaryXor,
    BinaryOr,
    LogicalAnd,
    LogicalOr,
    Assign,
    MultiplyAssign,
    DivideAssign,
    ModuloAssign,
    PlusAssign,
    MinusAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
    BinaryAndAssign,
    BinaryXorAssign,
    BinaryOrAssign,
    Equals,
    NotEquals,
    PointerToMemberObject,
    PointerToMemberPointer,
    /// GNU `>?`
    Max,
    /// GNU `<?`
    Min,
    /// Case range `1 ... 5`.
    Ellipses,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOperator {
    PrefixIncrement,
    PrefixDecrement,
    Plus,
    Minus,
    Star,
    Amper,
    Tilde,
    Not,
    Sizeof,
    SizeofParameterPack,
    BracketedPrimary,
    Throw,
    Typeid,
    Alignof,
    Noexcept,
    /// GNU `&&label`.
    LabelReference,
    PostfixIncrement,
    PostfixDecrement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastKind {
    CStyle,
    Dynamic,
    Static,
    Reinterpret,
    Const,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeIdOperator {
    Sizeof,
    SizeofParameterPack,
    Alignof,
    Typeid,
    Typeof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralKind {
    Integer,
    Float,
    Char,
    String,
    True,
    False,
    This,
    Nullptr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureDefault {
    ByCopy,
    ByReference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    Id {
        name: NodeId,
    },
    Literal {
        kind: LiteralKind,
        value: String,
    },
    Binary {
        operator: BinaryOperator,
        operand1: NodeId,
        operand2: NodeId,
    },
    Unary {
        operator: UnaryOperator,
        /// Absent only for a bare `throw`.
        #[serde(default)]
        operand: Option<NodeId>,
    },
    Cast {
        kind: CastKind,
        type_id: NodeId,
        operand: NodeId,
    },
    /// `positive` is absent for the GNU `a ?: b` form.
    Conditional {
        condition: NodeId,
        #[serde(default)]
        positive: Option<NodeId>,
        negative: NodeId,
    },
    FunctionCall {
        function: NodeId,
        #[serde(default)]
        arguments: Vec<NodeId>,
    },
    ArraySubscript {
        array: NodeId,
        argument: NodeId,
    },
    FieldReference {
        owner: NodeId,
        field: NodeId,
        #[serde(default)]
        is_pointer_dereference: bool,
        #[serde(default)]
        is_template: bool,
    },
    List {
        expressions: Vec<NodeId>,
    },
    TypeId {
        operator: TypeIdOperator,
        type_id: NodeId,
    },
    New {
        #[serde(default)]
        is_global: bool,
        #[serde(default)]
        placement: Option<Vec<NodeId>>,
        type_id: NodeId,
        /// `new int[5]` rather than `new (int)`.
        #[serde(default = "default_true")]
        is_new_type_id: bool,
        #[serde(default)]
        initializer: Option<NodeId>,
    },
    Delete {
        #[serde(default)]
        is_global: bool,
        #[serde(default)]
        is_vectored: bool,
        operand: NodeId,
    },
    /// `int(3)` or `T{a, b}`.
    SimpleTypeConstructor {
        decl_spec: NodeId,
        initializer: NodeId,
    },
    Lambda {
        #[serde(default)]
        capture_default: Option<CaptureDefault>,
        #[serde(default)]
        captures: Vec<NodeId>,
        #[serde(default)]
        declarator: Option<NodeId>,
        body: NodeId,
    },
    PackExpansion {
        pattern: NodeId,
    },
    Fold {
        operator: BinaryOperator,
        #[serde(default)]
        lhs: Option<NodeId>,
        #[serde(default)]
        rhs: Option<NodeId>,
    },
    /// GNU `({ ... })`.
    CompoundStatement {
        statement: NodeId,
    },
    Problem(Problem),
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// `None` captures `this`.
    #[serde(default)]
    pub name: Option<NodeId>,
    #[serde(default)]
    pub by_reference: bool,
    /// `*this`.
    #[serde(default)]
    pub is_star_this: bool,
    #[serde(default)]
    pub is_pack_expansion: bool,
    /// Init-capture, `x = expr`.
    #[serde(default)]
    pub initializer: Option<NodeId>,
}

impl Expression {
    pub(crate) fn children(&self) -> Vec<NodeId> {
        match self {
            Expression::Id { name } => vec![*name],
            Expression::Literal { .. } | Expression::Problem(_) => Vec::new(),
            Expression::Binary {
                operand1, operand2, ..
            } => vec![*operand1, *operand2],
            Expression::Unary { operand, .. } => operand.iter().copied().collect(),
            Expression::Cast {
                type_id, operand, ..
            } => vec![*type_id, *operand],
            Expression::Conditional {
                condition,
                positive,
                negative,
            } => [*condition]
                .into_iter()
                .chain(*positive)
                .chain([*negative])
                .collect(),
            Expression::FunctionCall {
                function,
                arguments,
            } => [*function]
                .into_iter()
                .chain(arguments.iter().copied())
                .collect(),
            Expression::ArraySubscript { array, argument } => vec![*array, *argument],
            Expression::FieldReference { owner, field, .. } => vec![*owner, *field],
            Expression::List { expressions } => expressions.clone(),
            Expression::TypeId { type_id, .. } => vec![*type_id],
            Expression::New {
                placement,
                type_id,
                initializer,
                ..
            } => placement
                .iter()
                .flatten()
                .copied()
                .chain([*type_id])
                .chain(*initializer)
                .collect(),
            Expression::Delete { operand, .. } => vec![*operand],
            Expression::SimpleTypeConstructor {
                decl_spec,
                initializer,
            } => vec![*decl_spec, *initializer],
            Expression::Lambda {
                captures,
                declarator,
                body,
                ..
            } => captures
                .iter()
                .copied()
                .chain(*declarator)
                .chain([*body])
                .collect(),
            Expression::PackExpansion { pattern } => vec![*pattern],
            Expression::Fold { lhs, rhs, .. } => lhs.iter().chain(rhs.iter()).copied().collect(),
            Expression::CompoundStatement { statement } => vec![*statement],
        }
    }
}
