use serde::{Deserialize, Serialize};

use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Initializer {
    /// `= clause`
    Equals { clause: NodeId },
    /// `{a, b}`
    List {
        #[serde(default)]
        clauses: Vec<NodeId>,
    },
    /// `(a, b)`
    Constructor {
        #[serde(default)]
        arguments: Vec<NodeId>,
    },
    /// `.x = 1` or `[2] = 3`
    Designated {
        designators: Vec<NodeId>,
        operand: NodeId,
    },
    /// Constructor chain entry `member(args)`.
    MemberInitializer {
        member: NodeId,
        initializer: NodeId,
        #[serde(default)]
        is_pack_expansion: bool,
    },
}

impl Initializer {
    pub(crate) fn children(&self) -> Vec<NodeId> {
        match self {
            Initializer::Equals { clause } => vec![*clause],
            Initializer::List { clauses } => clauses.clone(),
            Initializer::Constructor { arguments } => arguments.clone(),
            Initializer::Designated {
                designators,
                operand,
            } => designators.iter().copied().chain([*operand]).collect(),
            Initializer::MemberInitializer {
                member,
                initializer,
                ..
            } => vec![*member, *initializer],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Designator {
    Field { name: NodeId },
    Array { subscript: NodeId },
    /// GNU `[lo ... hi]`.
    ArrayRange { floor: NodeId, ceiling: NodeId },
}

impl Designator {
    pub(crate) fn children(&self) -> Vec<NodeId> {
        match *self {
            Designator::Field { name } => vec![name],
            Designator::Array { subscript } => vec![subscript],
            Designator::ArrayRange { floor, ceiling } => vec![floor, ceiling],
        }
    }
}
