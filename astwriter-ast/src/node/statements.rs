use serde::{Deserialize, Serialize};

use super::Problem;
use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    Compound {
        #[serde(default)]
        statements: Vec<NodeId>,
    },
    Expression {
        expression: NodeId,
    },
    Declaration {
        declaration: NodeId,
    },
    Null,
    Return {
        #[serde(default)]
        value: Option<NodeId>,
    },
    Goto {
        label: NodeId,
    },
    Label {
        name: NodeId,
        nested: NodeId,
    },
    Case {
        expression: NodeId,
    },
    Default,
    Break,
    Continue,
    /// `condition` is an expression or a declaration node.
    If {
        #[serde(default)]
        is_constexpr: bool,
        #[serde(default)]
        init: Option<NodeId>,
        condition: NodeId,
        then_clause: NodeId,
        #[serde(default)]
        else_clause: Option<NodeId>,
    },
    Switch {
        #[serde(default)]
        init: Option<NodeId>,
        controller: NodeId,
        body: NodeId,
    },
    While {
        condition: NodeId,
        body: NodeId,
    },
    Do {
        body: NodeId,
        condition: NodeId,
    },
    For {
        #[serde(default)]
        init: Option<NodeId>,
        #[serde(default)]
        condition: Option<NodeId>,
        #[serde(default)]
        iteration: Option<NodeId>,
        body: NodeId,
    },
    RangeFor {
        declaration: NodeId,
        initializer: NodeId,
        body: NodeId,
    },
    Try {
        body: NodeId,
        handlers: Vec<NodeId>,
    },
    /// `declaration` is absent for `catch (...)`.
    CatchHandler {
        #[serde(default)]
        declaration: Option<NodeId>,
        body: NodeId,
    },
    Problem(Problem),
}

impl Statement {
    pub fn is_compound(&self) -> bool {
        matches!(self, Statement::Compound { .. })
    }

    pub(crate) fn children(&self) -> Vec<NodeId> {
        match self {
            Statement::Compound { statements } => statements.clone(),
            Statement::Expression { expression } => vec![*expression],
            Statement::Declaration { declaration } => vec![*declaration],
            Statement::Null
            | Statement::Default
            | Statement::Break
            | Statement::Continue
            | Statement::Problem(_) => Vec::new(),
            Statement::Return { value } => value.iter().copied().collect(),
            Statement::Goto { label } => vec![*label],
            Statement::Label { name, nested } => vec![*name, *nested],
            Statement::Case { expression } => vec![*expression],
            Statement::If {
                init,
                condition,
                then_clause,
                else_clause,
                ..
            } => init
                .iter()
                .copied()
                .chain([*condition, *then_clause])
                .chain(*else_clause)
                .collect(),
            Statement::Switch {
                init,
                controller,
                body,
            } => init.iter().copied().chain([*controller, *body]).collect(),
            Statement::While { condition, body } => vec![*condition, *body],
            Statement::Do { body, condition } => vec![*body, *condition],
            Statement::For {
                init,
                condition,
                iteration,
                body,
            } => init
                .iter()
                .chain(condition.iter())
                .chain(iteration.iter())
                .copied()
                .chain([*body])
                .collect(),
            Statement::RangeFor {
                declaration,
                initializer,
                body,
            } => vec![*declaration, *initializer, *body],
            Statement::Try { body, handlers } => {
                [*body].into_iter().chain(handlers.iter().copied()).collect()
            }
            Statement::CatchHandler { declaration, body } => {
                declaration.iter().copied().chain([*body]).collect()
            }
        }
    }
}
