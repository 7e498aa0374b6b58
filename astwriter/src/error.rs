use astwriter_ast::{Ast, NodeId};
use miette::Diagnostic;
use thiserror::Error;

/// Result type for writer operations.
pub type Result<T> = std::result::Result<T, WriterError>;

#[derive(Debug, Error, Diagnostic)]
pub enum WriterError {
    #[error("tree contains a problem {category} at {node}: {message}")]
    #[diagnostic(
        code(astwriter::problem_node),
        help("repair or replace the node before writing the tree")
    )]
    ProblemNode {
        node: NodeId,
        category: &'static str,
        message: String,
    },

    #[error("expected a {expected} at {node}, found a {found}")]
    #[diagnostic(code(astwriter::unexpected_node))]
    UnexpectedNode {
        node: NodeId,
        expected: &'static str,
        found: &'static str,
    },
}

impl WriterError {
    pub fn problem(ast: &Ast, node: NodeId) -> Self {
        let data = ast.node(node);
        WriterError::ProblemNode {
            node,
            category: data.category(),
            message: data
                .as_problem()
                .map(|problem| problem.message.clone())
                .unwrap_or_default(),
        }
    }

    pub fn unexpected(ast: &Ast, node: NodeId, expected: &'static str) -> Self {
        WriterError::UnexpectedNode {
            node,
            expected,
            found: ast.node(node).category(),
        }
    }

    /// The node that made generation fail.
    pub fn node(&self) -> NodeId {
        match self {
            WriterError::ProblemNode { node, .. } | WriterError::UnexpectedNode { node, .. } => {
                *node
            }
        }
    }
}
