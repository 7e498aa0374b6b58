use miette::Diagnostic;
use thiserror::Error;

use crate::NodeId;

/// Result type for tree operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<AstError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum AstError {
    #[error("failed to decode syntax tree document")]
    #[diagnostic(
        code(astwriter::ast::json),
        help("unknown node kinds or enum values are rejected rather than guessed")
    )]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("node {node} references {reference}, which is not in the arena")]
    #[diagnostic(code(astwriter::ast::dangling_reference))]
    DanglingReference { node: NodeId, reference: NodeId },

    #[error("root {root} is not in the arena of {len} nodes")]
    #[diagnostic(code(astwriter::ast::missing_root))]
    MissingRoot { root: NodeId, len: usize },
}
