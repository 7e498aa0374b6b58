//! Syntax tree types consumed by astwriter.
//!
//! The tree is an arena ([`Ast`]) of [`NodeData`] slots addressed by
//! [`NodeId`]. A parser, a rewrite engine or a JSON [`AstDocument`] fills the
//! arena; the writer only reads it.
//!
//! # Architecture
//!
//! ```text
//! parser / rewrite engine → astwriter-ast (arena + lookups) → astwriter → source text
//! ```
//!
//! Besides the nodes themselves this crate defines the collaborator
//! interfaces the writer consults: comments ([`NodeCommentMap`]), pending
//! rewrites ([`ModificationLookup`]) and the macro index
//! ([`MacroIndexLookup`]).

mod arena;
mod builder;
mod comments;
mod document;
mod error;
mod id;
mod location;
mod macros;
mod node;
mod rewrite;

pub use arena::{Ast, NodeData};
pub use comments::{CommentPlacement, CommentRecord, NodeCommentMap, is_line_comment};
pub use document::AstDocument;
pub use error::{AstError, Result};
pub use id::NodeId;
pub use location::{FileLocation, MacroExpansionSpan, NodeLocation};
pub use macros::{MacroIndexLookup, MacroReference, StaticMacroIndex};
pub use node::*;
pub use rewrite::{ModificationLookup, ModificationMap, ModificationRecord, Rewrite};
