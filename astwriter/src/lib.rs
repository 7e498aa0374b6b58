//! Source generation for C/C++ syntax trees.
//!
//! [`AstWriter`] turns a tree from [`astwriter_ast`] back into program text:
//!
//! ```text
//! AstWriter::write
//!   └── WriterVisitor        dispatch, comments, blank lines, rewrites
//!         ├── emit::*        one emitter per node category
//!         ├── Scribe         indentation-aware text buffer
//!         └── MacroExpansionHandler
//! ```
//!
//! Nodes produced by a macro expansion are printed as the macro call, and
//! calls to macros that expand to nothing are reinserted from the macro index.

pub mod blank_lines;
mod config;
mod emit;
mod error;
mod indent;
mod macros;
mod scribe;
mod visitor;
mod writer;

pub use blank_lines::{
    requires_blank_line_between, requires_leading_blank_line, requires_trailing_blank_line,
    suppresses_trailing_blank_line,
};
pub use config::WriterConfig;
pub use error::{Result, WriterError};
pub use indent::Indent;
pub use macros::{EMPTY_MACRO_TOLERANCE, MacroExpansion, MacroExpansionHandler};
pub use scribe::Scribe;
pub use visitor::{WriterState, WriterVisitor};
pub use writer::AstWriter;
