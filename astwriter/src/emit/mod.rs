//! Per-category emitters.
//!
//! Each file adds methods to [`WriterVisitor`](crate::WriterVisitor) for one
//! node category. Emitters print their own tokens and hand every child back
//! to the visitor.

mod attributes;
mod declarations;
mod declarators;
mod decl_specifiers;
mod expressions;
mod initializers;
mod names;
mod statements;
mod template_parameters;

pub(crate) use names::is_empty_name;

#[cfg(test)]
pub(crate) mod test_support {
    use astwriter_ast::{Ast, NodeId};

    use crate::{WriterConfig, WriterVisitor};

    pub fn write(ast: &Ast, root: NodeId) -> String {
        let mut visitor = WriterVisitor::new(ast, &WriterConfig::default());
        visitor.visit(root).unwrap();
        visitor.finish()
    }
}
