use astwriter_ast::{Ast, Name, Node, NodeId};

use crate::{Result, WriterVisitor};

/// True for an abstract name, which prints nothing.
pub(crate) fn is_empty_name(ast: &Ast, id: NodeId) -> bool {
    match ast.node(id) {
        Node::Name(Name::Simple { id, .. }) => id.is_empty(),
        Node::Name(Name::Qualified { last, .. }) => is_empty_name(ast, *last),
        _ => false,
    }
}

fn is_dependent_qualifier(ast: &Ast, id: NodeId) -> bool {
    match ast.node(id) {
        Node::Name(Name::TemplateId { .. }) => true,
        Node::Name(Name::Simple {
            binding: Some(binding),
            ..
        }) => binding.is_template_parameter(),
        _ => false,
    }
}

impl<'a> WriterVisitor<'a> {
    pub(crate) fn visit_name(&mut self, id: NodeId, name: &'a Name) -> Result<()> {
        if self.state.space_needed_before_name && !is_empty_name(self.ast, id) {
            self.scribe.print_space();
            self.state.space_needed_before_name = false;
        }
        self.write_leading_comments(id);
        if self.skip_macro_expansion(id) {
            return Ok(());
        }
        match name {
            Name::Simple { id, .. } => {
                self.scribe.print(id);
            }
            Name::Qualified {
                qualifiers,
                last,
                fully_qualified,
            } => {
                if *fully_qualified {
                    self.scribe.print("::");
                }
                for qualifier in qualifiers {
                    self.visit(*qualifier)?;
                    self.scribe.print("::");
                }
                self.visit(*last)?;
            }
            Name::TemplateId {
                template_name,
                arguments,
            } => {
                if self.needs_template_keyword(id) {
                    self.scribe.print("template ");
                }
                self.visit(*template_name)?;
                self.scribe.print_char('<');
                self.visit_joined(arguments, ", ")?;
                // `>>` would close both lists.
                if self.scribe.last_char() == Some('>') {
                    self.scribe.print_space();
                }
                self.scribe.print_char('>');
            }
            Name::ConversionOperator { type_id } => {
                self.scribe.print("operator ");
                self.visit(*type_id)?;
            }
        }
        self.write_trailing_comments(id, false);
        Ok(())
    }

    /// A template-id inside a qualified name gets `template ` when an earlier
    /// segment is dependent, except in a function declarator's own name.
    fn needs_template_keyword(&self, id: NodeId) -> bool {
        let ast = self.ast;
        let Some(parent) = ast.parent(id) else {
            return false;
        };
        let Node::Name(Name::Qualified {
            qualifiers, last, ..
        }) = ast.node(parent)
        else {
            return false;
        };
        if ast
            .parent(parent)
            .is_some_and(|declarator| ast.is_function_declarator(declarator))
        {
            return false;
        }
        let segments: Vec<NodeId> = qualifiers.iter().copied().chain([*last]).collect();
        let Some(position) = segments.iter().position(|segment| *segment == id) else {
            return false;
        };
        segments[..position]
            .iter()
            .any(|segment| is_dependent_qualifier(ast, *segment))
    }
}
