use astwriter_ast::{
    Declaration, FunctionBody, FunctionDefinition, InstantiationModifier, NodeId, RefQualifier,
};

use super::is_empty_name;
use crate::{Result, WriterVisitor};

impl<'a> WriterVisitor<'a> {
    pub(crate) fn visit_declaration(&mut self, id: NodeId, declaration: &'a Declaration) -> Result<()> {
        if let Declaration::Problem(_) = declaration {
            return Err(self.problem(id));
        }
        self.insert_blank_line_if_needed(id);
        self.write_leading_comments(id);
        if self.skip_macro_expansion(id) {
            self.end_line_if_needed();
            self.set_leading_blank_line_flags(id);
            return Ok(());
        }
        if let Declaration::Namespace {
            name,
            declarations,
            is_inline,
        } = declaration
        {
            return self.write_namespace(id, *name, declarations, *is_inline);
        }
        self.write_declaration(id, declaration)?;
        self.set_leading_blank_line_flags(id);
        Ok(())
    }

    fn write_declaration(&mut self, id: NodeId, declaration: &'a Declaration) -> Result<()> {
        match declaration {
            Declaration::Simple {
                attributes,
                decl_spec,
                declarators,
            } => {
                self.write_leading_attributes(attributes)?;
                let printed = self.visit_tracked(*decl_spec)?;
                if !declarators.is_empty() {
                    if printed {
                        self.scribe.print_space();
                    }
                    self.visit_joined(declarators, ", ")?;
                }
                self.scribe.print_semicolon();
                self.end_declaration(id);
            }
            Declaration::FunctionDefinition(definition) => {
                self.write_function_definition(id, definition)?;
            }
            Declaration::Asm { assembly } => {
                self.scribe.print("asm(").print(assembly).print_char(')');
                self.scribe.print_semicolon();
                self.end_declaration(id);
            }
            Declaration::NamespaceAlias { alias, target } => {
                self.scribe.print("namespace ");
                self.visit(*alias)?;
                self.scribe.print(" = ");
                self.visit(*target)?;
                self.scribe.print_semicolon();
                self.end_declaration(id);
            }
            Declaration::Template {
                parameters,
                declaration,
                is_exported,
            } => {
                if *is_exported {
                    self.scribe.print("export ");
                }
                self.write_template_parameter_list(parameters)?;
                self.state.suppress_leading_blank_line = true;
                self.visit(*declaration)?;
            }
            Declaration::TemplateSpecialization { declaration } => {
                self.scribe.print("template<> ");
                self.state.suppress_leading_blank_line = true;
                self.visit(*declaration)?;
            }
            Declaration::ExplicitInstantiation {
                declaration,
                modifier,
            } => {
                if let Some(modifier) = modifier {
                    self.scribe.print(match modifier {
                        InstantiationModifier::Extern => "extern ",
                        InstantiationModifier::Static => "static ",
                        InstantiationModifier::Inline => "inline ",
                    });
                }
                self.scribe.print("template ");
                self.state.suppress_leading_blank_line = true;
                self.visit(*declaration)?;
            }
            Declaration::Linkage {
                literal,
                declarations,
            } => self.write_linkage(id, literal, declarations)?,
            Declaration::UsingDeclaration { name, is_typename } => {
                self.scribe.print("using ");
                if *is_typename {
                    self.scribe.print("typename ");
                }
                self.visit(*name)?;
                self.scribe.print_semicolon();
                self.end_declaration(id);
            }
            Declaration::UsingDirective { name } => {
                self.scribe.print("using namespace ");
                self.visit(*name)?;
                self.scribe.print_semicolon();
                self.end_declaration(id);
            }
            Declaration::Alias {
                alias,
                type_id,
                attributes,
            } => {
                self.scribe.print("using ");
                self.visit(*alias)?;
                for attribute in attributes {
                    self.scribe.print_space();
                    self.visit(*attribute)?;
                }
                self.scribe.print(" = ");
                self.visit(*type_id)?;
                self.scribe.print_semicolon();
                self.end_declaration(id);
            }
            Declaration::VisibilityLabel(visibility) => {
                self.scribe.decrement_indent();
                self.scribe.print(visibility.keyword()).print_char(':');
                self.scribe.increment_indent();
                self.end_declaration(id);
            }
            Declaration::StaticAssert { condition, message } => {
                self.scribe.print("static_assert(");
                self.visit(*condition)?;
                if let Some(message) = message {
                    self.scribe.print(", ");
                    self.visit(*message)?;
                }
                self.scribe.print_char(')').print_semicolon();
                self.end_declaration(id);
            }
            Declaration::StructuredBinding {
                decl_spec,
                ref_qualifier,
                names,
                initializer,
            } => {
                if self.visit_tracked(*decl_spec)? {
                    self.scribe.print_space();
                }
                match ref_qualifier {
                    Some(RefQualifier::LValue) => {
                        self.scribe.print_char('&');
                    }
                    Some(RefQualifier::RValue) => {
                        self.scribe.print("&&");
                    }
                    None => {}
                }
                self.scribe.print_char('[');
                self.visit_joined(names, ", ")?;
                self.scribe.print_char(']');
                if let Some(initializer) = initializer {
                    self.visit(*initializer)?;
                }
                self.scribe.print_semicolon();
                self.end_declaration(id);
            }
            Declaration::Namespace { .. } | Declaration::Problem(_) => {}
        }
        Ok(())
    }

    /// Ends the declaration's line, with its trailing comments when it has any.
    fn end_declaration(&mut self, id: NodeId) {
        if self.has_trailing_comments(id) {
            self.write_trailing_comments(id, true);
        } else {
            self.scribe.new_line();
        }
    }

    fn write_function_definition(&mut self, id: NodeId, definition: &'a FunctionDefinition) -> Result<()> {
        self.write_leading_attributes(&definition.attributes)?;
        let printed = self.visit_tracked(definition.decl_spec)?;
        self.state.space_needed_before_name = printed;
        let declarator = self.ast.outermost_declarator(definition.declarator);
        self.visit(declarator)?;
        self.state.space_needed_before_name = false;

        if definition.catch_handlers.is_some() {
            self.end_line_if_needed();
            self.scribe.print("try");
        }
        if !definition.member_initializers.is_empty() {
            self.end_line_if_needed();
            self.scribe.print(": ");
            self.visit_joined(&definition.member_initializers, ", ")?;
        }

        match definition.body_kind {
            FunctionBody::Defaulted => {
                self.scribe.print(" = default").print_semicolon();
                self.end_declaration(id);
                return Ok(());
            }
            FunctionBody::Deleted => {
                self.scribe.print(" = delete").print_semicolon();
                self.end_declaration(id);
                return Ok(());
            }
            FunctionBody::Provided => {}
        }

        match definition.body {
            Some(body) => {
                self.end_line_if_needed();
                match &definition.catch_handlers {
                    Some(handlers) => {
                        self.state.compound_no_new_line = !handlers.is_empty();
                        self.visit(body)?;
                        self.state.compound_no_new_line = false;
                        self.write_catch_handlers(handlers)?;
                    }
                    None => self.visit(body)?,
                }
                self.write_trailing_comments(id, true);
            }
            None => {
                self.scribe.print_semicolon();
                self.end_declaration(id);
            }
        }
        self.write_freestanding_comments(id);
        Ok(())
    }

    fn write_namespace(
        &mut self,
        id: NodeId,
        name: NodeId,
        declarations: &'a [NodeId],
        is_inline: bool,
    ) -> Result<()> {
        if is_inline {
            self.scribe.print("inline ");
        }
        self.scribe.print("namespace");
        if !is_empty_name(self.ast, name) {
            self.scribe.print_space();
            self.visit(name)?;
        }
        self.scribe.print_space().print_l_brace();
        self.scribe.new_lines(3);
        self.state.suppress_leading_blank_line = true;
        for declaration in declarations {
            self.visit(*declaration)?;
        }
        self.write_freestanding_comments(id);
        self.scribe.print_r_brace();
        if self.has_trailing_comments(id) {
            self.write_trailing_comments(id, true);
            self.set_leading_blank_line_flags(id);
        } else {
            self.scribe.new_lines(2);
            self.state.pending_leading_blank_line = false;
            self.state.suppress_leading_blank_line = true;
        }
        Ok(())
    }

    /// A block linkage specification does not indent its declarations.
    fn write_linkage(&mut self, id: NodeId, literal: &'a str, declarations: &'a [NodeId]) -> Result<()> {
        self.scribe.print("extern ").print(literal).print_space();
        if let [declaration] = declarations {
            self.state.suppress_leading_blank_line = true;
            return self.visit(*declaration);
        }
        self.scribe.print_l_brace().decrement_indent();
        self.scribe.new_line();
        self.state.suppress_leading_blank_line = true;
        for declaration in declarations {
            self.visit(*declaration)?;
        }
        self.write_freestanding_comments(id);
        self.scribe.increment_indent().print_r_brace();
        self.end_declaration(id);
        Ok(())
    }
}
