use astwriter_ast::{
    ArrayModifier, Declarator, DeclaratorKind, FunctionDeclarator, Node, NodeId, Noexcept,
    ParameterDeclaration, PointerKind, PointerOperator, RefQualifier, TypeId, VirtSpecifier,
};

use crate::{Result, WriterVisitor};

impl<'a> WriterVisitor<'a> {
    pub(crate) fn visit_declarator(&mut self, id: NodeId, declarator: &'a Declarator) -> Result<()> {
        self.write_leading_comments(id);
        if self.skip_macro_expansion(id) {
            return Ok(());
        }
        if let DeclaratorKind::KnRFunction {
            parameter_names,
            parameter_declarations,
        } = &declarator.kind
        {
            self.write_knr_declarator(declarator, parameter_names, parameter_declarations)?;
        } else {
            self.write_declarator(declarator)?;
        }
        self.state.space_needed_before_name = false;
        self.write_trailing_comments(id, false);
        Ok(())
    }

    fn write_declarator(&mut self, declarator: &'a Declarator) -> Result<()> {
        for operator in &declarator.pointer_ops {
            self.visit(*operator)?;
        }
        if declarator.is_pack_expansion {
            self.scribe.print("...");
        }
        if let Some(name) = declarator.name {
            self.visit(name)?;
        }
        if let Some(nested) = declarator.nested {
            if self.state.space_needed_before_name {
                self.scribe.print_space();
                self.state.space_needed_before_name = false;
            }
            self.scribe.print_char('(');
            self.visit(nested)?;
            self.scribe.print_char(')');
        }
        for attribute in &declarator.attributes {
            self.scribe.print_space();
            self.visit(*attribute)?;
        }
        match &declarator.kind {
            DeclaratorKind::Plain | DeclaratorKind::KnRFunction { .. } => {}
            DeclaratorKind::Function(function) => self.write_function_suffix(function)?,
            DeclaratorKind::Array { modifiers } => {
                for modifier in modifiers {
                    self.visit(*modifier)?;
                }
            }
            DeclaratorKind::Field { bit_width } => {
                self.scribe.print(" : ");
                self.visit(*bit_width)?;
            }
        }
        if let Some(initializer) = declarator.initializer {
            self.visit(initializer)?;
        }
        Ok(())
    }

    fn write_function_suffix(&mut self, function: &'a FunctionDeclarator) -> Result<()> {
        self.scribe.print_char('(');
        self.visit_joined(&function.parameters, ", ")?;
        if function.takes_var_args {
            if !function.parameters.is_empty() {
                self.scribe.print(", ");
            }
            self.scribe.print("...");
        }
        self.scribe.print_char(')');

        if function.is_const {
            self.scribe.print(" const");
        }
        if function.is_volatile {
            self.scribe.print(" volatile");
        }
        match function.ref_qualifier {
            Some(RefQualifier::LValue) => {
                self.scribe.print(" &");
            }
            Some(RefQualifier::RValue) => {
                self.scribe.print(" &&");
            }
            None => {}
        }
        if function.is_mutable {
            self.scribe.print(" mutable");
        }
        if let Some(exceptions) = &function.exception_specification {
            self.scribe.print(" throw(");
            self.visit_joined(exceptions, ", ")?;
            self.scribe.print_char(')');
        }
        match function.noexcept {
            Some(Noexcept::Unconditional) => {
                self.scribe.print(" noexcept");
            }
            Some(Noexcept::Expression(expression)) => {
                self.scribe.print(" noexcept(");
                self.visit(expression)?;
                self.scribe.print_char(')');
            }
            None => {}
        }
        for attribute in &function.attributes {
            self.scribe.print_space();
            self.visit(*attribute)?;
        }
        if let Some(return_type) = function.trailing_return_type {
            self.scribe.print(" -> ");
            self.visit(return_type)?;
        }
        for specifier in &function.virt_specifiers {
            self.scribe.print(match specifier {
                VirtSpecifier::Override => " override",
                VirtSpecifier::Final => " final",
            });
        }
        if function.is_pure_virtual {
            self.scribe.print(" = 0");
        }
        Ok(())
    }

    /// `f(a, b)` followed by one parameter declaration per line.
    fn write_knr_declarator(
        &mut self,
        declarator: &'a Declarator,
        parameter_names: &'a [NodeId],
        parameter_declarations: &'a [NodeId],
    ) -> Result<()> {
        for operator in &declarator.pointer_ops {
            self.visit(*operator)?;
        }
        if let Some(name) = declarator.name {
            self.visit(name)?;
        }
        self.scribe.print_char('(');
        self.visit_joined(parameter_names, ", ")?;
        self.scribe.print_char(')');
        self.scribe.new_line();
        self.state.suppress_leading_blank_line = true;
        for declaration in parameter_declarations {
            self.scribe.no_new_lines();
            let result = self.visit(*declaration);
            self.scribe.resume_new_lines();
            result?;
            self.scribe.new_line();
        }
        Ok(())
    }

    pub(crate) fn write_pointer_operator(&mut self, operator: &'a PointerOperator) -> Result<()> {
        if self.state.space_needed_before_name {
            self.scribe.print_space();
            self.state.space_needed_before_name = false;
        }
        let ast = self.ast;
        let is_gcc = |attribute: &NodeId| {
            matches!(ast.node(*attribute), Node::AttributeSpecifier(specifier) if specifier.is_gcc())
        };
        for attribute in operator.attributes.iter().filter(|attribute| is_gcc(attribute)) {
            self.visit(*attribute)?;
            self.scribe.print_space();
        }
        match operator.kind {
            PointerKind::Pointer => {
                self.scribe.print_char('*');
            }
            PointerKind::PointerToMember { class_name } => {
                self.visit(class_name)?;
                self.scribe.print("::*");
            }
            PointerKind::Reference => {
                self.scribe.print_char('&');
            }
            PointerKind::RValueReference => {
                self.scribe.print("&&");
            }
        }
        let mut needs_space = false;
        for attribute in operator.attributes.iter().filter(|attribute| !is_gcc(attribute)) {
            self.visit(*attribute)?;
            needs_space = true;
        }

        let qualifiers = operator.qualifiers;
        let words = [
            (qualifiers.is_const, "const"),
            (qualifiers.is_volatile, "volatile"),
            (qualifiers.is_restrict, "restrict"),
        ];
        for (_, word) in words.iter().filter(|(set, _)| *set) {
            if needs_space {
                self.scribe.print_space();
            }
            self.scribe.print(word);
            needs_space = true;
        }
        // Text after the operator itself is separated from the name.
        if needs_space {
            self.state.space_needed_before_name = true;
        }
        Ok(())
    }

    pub(crate) fn write_array_modifier(&mut self, modifier: &'a ArrayModifier) -> Result<()> {
        self.scribe.print_char('[');
        let qualifiers = modifier.qualifiers;
        let words = [
            (qualifiers.is_static, "static"),
            (qualifiers.is_const, "const"),
            (qualifiers.is_volatile, "volatile"),
            (qualifiers.is_restrict, "restrict"),
        ];
        let mut printed = false;
        for (_, word) in words.iter().filter(|(set, _)| *set) {
            if printed {
                self.scribe.print_space();
            }
            self.scribe.print(word);
            printed = true;
        }
        if let Some(expression) = modifier.expression {
            if printed {
                self.scribe.print_space();
            }
            self.visit(expression)?;
        } else if qualifiers.is_variable_sized {
            self.scribe.print_char('*');
        }
        self.scribe.print_char(']');
        for attribute in &modifier.attributes {
            self.visit(*attribute)?;
        }
        Ok(())
    }

    pub(crate) fn write_parameter_declaration(
        &mut self,
        parameter: &'a ParameterDeclaration,
    ) -> Result<()> {
        let printed = self.visit_tracked(parameter.decl_spec)?;
        self.state.space_needed_before_name = printed;
        self.visit(parameter.declarator)?;
        self.state.space_needed_before_name = false;
        Ok(())
    }

    pub(crate) fn write_type_id(&mut self, type_id: &'a TypeId) -> Result<()> {
        let printed = self.visit_tracked(type_id.decl_spec)?;
        if let Some(declarator) = type_id.declarator {
            self.state.space_needed_before_name = printed;
            self.visit(declarator)?;
            self.state.space_needed_before_name = false;
        }
        if type_id.is_pack_expansion {
            self.scribe.print("...");
        }
        Ok(())
    }
}
