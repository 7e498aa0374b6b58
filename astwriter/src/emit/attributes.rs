use astwriter_ast::{Attribute, AttributeSpecifier};

use crate::{Result, WriterVisitor};

impl<'a> WriterVisitor<'a> {
    pub(crate) fn write_attribute_specifier(&mut self, specifier: &'a AttributeSpecifier) -> Result<()> {
        match specifier {
            AttributeSpecifier::Cpp(attributes) => {
                self.scribe.print("[[");
                self.write_attribute_list(attributes);
                self.scribe.print("]]");
            }
            AttributeSpecifier::Gcc(attributes) => {
                self.scribe.print("__attribute__((");
                self.write_attribute_list(attributes);
                self.scribe.print("))");
            }
            AttributeSpecifier::Alignas { argument } => {
                self.scribe.print("alignas(");
                self.visit(*argument)?;
                self.scribe.print_char(')');
            }
        }
        Ok(())
    }

    fn write_attribute_list(&mut self, attributes: &'a [Attribute]) {
        for (index, attribute) in attributes.iter().enumerate() {
            if index > 0 {
                self.scribe.print(", ");
            }
            if let Some(scope) = &attribute.scope {
                self.scribe.print(scope).print("::");
            }
            self.scribe.print(&attribute.name);
            if let Some(argument) = &attribute.argument {
                self.scribe.print_char('(').print(argument).print_char(')');
            }
            if attribute.is_pack_expansion {
                self.scribe.print("...");
            }
        }
    }

    /// Declaration-level attributes, each followed by a space.
    pub(crate) fn write_leading_attributes(&mut self, attributes: &'a [astwriter_ast::NodeId]) -> Result<()> {
        for attribute in attributes {
            self.visit(*attribute)?;
            self.scribe.print_space();
        }
        Ok(())
    }
}
