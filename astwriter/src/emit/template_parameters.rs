use astwriter_ast::{NodeId, TemplateParameter};

use crate::{Result, WriterVisitor};

impl<'a> WriterVisitor<'a> {
    pub(crate) fn write_template_parameter(&mut self, parameter: &'a TemplateParameter) -> Result<()> {
        match parameter {
            TemplateParameter::Type {
                key,
                is_pack,
                name,
                default_type,
            } => self.write_parameter_tail(key.keyword(), *is_pack, *name, *default_type),
            TemplateParameter::Template {
                parameters,
                key,
                is_pack,
                name,
                default_value,
            } => {
                self.write_template_parameter_list(parameters)?;
                self.write_parameter_tail(key.keyword(), *is_pack, *name, *default_value)
            }
        }
    }

    /// `template <` params `> `
    pub(crate) fn write_template_parameter_list(&mut self, parameters: &'a [NodeId]) -> Result<()> {
        self.scribe.print("template <");
        self.visit_joined(parameters, ", ")?;
        self.scribe.print("> ");
        Ok(())
    }

    fn write_parameter_tail(
        &mut self,
        keyword: &str,
        is_pack: bool,
        name: Option<NodeId>,
        default: Option<NodeId>,
    ) -> Result<()> {
        self.scribe.print(keyword);
        if is_pack {
            self.scribe.print("...");
        }
        if let Some(name) = name {
            self.scribe.print_space();
            self.visit(name)?;
        }
        if let Some(default) = default {
            self.scribe.print(" = ");
            self.visit(default)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use astwriter_ast::{Ast, SimpleType, TemplateParameter, TypeId, TypeParameterKey};

    use crate::emit::test_support::write;

    #[test]
    fn test_type_parameter_pack() {
        let mut ast = Ast::new();
        let name = ast.name("Ts");
        let parameter = ast.add(TemplateParameter::Type {
            key: TypeParameterKey::Typename,
            is_pack: true,
            name: Some(name),
            default_type: None,
        });
        assert_eq!(write(&ast, parameter), "typename... Ts");
    }

    #[test]
    fn test_type_parameter_default() {
        let mut ast = Ast::new();
        let name = ast.name("T");
        let int = ast.simple_type(SimpleType::Int);
        let default_type = ast.add(TypeId {
            decl_spec: int,
            declarator: None,
            is_pack_expansion: false,
        });
        let parameter = ast.add(TemplateParameter::Type {
            key: TypeParameterKey::Class,
            is_pack: false,
            name: Some(name),
            default_type: Some(default_type),
        });
        assert_eq!(write(&ast, parameter), "class T = int");
    }

    #[test]
    fn test_template_template_parameter() {
        let mut ast = Ast::new();
        let inner = ast.add(TemplateParameter::Type {
            key: TypeParameterKey::Typename,
            is_pack: false,
            name: None,
            default_type: None,
        });
        let name = ast.name("Container");
        let parameter = ast.add(TemplateParameter::Template {
            parameters: vec![inner],
            key: TypeParameterKey::Class,
            is_pack: false,
            name: Some(name),
            default_value: None,
        });
        assert_eq!(write(&ast, parameter), "template <typename> class Container");
    }
}
