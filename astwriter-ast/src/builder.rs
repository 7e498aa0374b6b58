//! Shorthand constructors for building trees by hand.

use crate::{
    Ast, BinaryOperator, Declaration, Declarator, DeclaratorKind, DeclSpecKind, DeclSpecifier,
    Expression, FileLocation, FunctionDeclarator, Initializer, LiteralKind, MacroExpansionSpan,
    Name, Node, NodeId, NodeLocation, ParameterDeclaration, SimpleDeclSpec, SimpleType, Statement,
    TranslationUnit, UnaryOperator,
};

impl Ast {
    pub fn name(&mut self, id: &str) -> NodeId {
        self.add(Name::simple(id))
    }

    /// `a::b::c` from `["a", "b", "c"]`.
    pub fn qualified_name(&mut self, segments: &[&str]) -> NodeId {
        let mut ids: Vec<NodeId> = segments.iter().map(|segment| self.name(segment)).collect();
        match ids.pop() {
            Some(last) if !ids.is_empty() => self.add(Name::Qualified {
                qualifiers: ids,
                last,
                fully_qualified: false,
            }),
            Some(last) => last,
            None => self.name(""),
        }
    }

    pub fn container(&mut self, children: Vec<NodeId>) -> NodeId {
        self.add_data(crate::NodeData::new(Node::Container(children)))
    }

    pub fn literal_text(&mut self, text: &str) -> NodeId {
        self.add_data(crate::NodeData::new(Node::Literal(text.into())))
    }

    pub fn id_expr(&mut self, name: &str) -> NodeId {
        let name = self.name(name);
        self.add(Expression::Id { name })
    }

    pub fn literal(&mut self, kind: LiteralKind, value: &str) -> NodeId {
        self.add(Expression::Literal {
            kind,
            value: value.into(),
        })
    }

    pub fn int(&mut self, value: &str) -> NodeId {
        self.literal(LiteralKind::Integer, value)
    }

    pub fn binary(&mut self, operator: BinaryOperator, operand1: NodeId, operand2: NodeId) -> NodeId {
        self.add(Expression::Binary {
            operator,
            operand1,
            operand2,
        })
    }

    pub fn unary(&mut self, operator: UnaryOperator, operand: NodeId) -> NodeId {
        self.add(Expression::Unary {
            operator,
            operand: Some(operand),
        })
    }

    pub fn call(&mut self, function: &str, arguments: Vec<NodeId>) -> NodeId {
        let function = self.id_expr(function);
        self.add(Expression::FunctionCall {
            function,
            arguments,
        })
    }

    pub fn simple_type(&mut self, ty: SimpleType) -> NodeId {
        self.add(DeclSpecifier::new(DeclSpecKind::Simple(SimpleDeclSpec::new(
            ty,
        ))))
    }

    pub fn named_type(&mut self, name: &str) -> NodeId {
        let name = self.name(name);
        self.add(DeclSpecifier::new(DeclSpecKind::Named {
            name,
            typename: false,
        }))
    }

    pub fn declarator(&mut self, name: &str) -> NodeId {
        let name = self.name(name);
        self.add(Declarator::named(name))
    }

    /// `name = value`
    pub fn initialized_declarator(&mut self, name: &str, value: NodeId) -> NodeId {
        let name = self.name(name);
        let initializer = self.add(Initializer::Equals { clause: value });
        self.add(Declarator {
            initializer: Some(initializer),
            ..Declarator::named(name)
        })
    }

    pub fn function_declarator(&mut self, name: &str, parameters: Vec<NodeId>) -> NodeId {
        let name = self.name(name);
        self.add(Declarator {
            kind: DeclaratorKind::Function(FunctionDeclarator {
                parameters,
                ..FunctionDeclarator::default()
            }),
            ..Declarator::named(name)
        })
    }

    pub fn parameter(&mut self, decl_spec: NodeId, name: &str) -> NodeId {
        let declarator = self.declarator(name);
        self.add(ParameterDeclaration {
            decl_spec,
            declarator,
        })
    }

    pub fn simple_declaration(&mut self, decl_spec: NodeId, declarators: Vec<NodeId>) -> NodeId {
        self.add(Declaration::Simple {
            attributes: Vec::new(),
            decl_spec,
            declarators,
        })
    }

    pub fn expression_statement(&mut self, expression: NodeId) -> NodeId {
        self.add(Statement::Expression { expression })
    }

    pub fn declaration_statement(&mut self, declaration: NodeId) -> NodeId {
        self.add(Statement::Declaration { declaration })
    }

    pub fn compound(&mut self, statements: Vec<NodeId>) -> NodeId {
        self.add(Statement::Compound { statements })
    }

    pub fn return_statement(&mut self, value: Option<NodeId>) -> NodeId {
        self.add(Statement::Return { value })
    }

    pub fn translation_unit(&mut self, file_name: &str, declarations: Vec<NodeId>) -> NodeId {
        let mut unit = TranslationUnit::new(file_name);
        unit.declarations = declarations;
        self.add(unit)
    }

    /// Records `id` as spanning `offset..offset + length` of `file_name`.
    pub fn locate(&mut self, id: NodeId, file_name: &str, offset: u32, length: u32) -> NodeId {
        let location = FileLocation::new(file_name, offset, length);
        let data = self.data_mut(id);
        data.locations.push(NodeLocation::File(location.clone()));
        data.file_location = Some(location);
        id
    }

    /// Records `id` as produced by a call of `macro_name` at the given range.
    pub fn locate_in_macro(
        &mut self,
        id: NodeId,
        macro_name: &str,
        file_name: &str,
        offset: u32,
        length: u32,
    ) -> NodeId {
        self.data_mut(id)
            .locations
            .push(NodeLocation::MacroExpansion(MacroExpansionSpan {
                macro_name: macro_name.into(),
                expansion_offset: 0,
                expansion_length: 0,
                file_location: FileLocation::new(file_name, offset, length),
            }));
        id
    }

    pub fn set_raw_signature(&mut self, id: NodeId, text: &str) -> NodeId {
        self.data_mut(id).raw_signature = Some(text.into());
        id
    }
}
