//! Blank line placement between siblings.

use astwriter_ast::{Ast, Declaration, Node, NodeId, Statement};

fn declaration(ast: &Ast, id: NodeId) -> Option<&Declaration> {
    match ast.node(id) {
        Node::Declaration(declaration) => Some(declaration),
        _ => None,
    }
}

pub fn requires_leading_blank_line(ast: &Ast, id: NodeId) -> bool {
    let id = match declaration(ast, id) {
        Some(Declaration::Template { declaration, .. }) => *declaration,
        _ => id,
    };
    matches!(
        declaration(ast, id),
        Some(
            Declaration::Asm { .. }
                | Declaration::FunctionDefinition(_)
                | Declaration::VisibilityLabel(_)
        )
    )
}

pub fn requires_trailing_blank_line(ast: &Ast, id: NodeId) -> bool {
    match ast.node(id) {
        Node::Declaration(Declaration::Namespace { .. } | Declaration::FunctionDefinition(_)) => {
            true
        }
        Node::Statement(Statement::If {
            then_clause,
            else_clause,
            ..
        }) => {
            let last = else_clause.unwrap_or(*then_clause);
            let is_compound = matches!(ast.node(last), Node::Statement(s) if s.is_compound());
            !is_compound && !shares_offset(ast, last, id)
        }
        _ => false,
    }
}

pub fn suppresses_trailing_blank_line(ast: &Ast, id: NodeId) -> bool {
    matches!(declaration(ast, id), Some(Declaration::VisibilityLabel(_)))
}

pub fn requires_blank_line_between(ast: &Ast, first: NodeId, second: NodeId) -> bool {
    if requires_trailing_blank_line(ast, first) {
        return true;
    }
    !suppresses_trailing_blank_line(ast, first) && requires_leading_blank_line(ast, second)
}

/// Nodes produced by the same macro expansion map to the same offset.
fn shares_offset(ast: &Ast, a: NodeId, b: NodeId) -> bool {
    match (ast.offset(a), ast.offset(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use astwriter_ast::{SimpleType, Visibility};

    use super::*;

    fn bare_if(ast: &mut Ast, with_else: bool) -> (NodeId, NodeId, Option<NodeId>) {
        let condition = ast.id_expr("x");
        let then_call = ast.call("f", Vec::new());
        let then_clause = ast.expression_statement(then_call);
        let else_clause = with_else.then(|| {
            let call = ast.call("g", Vec::new());
            ast.expression_statement(call)
        });
        let id = ast.add(Statement::If {
            is_constexpr: false,
            init: None,
            condition,
            then_clause,
            else_clause,
        });
        (id, then_clause, else_clause)
    }

    fn function_definition(ast: &mut Ast) -> NodeId {
        let decl_spec = ast.simple_type(SimpleType::Void);
        let declarator = ast.function_declarator("f", Vec::new());
        let body = ast.compound(Vec::new());
        ast.add(Declaration::FunctionDefinition(
            astwriter_ast::FunctionDefinition {
                attributes: Vec::new(),
                decl_spec,
                declarator,
                member_initializers: Vec::new(),
                body_kind: Default::default(),
                body: Some(body),
                catch_handlers: None,
            },
        ))
    }

    #[test]
    fn test_function_definition_wants_both() {
        let mut ast = Ast::new();
        let id = function_definition(&mut ast);
        assert!(requires_leading_blank_line(&ast, id));
        assert!(requires_trailing_blank_line(&ast, id));
    }

    #[test]
    fn test_template_delegates_to_inner_declaration() {
        let mut ast = Ast::new();
        let inner = function_definition(&mut ast);
        let template = ast.add(Declaration::Template {
            parameters: Vec::new(),
            declaration: inner,
            is_exported: false,
        });
        assert!(requires_leading_blank_line(&ast, template));

        let spec = ast.simple_type(SimpleType::Int);
        let variable = ast.simple_declaration(spec, Vec::new());
        let template = ast.add(Declaration::Template {
            parameters: Vec::new(),
            declaration: variable,
            is_exported: false,
        });
        assert!(!requires_leading_blank_line(&ast, template));
    }

    #[test]
    fn test_bare_if_requires_trailing_blank_line() {
        let mut ast = Ast::new();
        let (id, then_clause, _) = bare_if(&mut ast, false);
        ast.locate(id, "a.c", 10, 12);
        ast.locate(then_clause, "a.c", 17, 5);
        assert!(requires_trailing_blank_line(&ast, id));
    }

    #[test]
    fn test_bare_if_from_one_macro_expansion() {
        let mut ast = Ast::new();
        let (id, then_clause, else_clause) = bare_if(&mut ast, true);
        ast.locate(id, "a.c", 30, 8);
        ast.locate(then_clause, "a.c", 30, 8);
        ast.locate(else_clause.unwrap(), "a.c", 30, 8);
        assert!(!requires_trailing_blank_line(&ast, id));
    }

    #[test]
    fn test_if_with_compound_else() {
        let mut ast = Ast::new();
        let condition = ast.id_expr("x");
        let then_clause = ast.compound(Vec::new());
        let else_clause = ast.compound(Vec::new());
        let id = ast.add(Statement::If {
            is_constexpr: false,
            init: None,
            condition,
            then_clause,
            else_clause: Some(else_clause),
        });
        assert!(!requires_trailing_blank_line(&ast, id));
    }

    #[test]
    fn test_visibility_label_suppresses_next_leading_blank_line() {
        let mut ast = Ast::new();
        let label = ast.add(Declaration::VisibilityLabel(Visibility::Public));
        let function = function_definition(&mut ast);
        assert!(requires_leading_blank_line(&ast, label));
        assert!(suppresses_trailing_blank_line(&ast, label));
        assert!(!requires_blank_line_between(&ast, label, function));
        assert!(requires_blank_line_between(&ast, function, label));
    }

    #[test]
    fn test_asm_requires_leading_blank_line() {
        let mut ast = Ast::new();
        let spec = ast.simple_type(SimpleType::Int);
        let variable = ast.simple_declaration(spec, Vec::new());
        let asm = ast.add(Declaration::Asm {
            assembly: "\"nop\"".into(),
        });
        assert!(requires_blank_line_between(&ast, variable, asm));
        assert!(!requires_blank_line_between(&ast, asm, variable));
    }
}
