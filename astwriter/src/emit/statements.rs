use astwriter_ast::{Node, NodeId, Statement};
use tracing::trace;

use crate::visitor::SwitchFrame;
use crate::{Result, WriterError, WriterVisitor};

impl<'a> WriterVisitor<'a> {
    pub(crate) fn visit_statement(&mut self, id: NodeId, statement: &'a Statement) -> Result<()> {
        if let Statement::Problem(_) = statement {
            return Err(self.problem(id));
        }
        self.insert_blank_line_if_needed(id);
        self.write_leading_comments(id);
        if !statement.is_compound() && self.macros.is_statement_mixed_location(self.ast, id) {
            // Partly macro-generated: nothing better than the source text.
            trace!(node = %id, "statement with mixed macro locations");
            let text = self.ast.raw_signature(id).unwrap_or_default();
            self.scribe.println(text);
        } else if self.skip_macro_expansion(id) {
            self.end_line_if_needed();
        } else {
            self.write_statement(id, statement)?;
        }
        self.set_leading_blank_line_flags(id);
        Ok(())
    }

    fn write_statement(&mut self, id: NodeId, statement: &'a Statement) -> Result<()> {
        let new_line = match statement {
            Statement::Compound { statements } => {
                let keep_line_open = std::mem::take(&mut self.state.compound_no_new_line);
                self.write_compound(id, statements)?;
                !keep_line_open
            }
            Statement::Expression { expression } => {
                self.visit(*expression)?;
                self.scribe.print_semicolon();
                true
            }
            Statement::Declaration { declaration } => {
                self.visit(*declaration)?;
                false
            }
            Statement::Null => {
                self.scribe.print_semicolon();
                true
            }
            Statement::Return { value } => {
                self.scribe.print("return");
                if let Some(value) = value {
                    self.scribe.print_space();
                    self.visit(*value)?;
                }
                self.scribe.print_semicolon();
                true
            }
            Statement::Goto { label } => {
                self.scribe.print("goto ");
                self.visit(*label)?;
                self.scribe.print_semicolon();
                true
            }
            Statement::Label { name, nested } => {
                self.visit(*name)?;
                self.scribe.print_char(':').new_line();
                self.state.suppress_leading_blank_line = true;
                self.visit(*nested)?;
                false
            }
            Statement::Case { expression } => {
                self.write_case_label(Some(*expression))?;
                true
            }
            Statement::Default => {
                self.write_case_label(None)?;
                true
            }
            Statement::Break => {
                self.scribe.print("break").print_semicolon();
                true
            }
            Statement::Continue => {
                self.scribe.print("continue").print_semicolon();
                true
            }
            Statement::If {
                is_constexpr,
                init,
                condition,
                then_clause,
                else_clause,
            } => {
                self.scribe
                    .print(if *is_constexpr { "if constexpr (" } else { "if (" });
                self.scribe.no_new_lines();
                if let Some(init) = init {
                    self.visit(*init)?;
                    self.scribe.print_space();
                }
                self.write_condition(*condition)?;
                self.scribe.print_char(')').resume_new_lines();
                self.write_body(*then_clause, else_clause.is_some())?;
                if let Some(else_clause) = else_clause {
                    self.print_keyword_after_body("else");
                    if self.is_if_statement(*else_clause) {
                        self.scribe.print_space();
                        self.visit(*else_clause)?;
                    } else {
                        self.write_body(*else_clause, false)?;
                    }
                }
                false
            }
            Statement::Switch {
                init,
                controller,
                body,
            } => {
                self.scribe.print("switch (").no_new_lines();
                if let Some(init) = init {
                    self.visit(*init)?;
                    self.scribe.print_space();
                }
                self.write_condition(*controller)?;
                self.scribe.print_char(')').resume_new_lines();
                self.state.switch_frames.push(SwitchFrame {
                    body: *body,
                    label_open: false,
                });
                let result = self.write_body(*body, false);
                self.state.switch_frames.pop();
                result?;
                false
            }
            Statement::While { condition, body } => {
                self.scribe.print("while (").no_new_lines();
                self.write_condition(*condition)?;
                self.scribe.print_char(')').resume_new_lines();
                self.write_body(*body, false)?;
                false
            }
            Statement::Do { body, condition } => {
                self.scribe.print("do");
                self.write_body(*body, true)?;
                self.print_keyword_after_body("while (");
                self.scribe.no_new_lines();
                self.visit(*condition)?;
                self.scribe.print_char(')').resume_new_lines();
                self.scribe.print_semicolon();
                true
            }
            Statement::For {
                init,
                condition,
                iteration,
                body,
            } => {
                self.scribe.print("for (").no_new_lines();
                match init {
                    Some(init) => self.visit(*init)?,
                    None => {
                        self.scribe.print_semicolon();
                    }
                }
                if let Some(condition) = condition {
                    self.scribe.print_space();
                    self.write_condition(*condition)?;
                }
                self.scribe.print_semicolon();
                if let Some(iteration) = iteration {
                    self.scribe.print_space();
                    self.visit(*iteration)?;
                }
                self.scribe.print_char(')').resume_new_lines();
                self.write_body(*body, false)?;
                false
            }
            Statement::RangeFor {
                declaration,
                initializer,
                body,
            } => {
                self.scribe.print("for (").no_new_lines();
                self.visit_without_semicolon(*declaration)?;
                self.scribe.print(" : ");
                self.visit(*initializer)?;
                self.scribe.print_char(')').resume_new_lines();
                self.write_body(*body, false)?;
                false
            }
            Statement::Try { body, handlers } => {
                self.scribe.print("try");
                self.write_body(*body, !handlers.is_empty())?;
                self.write_catch_handlers(handlers)?;
                false
            }
            Statement::CatchHandler { declaration, body } => {
                self.write_catch_handler(*declaration, *body, true)?;
                false
            }
            Statement::Problem(_) => return Err(self.problem(id)),
        };
        if self.has_trailing_comments(id) {
            self.write_trailing_comments(id, new_line);
        } else if new_line {
            self.scribe.new_line();
        }
        Ok(())
    }

    fn is_if_statement(&self, id: NodeId) -> bool {
        matches!(self.ast.node(id), Node::Statement(Statement::If { .. }))
    }

    /// A condition may declare a variable; its semicolon is dropped.
    fn write_condition(&mut self, id: NodeId) -> Result<()> {
        if matches!(self.ast.node(id), Node::Declaration(_)) {
            self.visit_without_semicolon(id)
        } else {
            self.visit(id)
        }
    }

    /// Writes the body of a control statement. A compound body opens on the
    /// header's line and leaves its line open when a keyword follows.
    fn write_body(&mut self, body: NodeId, keyword_follows: bool) -> Result<()> {
        match self.ast.node(body) {
            Node::Statement(Statement::Compound { .. }) => {
                self.scribe.print_space();
                self.state.compound_no_new_line = keyword_follows;
                self.visit(body)?;
                self.state.compound_no_new_line = false;
            }
            _ => {
                self.scribe.increment_indent();
                self.scribe.new_line();
                let result = self.visit(body);
                self.scribe.decrement_indent();
                result?;
            }
        }
        Ok(())
    }

    pub(crate) fn write_compound(&mut self, id: NodeId, statements: &'a [NodeId]) -> Result<()> {
        self.scribe.print_l_brace().new_line();
        self.state.suppress_leading_blank_line = true;
        for statement in statements {
            self.visit(*statement)?;
        }
        self.write_freestanding_comments(id);
        if let Some(frame) = self.state.switch_frames.last_mut() {
            if frame.body == id && frame.label_open {
                self.scribe.decrement_indent();
                frame.label_open = false;
            }
        }
        self.scribe.print_r_brace();
        Ok(())
    }

    /// Labels of one switch line up with each other; the statements after a
    /// label are indented one level deeper.
    fn write_case_label(&mut self, expression: Option<NodeId>) -> Result<()> {
        let label_open = self
            .state
            .switch_frames
            .last()
            .is_some_and(|frame| frame.label_open);
        if label_open {
            self.scribe.decrement_indent();
        }
        match expression {
            Some(expression) => {
                self.scribe.print("case ");
                self.visit(expression)?;
            }
            None => {
                self.scribe.print("default");
            }
        }
        self.scribe.print_char(':');
        if let Some(frame) = self.state.switch_frames.last_mut() {
            frame.label_open = true;
            self.scribe.increment_indent();
        }
        Ok(())
    }

    pub(crate) fn write_catch_handlers(&mut self, handlers: &'a [NodeId]) -> Result<()> {
        let ast = self.ast;
        for (index, handler) in handlers.iter().enumerate() {
            let Node::Statement(Statement::CatchHandler { declaration, body }) = ast.node(*handler)
            else {
                return Err(WriterError::unexpected(ast, *handler, "catch handler"));
            };
            self.write_leading_comments(*handler);
            self.write_catch_handler(*declaration, *body, index + 1 == handlers.len())?;
        }
        Ok(())
    }

    fn write_catch_handler(&mut self, declaration: Option<NodeId>, body: NodeId, last: bool) -> Result<()> {
        self.print_keyword_after_body("catch (");
        self.scribe.no_new_lines();
        match declaration {
            Some(declaration) => {
                self.visit_without_semicolon(declaration)?;
            }
            None => {
                self.scribe.print("...");
            }
        }
        self.scribe.print_char(')').resume_new_lines();
        self.write_body(body, !last)
    }
}

#[cfg(test)]
mod tests {
    use astwriter_ast::{
        Ast, BinaryOperator, ModificationMap, NodeId, Rewrite, SimpleType, Statement,
    };

    use crate::emit::test_support::write;
    use crate::{AstWriter, WriterConfig, WriterError, WriterVisitor};

    /// `for (auto item : items) use(item);`, returning the loop and its
    /// declaration.
    fn range_for(ast: &mut Ast) -> (NodeId, NodeId) {
        let auto = ast.simple_type(SimpleType::Auto);
        let item = ast.declarator("item");
        let declaration = ast.simple_declaration(auto, vec![item]);
        let initializer = ast.id_expr("items");
        let argument = ast.id_expr("item");
        let call = ast.call("use", vec![argument]);
        let body = ast.expression_statement(call);
        let loop_statement = ast.add(Statement::RangeFor {
            declaration,
            initializer,
            body,
        });
        (loop_statement, declaration)
    }

    fn write_with_rewrite(ast: &Ast, root: NodeId, node: NodeId, text: &str) -> String {
        let mut modifications = ModificationMap::new();
        modifications.insert(node, Rewrite::ReplaceText(text.to_string()));
        AstWriter::new()
            .with_modifications(&modifications)
            .write(ast, root)
            .unwrap()
    }

    #[test]
    fn test_if_else_chain() {
        let mut ast = Ast::new();
        let a = ast.id_expr("a");
        let call_a = ast.call("f", Vec::new());
        let then_a = ast.expression_statement(call_a);
        let then_compound = ast.compound(vec![then_a]);
        let b = ast.id_expr("b");
        let call_b = ast.call("g", Vec::new());
        let then_b = ast.expression_statement(call_b);
        let call_c = ast.call("h", Vec::new());
        let otherwise = ast.expression_statement(call_c);
        let inner = ast.add(Statement::If {
            is_constexpr: false,
            init: None,
            condition: b,
            then_clause: then_b,
            else_clause: Some(otherwise),
        });
        let outer = ast.add(Statement::If {
            is_constexpr: false,
            init: None,
            condition: a,
            then_clause: then_compound,
            else_clause: Some(inner),
        });
        assert_eq!(
            write(&ast, outer),
            "if (a) {\n    f();\n} else if (b)\n    g();\nelse\n    h();\n"
        );
    }

    #[test]
    fn test_for_loop_header_stays_on_one_line() {
        let mut ast = Ast::new();
        let int = ast.simple_type(SimpleType::Int);
        let zero = ast.int("0");
        let declarator = ast.initialized_declarator("i", zero);
        let declaration = ast.simple_declaration(int, vec![declarator]);
        let init = ast.declaration_statement(declaration);
        let i = ast.id_expr("i");
        let limit = ast.id_expr("n");
        let condition = ast.binary(BinaryOperator::LessThan, i, limit);
        let i = ast.id_expr("i");
        let iteration = ast.unary(astwriter_ast::UnaryOperator::PrefixIncrement, i);
        let body = ast.compound(Vec::new());
        let for_loop = ast.add(Statement::For {
            init: Some(init),
            condition: Some(condition),
            iteration: Some(iteration),
            body,
        });
        assert_eq!(
            write(&ast, for_loop),
            "for (int i = 0; i < n; ++i) {\n}\n"
        );
    }

    #[test]
    fn test_do_while() {
        let mut ast = Ast::new();
        let call = ast.call("step", Vec::new());
        let statement = ast.expression_statement(call);
        let body = ast.compound(vec![statement]);
        let condition = ast.id_expr("running");
        let do_while = ast.add(Statement::Do { body, condition });
        assert_eq!(
            write(&ast, do_while),
            "do {\n    step();\n} while (running);\n"
        );
    }

    #[test]
    fn test_switch_labels_line_up() {
        let mut ast = Ast::new();
        let one = ast.int("1");
        let case_one = ast.add(Statement::Case { expression: one });
        let two = ast.int("2");
        let case_two = ast.add(Statement::Case { expression: two });
        let call = ast.call("handle", Vec::new());
        let handle = ast.expression_statement(call);
        let stop = ast.add(Statement::Break);
        let fallback = ast.add(Statement::Default);
        let body = ast.compound(vec![case_one, case_two, handle, stop, fallback]);
        let controller = ast.id_expr("kind");
        let switch = ast.add(Statement::Switch {
            init: None,
            controller,
            body,
        });
        assert_eq!(
            write(&ast, switch),
            "switch (kind) {\n    case 1:\n    case 2:\n        handle();\n        break;\n    default:\n}\n"
        );
    }

    #[test]
    fn test_try_catch_all() {
        let mut ast = Ast::new();
        let call = ast.call("run", Vec::new());
        let statement = ast.expression_statement(call);
        let body = ast.compound(vec![statement]);
        let handler_body = ast.compound(Vec::new());
        let handler = ast.add(Statement::CatchHandler {
            declaration: None,
            body: handler_body,
        });
        let try_block = ast.add(Statement::Try {
            body,
            handlers: vec![handler],
        });
        assert_eq!(
            write(&ast, try_block),
            "try {\n    run();\n} catch (...) {\n}\n"
        );
    }

    #[test]
    fn test_non_compound_while_body_is_indented() {
        let mut ast = Ast::new();
        let condition = ast.id_expr("pending");
        let call = ast.call("drain", Vec::new());
        let body = ast.expression_statement(call);
        let while_loop = ast.add(Statement::While { condition, body });
        let outer = ast.compound(vec![while_loop]);
        assert_eq!(
            write(&ast, outer),
            "{\n    while (pending)\n        drain();\n}\n"
        );
    }

    #[test]
    fn test_return_and_null() {
        let mut ast = Ast::new();
        let value = ast.int("0");
        let ret = ast.return_statement(Some(value));
        let null = ast.add(Statement::Null);
        let body = ast.compound(vec![null, ret]);
        assert_eq!(write(&ast, body), "{\n    ;\n    return 0;\n}\n");
    }

    #[test]
    fn test_handler_slot_must_hold_catch_handler() {
        let mut ast = Ast::new();
        let body = ast.compound(Vec::new());
        let stray = ast.id_expr("oops");
        let try_block = ast.add(Statement::Try {
            body,
            handlers: vec![stray],
        });
        let mut visitor = WriterVisitor::new(&ast, &WriterConfig::default());
        let error = visitor.visit(try_block).unwrap_err();
        assert!(matches!(
            error,
            WriterError::UnexpectedNode { node, expected: "catch handler", .. } if node == stray
        ));
    }

    #[test]
    fn test_range_for() {
        let mut ast = Ast::new();
        let (loop_statement, _) = range_for(&mut ast);
        assert_eq!(
            write(&ast, loop_statement),
            "for (auto item : items)\n    use(item);\n"
        );
    }

    #[test]
    fn test_range_for_macro_declaration_keeps_body_semicolon() {
        let mut ast = Ast::new();
        let (loop_statement, declaration) = range_for(&mut ast);
        ast.locate_in_macro(declaration, "EACH", "loop.c", 5, 4);
        ast.set_raw_signature(declaration, "EACH");
        assert_eq!(
            write(&ast, loop_statement),
            "for (EACH : items)\n    use(item);\n"
        );
    }

    #[test]
    fn test_range_for_rewritten_declaration_keeps_body_semicolon() {
        let mut ast = Ast::new();
        let (loop_statement, declaration) = range_for(&mut ast);
        assert_eq!(
            write_with_rewrite(&ast, loop_statement, declaration, "auto &item"),
            "for (auto &item : items)\n    use(item);\n"
        );
    }

    #[test]
    fn test_rewritten_condition_declaration_keeps_body_semicolon() {
        let mut ast = Ast::new();
        let int = ast.simple_type(SimpleType::Int);
        let n = ast.declarator("n");
        let condition = ast.simple_declaration(int, vec![n]);
        let argument = ast.id_expr("n");
        let call = ast.call("use", vec![argument]);
        let then_clause = ast.expression_statement(call);
        let check = ast.add(Statement::If {
            is_constexpr: false,
            init: None,
            condition,
            then_clause,
            else_clause: None,
        });
        assert_eq!(
            write_with_rewrite(&ast, check, condition, "int n = read()"),
            "if (int n = read())\n    use(n);\n"
        );
    }

    #[test]
    fn test_rewritten_handler_declaration_keeps_body_semicolon() {
        let mut ast = Ast::new();
        let body = ast.compound(Vec::new());
        let error = ast.named_type("Error");
        let e = ast.declarator("e");
        let declaration = ast.simple_declaration(error, vec![e]);
        let call = ast.call("log", Vec::new());
        let statement = ast.expression_statement(call);
        let handler_body = ast.compound(vec![statement]);
        let handler = ast.add(Statement::CatchHandler {
            declaration: Some(declaration),
            body: handler_body,
        });
        let try_block = ast.add(Statement::Try {
            body,
            handlers: vec![handler],
        });
        assert_eq!(
            write_with_rewrite(&ast, try_block, declaration, "const Error &e"),
            "try {\n} catch (const Error &e) {\n    log();\n}\n"
        );
    }

    /// One tree per non-compound statement kind, with its rendering at
    /// indentation level zero.
    fn statement_bodies(ast: &mut Ast) -> Vec<(NodeId, &'static str)> {
        let mut bodies = Vec::new();

        let call = ast.call("f", Vec::new());
        bodies.push((ast.expression_statement(call), "f();\n"));

        let int = ast.simple_type(SimpleType::Int);
        let n = ast.declarator("n");
        let declaration = ast.simple_declaration(int, vec![n]);
        bodies.push((ast.declaration_statement(declaration), "int n;\n"));

        bodies.push((ast.add(Statement::Null), ";\n"));

        let zero = ast.int("0");
        bodies.push((ast.return_statement(Some(zero)), "return 0;\n"));

        let label = ast.name("done");
        bodies.push((ast.add(Statement::Goto { label }), "goto done;\n"));

        let name = ast.name("again");
        let nested = ast.add(Statement::Null);
        bodies.push((ast.add(Statement::Label { name, nested }), "again:\n;\n"));

        let expression = ast.int("1");
        bodies.push((ast.add(Statement::Case { expression }), "case 1:\n"));
        bodies.push((ast.add(Statement::Default), "default:\n"));
        bodies.push((ast.add(Statement::Break), "break;\n"));
        bodies.push((ast.add(Statement::Continue), "continue;\n"));

        let condition = ast.id_expr("y");
        let call = ast.call("f", Vec::new());
        let then_clause = ast.expression_statement(call);
        bodies.push((
            ast.add(Statement::If {
                is_constexpr: false,
                init: None,
                condition,
                then_clause,
                else_clause: None,
            }),
            "if (y)\n    f();\n",
        ));

        let controller = ast.id_expr("y");
        let body = ast.compound(Vec::new());
        bodies.push((
            ast.add(Statement::Switch {
                init: None,
                controller,
                body,
            }),
            "switch (y) {\n}\n",
        ));

        let condition = ast.id_expr("y");
        let call = ast.call("f", Vec::new());
        let body = ast.expression_statement(call);
        bodies.push((
            ast.add(Statement::While { condition, body }),
            "while (y)\n    f();\n",
        ));

        let body = ast.compound(Vec::new());
        let condition = ast.id_expr("y");
        bodies.push((
            ast.add(Statement::Do { body, condition }),
            "do {\n} while (y);\n",
        ));

        let body = ast.add(Statement::Null);
        bodies.push((
            ast.add(Statement::For {
                init: None,
                condition: None,
                iteration: None,
                body,
            }),
            "for (;;)\n    ;\n",
        ));

        let (loop_statement, _) = range_for(ast);
        bodies.push((loop_statement, "for (auto item : items)\n    use(item);\n"));

        let body = ast.compound(Vec::new());
        let handler_body = ast.compound(Vec::new());
        let handler = ast.add(Statement::CatchHandler {
            declaration: None,
            body: handler_body,
        });
        bodies.push((
            ast.add(Statement::Try {
                body,
                handlers: vec![handler],
            }),
            "try {\n} catch (...) {\n}\n",
        ));

        let body = ast.compound(Vec::new());
        bodies.push((
            ast.add(Statement::CatchHandler {
                declaration: None,
                body,
            }),
            "catch (...) {\n}\n",
        ));

        bodies
    }

    fn indented(text: &str) -> String {
        text.lines().map(|line| format!("    {line}\n")).collect()
    }

    #[test]
    fn test_every_statement_body_is_indented_one_level() {
        let headers: [(&str, fn(&mut Ast, NodeId) -> NodeId); 3] = [
            ("while (x)", |ast, body| {
                let condition = ast.id_expr("x");
                ast.add(Statement::While { condition, body })
            }),
            ("if (x)", |ast, then_clause| {
                let condition = ast.id_expr("x");
                ast.add(Statement::If {
                    is_constexpr: false,
                    init: None,
                    condition,
                    then_clause,
                    else_clause: None,
                })
            }),
            ("for (;;)", |ast, body| {
                ast.add(Statement::For {
                    init: None,
                    condition: None,
                    iteration: None,
                    body,
                })
            }),
        ];
        for (header, wrap) in headers {
            let mut ast = Ast::new();
            for (body, expected) in statement_bodies(&mut ast) {
                let statement = wrap(&mut ast, body);
                assert_eq!(
                    write(&ast, statement),
                    format!("{header}\n{}", indented(expected)),
                    "body {expected:?} under {header}"
                );
            }
        }
    }
}
