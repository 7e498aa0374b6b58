use astwriter_ast::{
    BinaryOperator, CaptureDefault, Capture, CastKind, Expression, NodeId, TypeIdOperator,
    UnaryOperator,
};

use crate::{Result, WriterVisitor};

pub(crate) fn binary_operator_token(operator: BinaryOperator) -> &'static str {
    match operator {
        BinaryOperator::Multiply => " * ",
        BinaryOperator::Divide => " / ",
        BinaryOperator::Modulo => " % ",
        BinaryOperator::Plus => " + ",
        BinaryOperator::Minus => " - ",
        BinaryOperator::ShiftLeft => " << ",
        BinaryOperator::ShiftRight => " >> ",
        BinaryOperator::LessThan => " < ",
        BinaryOperator::GreaterThan => " > ",
        BinaryOperator::LessEqual => " <= ",
        BinaryOperator::GreaterEqual => " >= ",
        BinaryOperator::ThreeWayComparison => " <=> ",
        BinaryOperator::BinaryAnd => " & ",
        BinaryOperator::BinaryXor => " ^ ",
        BinaryOperator::BinaryOr => " | ",
        BinaryOperator::LogicalAnd => " && ",
        BinaryOperator::LogicalOr => " || ",
        BinaryOperator::Assign => " = ",
        BinaryOperator::MultiplyAssign => " *= ",
        BinaryOperator::DivideAssign => " /= ",
        BinaryOperator::ModuloAssign => " %= ",
        BinaryOperator::PlusAssign => " += ",
        BinaryOperator::MinusAssign => " -= ",
        BinaryOperator::ShiftLeftAssign => " <<= ",
        BinaryOperator::ShiftRightAssign => " >>= ",
        BinaryOperator::BinaryAndAssign => " &= ",
        BinaryOperator::BinaryXorAssign => " ^= ",
        BinaryOperator::BinaryOrAssign => " |= ",
        BinaryOperator::Equals => " == ",
        BinaryOperator::NotEquals => " != ",
        BinaryOperator::PointerToMemberObject => ".*",
        BinaryOperator::PointerToMemberPointer => "->*",
        BinaryOperator::Max => " >? ",
        BinaryOperator::Min => " <? ",
        BinaryOperator::Ellipses => " ... ",
    }
}

fn prefix_operator_token(operator: UnaryOperator) -> &'static str {
    match operator {
        UnaryOperator::PrefixIncrement => "++",
        UnaryOperator::PrefixDecrement => "--",
        UnaryOperator::Plus => "+",
        UnaryOperator::Minus => "-",
        UnaryOperator::Star => "*",
        UnaryOperator::Amper => "&",
        UnaryOperator::Tilde => "~",
        UnaryOperator::Not => "!",
        UnaryOperator::Sizeof => "sizeof ",
        UnaryOperator::SizeofParameterPack => "sizeof...(",
        UnaryOperator::BracketedPrimary => "(",
        UnaryOperator::Throw => "throw ",
        UnaryOperator::Typeid => "typeid(",
        UnaryOperator::Alignof => "alignof(",
        UnaryOperator::Noexcept => "noexcept(",
        UnaryOperator::LabelReference => "&&",
        UnaryOperator::PostfixIncrement | UnaryOperator::PostfixDecrement => "",
    }
}

fn postfix_operator_token(operator: UnaryOperator) -> &'static str {
    match operator {
        UnaryOperator::PostfixIncrement => "++",
        UnaryOperator::PostfixDecrement => "--",
        UnaryOperator::SizeofParameterPack
        | UnaryOperator::BracketedPrimary
        | UnaryOperator::Typeid
        | UnaryOperator::Alignof
        | UnaryOperator::Noexcept => ")",
        _ => "",
    }
}

fn type_id_operator_token(operator: TypeIdOperator) -> &'static str {
    match operator {
        TypeIdOperator::Sizeof => "sizeof(",
        TypeIdOperator::SizeofParameterPack => "sizeof...(",
        TypeIdOperator::Alignof => "alignof(",
        TypeIdOperator::Typeid => "typeid(",
        TypeIdOperator::Typeof => "typeof(",
    }
}

fn cast_keyword(kind: CastKind) -> Option<&'static str> {
    match kind {
        CastKind::CStyle => None,
        CastKind::Dynamic => Some("dynamic_cast<"),
        CastKind::Static => Some("static_cast<"),
        CastKind::Reinterpret => Some("reinterpret_cast<"),
        CastKind::Const => Some("const_cast<"),
    }
}

impl<'a> WriterVisitor<'a> {
    pub(crate) fn visit_expression(&mut self, id: NodeId, expression: &'a Expression) -> Result<()> {
        if let Expression::Problem(_) = expression {
            return Err(self.problem(id));
        }
        self.write_leading_comments(id);
        if self.skip_macro_expansion(id) {
            return Ok(());
        }
        self.write_expression(expression)?;
        self.write_trailing_comments(id, false);
        Ok(())
    }

    fn write_expression(&mut self, expression: &'a Expression) -> Result<()> {
        match expression {
            Expression::Id { name } => self.visit(*name)?,
            Expression::Literal { value, .. } => {
                self.scribe.print(value);
            }
            Expression::Binary {
                operator,
                operand1,
                operand2,
            } => {
                self.visit(*operand1)?;
                // Both operands came from the same macro call already printed.
                if self.macros.already_printed(self.ast, *operand2) {
                    return Ok(());
                }
                self.scribe.print(binary_operator_token(*operator));
                self.visit(*operand2)?;
            }
            Expression::Unary { operator, operand } => match operand {
                Some(operand) => {
                    self.scribe.print(prefix_operator_token(*operator));
                    self.visit(*operand)?;
                    self.scribe.print(postfix_operator_token(*operator));
                }
                None => {
                    self.scribe.print(prefix_operator_token(*operator).trim_end());
                }
            },
            Expression::Cast {
                kind,
                type_id,
                operand,
            } => match cast_keyword(*kind) {
                Some(keyword) => {
                    self.scribe.print(keyword);
                    self.visit(*type_id)?;
                    self.scribe.print(">(");
                    self.visit(*operand)?;
                    self.scribe.print_char(')');
                }
                None => {
                    self.scribe.print_char('(');
                    self.visit(*type_id)?;
                    self.scribe.print_char(')');
                    self.visit(*operand)?;
                }
            },
            Expression::Conditional {
                condition,
                positive,
                negative,
            } => {
                self.visit(*condition)?;
                match positive {
                    Some(positive) => {
                        self.scribe.print(" ? ");
                        self.visit(*positive)?;
                        self.scribe.print(" : ");
                    }
                    None => {
                        self.scribe.print(" ?: ");
                    }
                }
                self.visit(*negative)?;
            }
            Expression::FunctionCall {
                function,
                arguments,
            } => {
                self.visit(*function)?;
                self.scribe.print_char('(');
                self.visit_joined(arguments, ", ")?;
                self.scribe.print_char(')');
            }
            Expression::ArraySubscript { array, argument } => {
                self.visit(*array)?;
                self.scribe.print_char('[');
                self.visit(*argument)?;
                self.scribe.print_char(']');
            }
            Expression::FieldReference {
                owner,
                field,
                is_pointer_dereference,
                is_template,
            } => {
                self.visit(*owner)?;
                self.scribe
                    .print(if *is_pointer_dereference { "->" } else { "." });
                if *is_template {
                    self.scribe.print("template ");
                }
                self.visit(*field)?;
            }
            Expression::List { expressions } => self.visit_joined(expressions, ", ")?,
            Expression::TypeId { operator, type_id } => {
                self.scribe.print(type_id_operator_token(*operator));
                self.visit(*type_id)?;
                self.scribe.print_char(')');
            }
            Expression::New {
                is_global,
                placement,
                type_id,
                is_new_type_id,
                initializer,
            } => {
                if *is_global {
                    self.scribe.print("::");
                }
                self.scribe.print("new ");
                if let Some(arguments) = placement {
                    self.scribe.print_char('(');
                    self.visit_joined(arguments, ", ")?;
                    self.scribe.print(") ");
                }
                if *is_new_type_id {
                    self.visit(*type_id)?;
                } else {
                    self.scribe.print_char('(');
                    self.visit(*type_id)?;
                    self.scribe.print_char(')');
                }
                if let Some(initializer) = initializer {
                    self.visit(*initializer)?;
                }
            }
            Expression::Delete {
                is_global,
                is_vectored,
                operand,
            } => {
                if *is_global {
                    self.scribe.print("::");
                }
                self.scribe.print("delete ");
                if *is_vectored {
                    self.scribe.print("[] ");
                }
                self.visit(*operand)?;
            }
            Expression::SimpleTypeConstructor {
                decl_spec,
                initializer,
            } => {
                self.visit(*decl_spec)?;
                self.visit(*initializer)?;
            }
            Expression::Lambda {
                capture_default,
                captures,
                declarator,
                body,
            } => {
                self.scribe.print_char('[');
                if let Some(default) = capture_default {
                    self.scribe.print_char(match default {
                        CaptureDefault::ByCopy => '=',
                        CaptureDefault::ByReference => '&',
                    });
                    if !captures.is_empty() {
                        self.scribe.print(", ");
                    }
                }
                self.visit_joined(captures, ", ")?;
                self.scribe.print_char(']');
                if let Some(declarator) = declarator {
                    self.visit(*declarator)?;
                }
                self.scribe.print_space();
                self.state.compound_no_new_line = true;
                self.visit(*body)?;
                self.state.compound_no_new_line = false;
            }
            Expression::PackExpansion { pattern } => {
                self.visit(*pattern)?;
                self.scribe.print("...");
            }
            Expression::Fold { operator, lhs, rhs } => {
                let token = binary_operator_token(*operator);
                self.scribe.print_char('(');
                if let Some(lhs) = lhs {
                    self.visit(*lhs)?;
                    self.scribe.print(token);
                }
                self.scribe.print("...");
                if let Some(rhs) = rhs {
                    self.scribe.print(token);
                    self.visit(*rhs)?;
                }
                self.scribe.print_char(')');
            }
            Expression::CompoundStatement { statement } => {
                self.scribe.print_char('(');
                self.state.compound_no_new_line = true;
                self.visit(*statement)?;
                self.state.compound_no_new_line = false;
                self.scribe.print_char(')');
            }
            Expression::Problem(_) => {}
        }
        Ok(())
    }

    pub(crate) fn write_capture(&mut self, capture: &'a Capture) -> Result<()> {
        if capture.is_star_this {
            self.scribe.print("*this");
            return Ok(());
        }
        let Some(name) = capture.name else {
            self.scribe.print("this");
            return Ok(());
        };
        if capture.by_reference {
            self.scribe.print_char('&');
        }
        self.visit(name)?;
        if capture.is_pack_expansion {
            self.scribe.print("...");
        }
        if let Some(initializer) = capture.initializer {
            self.visit(initializer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use astwriter_ast::{
        Ast, BinaryOperator, Capture, CaptureDefault, CastKind, Expression, LiteralKind,
        Problem, SimpleType, TypeId, UnaryOperator,
    };

    use crate::emit::test_support::write;
    use crate::{WriterConfig, WriterError, WriterVisitor};

    fn type_id(ast: &mut Ast, ty: SimpleType) -> astwriter_ast::NodeId {
        let decl_spec = ast.simple_type(ty);
        ast.add(TypeId {
            decl_spec,
            declarator: None,
            is_pack_expansion: false,
        })
    }

    #[test]
    fn test_binary_and_unary() {
        let mut ast = Ast::new();
        let a = ast.id_expr("a");
        let increment = ast.add(Expression::Unary {
            operator: UnaryOperator::PostfixIncrement,
            operand: Some(a),
        });
        let b = ast.id_expr("b");
        let negated = ast.unary(UnaryOperator::Not, b);
        let both = ast.binary(BinaryOperator::LogicalAnd, increment, negated);
        let bracketed = ast.unary(UnaryOperator::BracketedPrimary, both);
        assert_eq!(write(&ast, bracketed), "(a++ && !b)");
    }

    #[test]
    fn test_bare_throw() {
        let mut ast = Ast::new();
        let throw = ast.add(Expression::Unary {
            operator: UnaryOperator::Throw,
            operand: None,
        });
        assert_eq!(write(&ast, throw), "throw");
    }

    #[test]
    fn test_casts() {
        let mut ast = Ast::new();
        let target = type_id(&mut ast, SimpleType::Int);
        let value = ast.id_expr("value");
        let named = ast.add(Expression::Cast {
            kind: CastKind::Static,
            type_id: target,
            operand: value,
        });
        assert_eq!(write(&ast, named), "static_cast<int>(value)");

        let target = type_id(&mut ast, SimpleType::Double);
        let value = ast.id_expr("value");
        let c_style = ast.add(Expression::Cast {
            kind: CastKind::CStyle,
            type_id: target,
            operand: value,
        });
        assert_eq!(write(&ast, c_style), "(double)value");
    }

    #[test]
    fn test_gnu_conditional_without_positive() {
        let mut ast = Ast::new();
        let condition = ast.id_expr("a");
        let negative = ast.id_expr("b");
        let conditional = ast.add(Expression::Conditional {
            condition,
            positive: None,
            negative,
        });
        assert_eq!(write(&ast, conditional), "a ?: b");
    }

    #[test]
    fn test_new_and_delete() {
        let mut ast = Ast::new();
        let target = type_id(&mut ast, SimpleType::Int);
        let buffer = ast.id_expr("buffer");
        let new = ast.add(Expression::New {
            is_global: true,
            placement: Some(vec![buffer]),
            type_id: target,
            is_new_type_id: true,
            initializer: None,
        });
        assert_eq!(write(&ast, new), "::new (buffer) int");

        let pointer = ast.id_expr("p");
        let delete = ast.add(Expression::Delete {
            is_global: false,
            is_vectored: true,
            operand: pointer,
        });
        assert_eq!(write(&ast, delete), "delete [] p");
    }

    #[test]
    fn test_lambda_keeps_body_open_for_call() {
        let mut ast = Ast::new();
        let x = ast.name("x");
        let capture = ast.add(Capture {
            name: Some(x),
            by_reference: true,
            is_star_this: false,
            is_pack_expansion: false,
            initializer: None,
        });
        let body = ast.compound(Vec::new());
        let lambda = ast.add(Expression::Lambda {
            capture_default: Some(CaptureDefault::ByCopy),
            captures: vec![capture],
            declarator: None,
            body,
        });
        let call = ast.add(Expression::FunctionCall {
            function: lambda,
            arguments: Vec::new(),
        });
        assert_eq!(write(&ast, call), "[=, &x] {\n}()");
    }

    #[test]
    fn test_fold_expressions() {
        let mut ast = Ast::new();
        let args = ast.id_expr("args");
        let right = ast.add(Expression::Fold {
            operator: BinaryOperator::Plus,
            lhs: Some(args),
            rhs: None,
        });
        assert_eq!(write(&ast, right), "(args + ...)");

        let init = ast.literal(LiteralKind::Integer, "0");
        let args = ast.id_expr("args");
        let binary = ast.add(Expression::Fold {
            operator: BinaryOperator::Plus,
            lhs: Some(init),
            rhs: Some(args),
        });
        assert_eq!(write(&ast, binary), "(0 + ... + args)");
    }

    #[test]
    fn test_problem_expression_aborts() {
        let mut ast = Ast::new();
        let problem = ast.add(Expression::Problem(Problem::new("expected expression")));
        let one = ast.int("1");
        let sum = ast.binary(BinaryOperator::Plus, one, problem);

        let mut visitor = WriterVisitor::new(&ast, &WriterConfig::default());
        let error = visitor.visit(sum).unwrap_err();
        assert!(matches!(error, WriterError::ProblemNode { node, .. } if node == problem));
    }
}
