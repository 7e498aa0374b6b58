use astwriter_ast::{Designator, Initializer, NodeId};

use crate::{Result, WriterVisitor};

impl<'a> WriterVisitor<'a> {
    pub(crate) fn visit_initializer(&mut self, id: NodeId, initializer: &'a Initializer) -> Result<()> {
        self.write_leading_comments(id);
        if self.skip_macro_expansion(id) {
            return Ok(());
        }
        match initializer {
            Initializer::Equals { clause } => {
                self.scribe.print(" = ");
                self.visit(*clause)?;
            }
            Initializer::List { clauses } => {
                self.scribe.print_char('{');
                self.visit_joined(clauses, ", ")?;
                self.scribe.print_char('}');
            }
            Initializer::Constructor { arguments } => {
                self.scribe.print_char('(');
                self.visit_joined(arguments, ", ")?;
                self.scribe.print_char(')');
            }
            Initializer::Designated {
                designators,
                operand,
            } => {
                for designator in designators {
                    self.visit(*designator)?;
                }
                self.scribe.print(" = ");
                self.visit(*operand)?;
            }
            Initializer::MemberInitializer {
                member,
                initializer,
                is_pack_expansion,
            } => {
                self.visit(*member)?;
                self.visit(*initializer)?;
                if *is_pack_expansion {
                    self.scribe.print("...");
                }
            }
        }
        self.write_trailing_comments(id, false);
        Ok(())
    }

    pub(crate) fn write_designator(&mut self, designator: &'a Designator) -> Result<()> {
        match *designator {
            Designator::Field { name } => {
                self.scribe.print_char('.');
                self.visit(name)?;
            }
            Designator::Array { subscript } => {
                self.scribe.print_char('[');
                self.visit(subscript)?;
                self.scribe.print_char(']');
            }
            Designator::ArrayRange { floor, ceiling } => {
                self.scribe.print_char('[');
                self.visit(floor)?;
                self.scribe.print(" ... ");
                self.visit(ceiling)?;
                self.scribe.print_char(']');
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use astwriter_ast::{Ast, Designator, Initializer};

    use crate::emit::test_support::write;

    #[test]
    fn test_designated_list() {
        let mut ast = Ast::new();
        let x = ast.name("x");
        let field = ast.add(Designator::Field { name: x });
        let one = ast.int("1");
        let by_field = ast.add(Initializer::Designated {
            designators: vec![field],
            operand: one,
        });
        let two = ast.int("2");
        let index = ast.add(Designator::Array { subscript: two });
        let three = ast.int("3");
        let by_index = ast.add(Initializer::Designated {
            designators: vec![index],
            operand: three,
        });
        let list = ast.add(Initializer::List {
            clauses: vec![by_field, by_index],
        });
        assert_eq!(write(&ast, list), "{.x = 1, [2] = 3}");
    }

    #[test]
    fn test_range_designator() {
        let mut ast = Ast::new();
        let floor = ast.int("0");
        let ceiling = ast.int("9");
        let range = ast.add(Designator::ArrayRange { floor, ceiling });
        let value = ast.int("-1");
        let initializer = ast.add(Initializer::Designated {
            designators: vec![range],
            operand: value,
        });
        assert_eq!(write(&ast, initializer), "[0 ... 9] = -1");
    }

    #[test]
    fn test_member_initializer() {
        let mut ast = Ast::new();
        let member = ast.name("count_");
        let zero = ast.int("0");
        let arguments = ast.add(Initializer::Constructor {
            arguments: vec![zero],
        });
        let initializer = ast.add(Initializer::MemberInitializer {
            member,
            initializer: arguments,
            is_pack_expansion: false,
        });
        assert_eq!(write(&ast, initializer), "count_(0)");
    }
}
