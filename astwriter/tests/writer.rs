use astwriter::{AstWriter, WriterError};
use astwriter_ast::{
    Ast, AstDocument, BinaryOperator, Declaration, FunctionBody, FunctionDefinition, NodeCommentMap,
    NodeId, Problem, SimpleType, Statement,
};

fn function(ast: &mut Ast, return_type: SimpleType, name: &str, statements: Vec<NodeId>) -> NodeId {
    let decl_spec = ast.simple_type(return_type);
    let int = ast.simple_type(SimpleType::Int);
    let parameter = ast.parameter(int, "n");
    let declarator = ast.function_declarator(name, vec![parameter]);
    let body = ast.compound(statements);
    ast.add(Declaration::FunctionDefinition(FunctionDefinition {
        attributes: Vec::new(),
        decl_spec,
        declarator,
        member_initializers: Vec::new(),
        body_kind: FunctionBody::Provided,
        body: Some(body),
        catch_handlers: None,
    }))
}

fn sample_unit(ast: &mut Ast) -> NodeId {
    let int = ast.simple_type(SimpleType::Int);
    let zero = ast.int("0");
    let counter = ast.initialized_declarator("counter", zero);
    let global = ast.simple_declaration(int, vec![counter]);

    let n = ast.id_expr("n");
    let zero = ast.int("0");
    let condition = ast.binary(BinaryOperator::GreaterThan, n, zero);
    let counter = ast.id_expr("counter");
    let n = ast.id_expr("n");
    let add = ast.binary(BinaryOperator::PlusAssign, counter, n);
    let then_clause = ast.expression_statement(add);
    let check = ast.add(Statement::If {
        is_constexpr: false,
        init: None,
        condition,
        then_clause,
        else_clause: None,
    });
    let counter = ast.id_expr("counter");
    let ret = ast.return_statement(Some(counter));
    let accumulate = function(ast, SimpleType::Int, "accumulate", vec![check, ret]);

    let reset = function(ast, SimpleType::Void, "reset", Vec::new());
    ast.translation_unit("counter.c", vec![global, accumulate, reset])
}

#[test]
fn test_translation_unit_layout() {
    let mut ast = Ast::new();
    let unit = sample_unit(&mut ast);
    let output = AstWriter::new().write(&ast, unit).unwrap();
    insta::assert_snapshot!(output, @r"
int counter = 0;

int accumulate(int n)
{
    if (n > 0)
        counter += n;

    return counter;
}

void reset(int n)
{
}
");
}

#[test]
fn test_writing_is_idempotent() {
    let mut ast = Ast::new();
    let unit = sample_unit(&mut ast);
    let writer = AstWriter::new();
    assert_eq!(writer.write(&ast, unit).unwrap(), writer.write(&ast, unit).unwrap());
}

#[test]
fn test_document_round_trip_renders_the_same() {
    let mut ast = Ast::new();
    let unit = sample_unit(&mut ast);
    let expected = AstWriter::new().write(&ast, unit).unwrap();

    let json = AstDocument::new(ast, unit).to_json_pretty().unwrap();
    let document = AstDocument::from_json(&json).unwrap();
    let output = AstWriter::for_document(&document)
        .write_document(&document)
        .unwrap();
    assert_eq!(output, expected);
}

#[test]
fn test_while_body_is_indented_below_header() {
    let mut ast = Ast::new();
    let condition = ast.id_expr("busy");
    let call = ast.call("spin", Vec::new());
    let body = ast.expression_statement(call);
    let loop_statement = ast.add(Statement::While { condition, body });
    let output = AstWriter::new().write(&ast, loop_statement).unwrap();
    assert_eq!(output, "while (busy)\n    spin();\n");
}

#[test]
fn test_problem_node_yields_no_output() {
    let mut ast = Ast::new();
    let int = ast.simple_type(SimpleType::Int);
    let x = ast.declarator("x");
    let fine = ast.simple_declaration(int, vec![x]);
    let broken = ast.add(Declaration::Problem(Problem::new("unterminated declaration")));
    let unit = ast.translation_unit("broken.c", vec![fine, broken]);

    let error = AstWriter::new().write(&ast, unit).unwrap_err();
    assert_eq!(error.node(), broken);
    assert!(matches!(
        error,
        WriterError::ProblemNode { category: "declaration", .. }
    ));
    assert_eq!(
        error.to_string(),
        format!("tree contains a problem declaration at {broken}: unterminated declaration")
    );
}

#[test]
fn test_comments_are_placed_around_nodes() {
    let mut ast = Ast::new();
    let int = ast.simple_type(SimpleType::Int);
    let x = ast.declarator("x");
    let declaration = ast.simple_declaration(int, vec![x]);
    let call = ast.call("work", Vec::new());
    let statement = ast.expression_statement(call);
    let body = ast.compound(vec![statement]);

    let mut comments = NodeCommentMap::new();
    comments.add_leading(declaration, "/* state */");
    comments.add_trailing(declaration, "// starts at zero");
    comments.add_freestanding(body, "// more work later");

    let unit = ast.translation_unit("c.c", vec![declaration]);
    let writer = AstWriter::new().with_comments(&comments);
    assert_eq!(
        writer.write(&ast, unit).unwrap(),
        "/* state */\nint x; // starts at zero\n"
    );
    assert_eq!(
        writer.write(&ast, body).unwrap(),
        "{\n    work();\n    // more work later\n}\n"
    );
}
