use super::*;
use crate::ast::Expression;
use crate::lexer::Lexer;

fn parse(input: &str) -> Program {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "parser had errors: {:?}",
        parser.errors()
    );
    program
}

#[test]
fn let_statements() {
    let program = parse("let x = 5;\nlet y = 10;\nlet foobar = 838383;");
    assert_eq!(program.statements.len(), 3);
    for (stmt, name) in program.statements.iter().zip(["x", "y", "foobar"]) {
        match stmt {
            Statement::Let { name: id, .. } => assert_eq!(id.name, name),
            other => panic!("expected a let statement, got {other:?}"),
        }
    }
}

#[test]
fn let_statement_errors_are_collected_without_aborting() {
    let lexer = Lexer::new("let x 5;\nlet = 10;\nlet 838383;");
    let mut parser = Parser::new(lexer);
    parser.parse_program();
    assert!(!parser.errors().is_empty());
}

#[test]
fn return_statements() {
    let program = parse("return 5;\nreturn 10;\nreturn 993322;");
    assert_eq!(program.statements.len(), 3);
    for stmt in &program.statements {
        assert!(matches!(stmt, Statement::Return { .. }));
    }
}

#[test]
fn identifier_expression() {
    let program = parse("foobar;");
    assert_eq!(program.statements.len(), 1);
    match &program.statements[0] {
        Statement::Expression {
            expression: Expression::Identifier(ident),
            ..
        } => assert_eq!(ident.name, "foobar"),
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn integer_literal_expression() {
    let program = parse("5;");
    match &program.statements[0] {
        Statement::Expression {
            expression: Expression::IntegerLiteral { value, .. },
            ..
        } => assert_eq!(*value, 5),
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn string_literal_expression() {
    let program = parse(r#""hello world";"#);
    match &program.statements[0] {
        Statement::Expression {
            expression: Expression::StringLiteral { value, .. },
            ..
        } => assert_eq!(value, "hello world"),
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn prefix_expressions() {
    for (input, operator, value) in [("!5;", "!", "5"), ("-15;", "-", "15")] {
        let program = parse(input);
        match &program.statements[0] {
            Statement::Expression {
                expression: Expression::Prefix { operator: op, right, .. },
                ..
            } => {
                assert_eq!(op, operator);
                assert_eq!(right.to_string(), value);
            }
            other => panic!("unexpected statement: {other:?}"),
        }
    }
}

#[test]
fn infix_expressions() {
    let cases = [
        ("5 + 5;", "5", "+", "5"),
        ("5 - 5;", "5", "-", "5"),
        ("5 * 5;", "5", "*", "5"),
        ("5 / 5;", "5", "/", "5"),
        ("5 > 5;", "5", ">", "5"),
        ("5 < 5;", "5", "<", "5"),
        ("5 == 5;", "5", "==", "5"),
        ("5 != 5;", "5", "!=", "5"),
    ];

    for (input, left, operator, right) in cases {
        let program = parse(input);
        match &program.statements[0] {
            Statement::Expression {
                expression:
                    Expression::Infix {
                        left: l,
                        operator: op,
                        right: r,
                        ..
                    },
                ..
            } => {
                assert_eq!(l.to_string(), left);
                assert_eq!(op, operator);
                assert_eq!(r.to_string(), right);
            }
            other => panic!("unexpected statement: {other:?}"),
        }
    }
}

#[test]
fn operator_precedence_parsing() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        (
            "a + add(b * c) + d",
            "((a + add((b * c))) + d)",
        ),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        (
            "add(a + b + c * d / f + g)",
            "add((((a + b) + ((c * d) / f)) + g))",
        ),
    ];

    for (input, expected) in cases {
        let program = parse(input);
        assert_eq!(program.to_string(), expected, "input: {input}");
    }
}

#[test]
fn boolean_expression() {
    let program = parse("true; false;");
    match &program.statements[0] {
        Statement::Expression {
            expression: Expression::Boolean { value, .. },
            ..
        } => assert!(*value),
        other => panic!("unexpected statement: {other:?}"),
    }
    match &program.statements[1] {
        Statement::Expression {
            expression: Expression::Boolean { value, .. },
            ..
        } => assert!(!*value),
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn if_expression() {
    let program = parse("if (x < y) { x }");
    match &program.statements[0] {
        Statement::Expression {
            expression:
                Expression::If {
                    condition,
                    consequence,
                    alternative,
                    ..
                },
            ..
        } => {
            assert_eq!(condition.to_string(), "(x < y)");
            assert_eq!(consequence.statements.len(), 1);
            assert!(alternative.is_none());
        }
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn if_else_expression() {
    let program = parse("if (x < y) { x } else { y }");
    match &program.statements[0] {
        Statement::Expression {
            expression: Expression::If { alternative, .. },
            ..
        } => assert!(alternative.is_some()),
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn function_literal_parsing() {
    let program = parse("fn(x, y) { x + y; }");
    match &program.statements[0] {
        Statement::Expression {
            expression: Expression::Function(func),
            ..
        } => {
            assert_eq!(func.parameters.len(), 2);
            assert_eq!(func.parameters[0].name, "x");
            assert_eq!(func.parameters[1].name, "y");
            assert_eq!(func.body.statements.len(), 1);
        }
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn function_parameter_parsing() {
    let cases = [
        ("fn() {};", vec![]),
        ("fn(x) {};", vec!["x"]),
        ("fn(x, y, z) {};", vec!["x", "y", "z"]),
    ];

    for (input, expected) in cases {
        let program = parse(input);
        match &program.statements[0] {
            Statement::Expression {
                expression: Expression::Function(func),
                ..
            } => {
                let names: Vec<&str> = func.parameters.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(names, expected);
            }
            other => panic!("unexpected statement: {other:?}"),
        }
    }
}

#[test]
fn call_expression_parsing() {
    let program = parse("add(1, 2 * 3, 4 + 5);");
    match &program.statements[0] {
        Statement::Expression {
            expression:
                Expression::Call {
                    function,
                    arguments,
                    ..
                },
            ..
        } => {
            assert_eq!(function.to_string(), "add");
            assert_eq!(arguments.len(), 3);
            assert_eq!(arguments[0].to_string(), "1");
            assert_eq!(arguments[1].to_string(), "(2 * 3)");
            assert_eq!(arguments[2].to_string(), "(4 + 5)");
        }
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn missing_prefix_parse_function_is_reported() {
    let lexer = Lexer::new(")");
    let mut parser = Parser::new(lexer);
    parser.parse_program();
    assert_eq!(
        parser.errors(),
        &["no prefix parse function for RParen found".to_string()]
    );
}
