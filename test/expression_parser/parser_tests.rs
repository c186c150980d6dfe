use mustache_compiler::expression_parser::ast::{Expr, MemberKey, ObjectKey};
use mustache_compiler::expression_parser::parser::Parser;
use mustache_compiler::expression_parser::serializer::serialize;
use mustache_compiler::{parse_expression, CompileError};

fn parse_ok(source: &str) -> Expr {
    Parser::new(source).parse().unwrap()
}

fn parse_err(source: &str) -> String {
    match Parser::new(source).parse() {
        Ok(expr) => panic!("parsed without error: {expr:?}"),
        Err(CompileError::Parse(err)) => err.msg,
        Err(err) => panic!("unexpected error kind: {err:?}"),
    }
}

fn ident(name: &str) -> Expr {
    Expr::Ident(name.into())
}

fn binary(op: &str, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op: op.into(),
        left: Box::new(left),
        right: Box::new(right),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse_ok("a + b * c"),
        binary("+", ident("a"), binary("*", ident("b"), ident("c")))
    );
}

#[test]
fn binary_operators_associate_left() {
    assert_eq!(
        parse_ok("a - b - c"),
        binary("-", binary("-", ident("a"), ident("b")), ident("c"))
    );
    assert_eq!(
        parse_ok("a / b % c"),
        binary("%", binary("/", ident("a"), ident("b")), ident("c"))
    );
}

#[test]
fn comparison_binds_looser_than_additive() {
    assert_eq!(
        parse_ok("a + 1 === b"),
        binary("===", binary("+", ident("a"), Expr::Number(1.0)), ident("b"))
    );
}

#[test]
fn logical_tiers_nest_correctly() {
    // && binds tighter than ||
    assert_eq!(
        parse_ok("a || b && c"),
        binary("||", ident("a"), binary("&&", ident("b"), ident("c")))
    );
}

#[test]
fn conditional_is_right_associative() {
    assert_eq!(
        parse_ok("a ? b : c ? d : e"),
        Expr::Conditional {
            test: Box::new(ident("a")),
            consequent: Box::new(ident("b")),
            alternate: Box::new(Expr::Conditional {
                test: Box::new(ident("c")),
                consequent: Box::new(ident("d")),
                alternate: Box::new(ident("e")),
            }),
        }
    );
}

#[test]
fn unary_operators_nest() {
    assert_eq!(
        parse_ok("!!a"),
        Expr::Unary {
            op: "!".into(),
            expr: Box::new(Expr::Unary {
                op: "!".into(),
                expr: Box::new(ident("a")),
            }),
        }
    );
    assert_eq!(
        parse_ok("-1 + 2"),
        binary(
            "+",
            Expr::Unary {
                op: "-".into(),
                expr: Box::new(Expr::Number(1.0)),
            },
            Expr::Number(2.0)
        )
    );
    assert_eq!(
        parse_ok("-a * b"),
        binary(
            "*",
            Expr::Unary {
                op: "-".into(),
                expr: Box::new(ident("a")),
            },
            ident("b")
        )
    );
}

#[test]
fn member_and_call_chains() {
    assert_eq!(
        parse_ok("a.b[0](c)"),
        Expr::Call {
            callee: Box::new(Expr::Member {
                object: Box::new(Expr::Member {
                    object: Box::new(ident("a")),
                    property: MemberKey::Dot("b".into()),
                }),
                property: MemberKey::Computed(Box::new(Expr::Number(0.0))),
            }),
            args: vec![ident("c")],
        }
    );
}

#[test]
fn call_with_no_arguments() {
    assert_eq!(
        parse_ok("f()"),
        Expr::Call {
            callee: Box::new(ident("f")),
            args: vec![],
        }
    );
}

#[test]
fn parentheses_group_explicitly() {
    assert_eq!(
        parse_ok("(a + b) * c"),
        binary(
            "*",
            Expr::Paren(Box::new(binary("+", ident("a"), ident("b")))),
            ident("c")
        )
    );
}

#[test]
fn object_literal_keys() {
    assert_eq!(
        parse_ok("{a: 1, 'b': 2, 3: c}"),
        Expr::Object {
            entries: vec![
                (ObjectKey::Ident("a".into()), Expr::Number(1.0)),
                (ObjectKey::Str("b".into()), Expr::Number(2.0)),
                (ObjectKey::Number(3.0), ident("c")),
            ],
        }
    );
}

#[test]
fn literals_tolerate_trailing_commas() {
    assert_eq!(
        parse_ok("[1, 2,]"),
        Expr::Array(vec![Expr::Number(1.0), Expr::Number(2.0)])
    );
    assert_eq!(
        parse_ok("{a: 1,}"),
        Expr::Object {
            entries: vec![(ObjectKey::Ident("a".into()), Expr::Number(1.0))],
        }
    );
}

#[test]
fn empty_literals() {
    assert_eq!(parse_ok("[]"), Expr::Array(vec![]));
    assert_eq!(parse_ok("{}"), Expr::Object { entries: vec![] });
}

#[test]
fn nested_structures() {
    let expr = parse_ok("items[i + 1].name || 'anonymous'");
    assert_eq!(serialize(&expr), "items[i + 1].name || 'anonymous'");
}

#[test]
fn trailing_tokens_are_an_error() {
    let msg = parse_err("a b");
    assert!(msg.contains("unexpected token"), "{msg}");
}

#[test]
fn unknown_character_is_an_error() {
    let msg = parse_err("a + @");
    assert!(msg.contains("unexpected token"), "{msg}");
}

#[test]
fn truncated_input_is_an_error() {
    let msg = parse_err("a +");
    assert!(msg.contains("unexpected end of expression"), "{msg}");
}

#[test]
fn missing_colon_in_conditional_is_an_error() {
    let msg = parse_err("a ? b");
    assert!(msg.contains("expected `:`"), "{msg}");
}

#[test]
fn unclosed_paren_is_an_error() {
    let msg = parse_err("(a");
    assert!(msg.contains("expected `)`"), "{msg}");
}

#[test]
fn crate_entry_point_parses_expressions() {
    assert_eq!(parse_expression("x * 2").unwrap(), parse_ok("x * 2"));
}
