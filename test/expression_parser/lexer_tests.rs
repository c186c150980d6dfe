use mustache_compiler::expression_parser::lexer::{ExprTokenKind, Lexer};

fn tokenize(source: &str) -> Vec<ExprTokenKind> {
    let mut lexer = Lexer::new(source);
    let mut kinds = Vec::new();
    loop {
        let token = lexer.next();
        if token.is_eos() {
            break;
        }
        kinds.push(token.kind);
    }
    kinds
}

#[test]
fn lexes_idents_and_numbers() {
    assert_eq!(
        tokenize("foo _bar $baz9 42 3.14 .5 2e3"),
        vec![
            ExprTokenKind::Ident("foo".into()),
            ExprTokenKind::Ident("_bar".into()),
            ExprTokenKind::Ident("$baz9".into()),
            ExprTokenKind::Number(42.0),
            ExprTokenKind::Number(3.14),
            ExprTokenKind::Number(0.5),
            ExprTokenKind::Number(2000.0),
        ]
    );
}

#[test]
fn lexes_strings_with_either_quote() {
    assert_eq!(
        tokenize(r#"'single' "double" ''"#),
        vec![
            ExprTokenKind::Str("single".into()),
            ExprTokenKind::Str("double".into()),
            ExprTokenKind::Str("".into()),
        ]
    );
}

#[test]
fn multi_char_symbols_win_over_prefixes() {
    assert_eq!(
        tokenize("=== !== == != <= >= && ||"),
        vec![
            ExprTokenKind::Symbol("===".into()),
            ExprTokenKind::Symbol("!==".into()),
            ExprTokenKind::Symbol("==".into()),
            ExprTokenKind::Symbol("!=".into()),
            ExprTokenKind::Symbol("<=".into()),
            ExprTokenKind::Symbol(">=".into()),
            ExprTokenKind::Symbol("&&".into()),
            ExprTokenKind::Symbol("||".into()),
        ]
    );
}

#[test]
fn whitespace_never_surfaces() {
    assert_eq!(
        tokenize("  a  \n  +  b  "),
        vec![
            ExprTokenKind::Ident("a".into()),
            ExprTokenKind::Symbol("+".into()),
            ExprTokenKind::Ident("b".into()),
        ]
    );
}

#[test]
fn unrecognized_characters_become_unknown_tokens() {
    assert_eq!(
        tokenize("a @ b"),
        vec![
            ExprTokenKind::Ident("a".into()),
            ExprTokenKind::Unknown("@".into()),
            ExprTokenKind::Ident("b".into()),
        ]
    );
}

#[test]
fn eos_repeats_at_end() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next().kind, ExprTokenKind::Ident("x".into()));
    assert!(lexer.next().is_eos());
    assert!(lexer.next().is_eos());
}

#[test]
fn lookahead_does_not_consume() {
    let mut lexer = Lexer::new("a + b");
    assert_eq!(lexer.lookahead(2).kind, ExprTokenKind::Symbol("+".into()));
    assert_eq!(lexer.next().kind, ExprTokenKind::Ident("a".into()));
    assert_eq!(lexer.peek().kind, ExprTokenKind::Symbol("+".into()));
}

#[test]
fn tokens_carry_pos_and_frame() {
    let mut lexer = Lexer::new("ab + 1");
    let first = lexer.next();
    assert_eq!((first.pos, first.frame.as_str()), (0, "ab"));
    let second = lexer.next();
    assert_eq!((second.pos, second.frame.as_str()), (3, "+"));
}
