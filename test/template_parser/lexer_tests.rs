use mustache_compiler::template_parser::lexer::Lexer;
use mustache_compiler::template_parser::tokens::TokenKind;
use mustache_compiler::ParseOptions;

fn tokenize(source: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(source, ParseOptions::default());
    let mut kinds = Vec::new();
    loop {
        let token = lexer.next().unwrap();
        if token.is_eos() {
            break;
        }
        kinds.push(token.kind);
    }
    kinds
}

fn significant(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .into_iter()
        .filter(|kind| !matches!(kind, TokenKind::Whitespace(_)))
        .collect()
}

fn lex_error(source: &str) -> String {
    let mut lexer = Lexer::new(source, ParseOptions::default());
    loop {
        match lexer.next() {
            Ok(token) if token.is_eos() => panic!("lexed without error: {source}"),
            Ok(_) => {}
            Err(err) => return err.msg,
        }
    }
}

#[test]
fn lexes_plain_text() {
    assert_eq!(
        tokenize("hello world"),
        vec![TokenKind::Text("hello world".into())]
    );
}

#[test]
fn lexes_tag_with_attributes() {
    assert_eq!(
        significant(r#"<div class="a" id='b' hidden data-x=1>x</div>"#),
        vec![
            TokenKind::TagOpen { name: "div".into() },
            TokenKind::Attribute {
                name: "class".into(),
                value: Some("a".into()),
            },
            TokenKind::Attribute {
                name: "id".into(),
                value: Some("b".into()),
            },
            TokenKind::Attribute {
                name: "hidden".into(),
                value: None,
            },
            TokenKind::Attribute {
                name: "data-x".into(),
                value: Some("1".into()),
            },
            TokenKind::TagEnd {
                is_self_closed: false,
            },
            TokenKind::Text("x".into()),
            TokenKind::TagClose { name: "div".into() },
        ]
    );
}

#[test]
fn lexes_self_closing_tag() {
    assert_eq!(
        significant("<img src=a.png/>"),
        vec![
            TokenKind::TagOpen { name: "img".into() },
            TokenKind::Attribute {
                name: "src".into(),
                value: Some("a.png".into()),
            },
            TokenKind::TagEnd {
                is_self_closed: true,
            },
        ]
    );
}

#[test]
fn lexes_namespaced_tag_name() {
    assert_eq!(
        significant("<svg:rect/>"),
        vec![
            TokenKind::TagOpen {
                name: "svg:rect".into(),
            },
            TokenKind::TagEnd {
                is_self_closed: true,
            },
        ]
    );
}

#[test]
fn lexes_comment() {
    assert_eq!(
        tokenize("<!-- a <b> {c} -->"),
        vec![TokenKind::Comment {
            content: " a <b> {c} ".into(),
        }]
    );
}

#[test]
fn lexes_if_directive() {
    assert_eq!(
        significant("{#if visible}yes{/if}"),
        vec![
            TokenKind::MustacheOpen { name: "if".into() },
            TokenKind::Ident("visible".into()),
            TokenKind::MustacheEnd,
            TokenKind::Text("yes".into()),
            TokenKind::MustacheClose { name: "if".into() },
        ]
    );
}

#[test]
fn lexes_interpolation_expression() {
    assert_eq!(
        significant("{ user.name === 'x' }"),
        vec![
            TokenKind::InterpolationOpen,
            TokenKind::Ident("user".into()),
            TokenKind::Symbol(".".into()),
            TokenKind::Ident("name".into()),
            TokenKind::Symbol("===".into()),
            TokenKind::Str("x".into()),
            TokenKind::MustacheEnd,
        ]
    );
}

#[test]
fn lexes_number_forms() {
    assert_eq!(
        significant("{ 1 + 2.5 + .5 + 1e3 }"),
        vec![
            TokenKind::InterpolationOpen,
            TokenKind::Number(1.0),
            TokenKind::Symbol("+".into()),
            TokenKind::Number(2.5),
            TokenKind::Symbol("+".into()),
            TokenKind::Number(0.5),
            TokenKind::Symbol("+".into()),
            TokenKind::Number(1000.0),
            TokenKind::MustacheEnd,
        ]
    );
}

#[test]
fn nested_braces_stay_inside_the_expression() {
    // the outer `}` closes the interpolation only once the inner object
    // literal's braces are balanced
    assert_eq!(
        significant("{ {a: 1} }"),
        vec![
            TokenKind::InterpolationOpen,
            TokenKind::Symbol("{".into()),
            TokenKind::Ident("a".into()),
            TokenKind::Symbol(":".into()),
            TokenKind::Number(1.0),
            TokenKind::Symbol("}".into()),
            TokenKind::MustacheEnd,
        ]
    );
}

#[test]
fn brace_counter_balances_across_deeper_nesting() {
    assert_eq!(
        significant("{ {a:{b:1}} }"),
        vec![
            TokenKind::InterpolationOpen,
            TokenKind::Symbol("{".into()),
            TokenKind::Ident("a".into()),
            TokenKind::Symbol(":".into()),
            TokenKind::Symbol("{".into()),
            TokenKind::Ident("b".into()),
            TokenKind::Symbol(":".into()),
            TokenKind::Number(1.0),
            TokenKind::Symbol("}".into()),
            TokenKind::Symbol("}".into()),
            TokenKind::MustacheEnd,
        ]
    );
}

#[test]
fn brace_depth_resets_between_mustaches() {
    assert_eq!(
        significant("{ {a: 1} }{ b }"),
        vec![
            TokenKind::InterpolationOpen,
            TokenKind::Symbol("{".into()),
            TokenKind::Ident("a".into()),
            TokenKind::Symbol(":".into()),
            TokenKind::Number(1.0),
            TokenKind::Symbol("}".into()),
            TokenKind::MustacheEnd,
            TokenKind::InterpolationOpen,
            TokenKind::Ident("b".into()),
            TokenKind::MustacheEnd,
        ]
    );
}

#[test]
fn unmatched_close_brace_is_an_error() {
    let msg = lex_error("before } after");
    assert!(msg.contains("unexpected close brace"), "{msg}");
}

#[test]
fn reports_position_and_code_frame() {
    let mut lexer = Lexer::new("ok }", ParseOptions::default());
    lexer.next().unwrap(); // "ok "
    let err = lexer.next().unwrap_err();
    assert_eq!(err.pos, 3);
    assert!(err.code_frame.contains("1 | ok }"));
}

#[test]
fn lookahead_does_not_consume() {
    let mut lexer = Lexer::new("<a>b</a>", ParseOptions::default());
    let second = lexer.lookahead(2).unwrap();
    assert_eq!(
        second.kind,
        TokenKind::TagEnd {
            is_self_closed: false,
        }
    );
    let first = lexer.next().unwrap();
    assert_eq!(first.kind, TokenKind::TagOpen { name: "a".into() });
    assert_eq!(lexer.next().unwrap().kind, second.kind);
}

#[test]
fn tokens_carry_pos_and_frame() {
    let mut lexer = Lexer::new("ab<i>", ParseOptions::default());
    let text = lexer.next().unwrap();
    assert_eq!((text.pos, text.frame.as_str()), (0, "ab"));
    let open = lexer.next().unwrap();
    assert_eq!((open.pos, open.frame.as_str()), (2, "<i"));
}
