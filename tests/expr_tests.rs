//! Expression engine tests over built token sequences.

mod common;

use blucc::ast::{Expr, ExprPrinter, StmtKind};
use blucc::parser::{ContextStack, Cursor, ExprError, ExprParser};
use common::TokenBuilder;

fn cursor_at_first_token(texts: &[&str]) -> Cursor {
    let mut builder = TokenBuilder::new();
    for (index, text) in texts.iter().enumerate() {
        builder = builder.token(1, (index + 1) as i32, text);
    }
    let mut cursor = Cursor::new(builder.build());
    cursor.advance().expect("step off SOF");
    cursor
}

fn method_body_context() -> ContextStack {
    let mut context = ContextStack::new();
    context.push(StmtKind::Class);
    context.push(StmtKind::MethodBlock);
    context
}

fn parse(texts: &[&str], context: &ContextStack) -> Result<Expr, ExprError> {
    let mut cursor = cursor_at_first_token(texts);
    ExprParser::new().parse(&mut cursor, context)
}

fn print(expr: &Expr) -> String {
    ExprPrinter::new().print(expr)
}

#[test]
fn literal_is_an_atom() {
    let expr = parse(&["42"], &ContextStack::new()).expect("parse literal");
    assert_eq!(print(&expr), "42");
}

#[test]
fn equality_binds_looser_than_addition() {
    let expr = parse(&["a", "==", "b", "+", "c"], &ContextStack::new()).expect("parse");
    assert_eq!(print(&expr), "(== a (+ b c))");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let expr = parse(&["a", "+", "b", "*", "c"], &ContextStack::new()).expect("parse");
    assert_eq!(print(&expr), "(+ a (* b c))");
}

#[test]
fn binary_operators_are_left_associative() {
    let expr = parse(&["a", "-", "b", "-", "c"], &ContextStack::new()).expect("parse");
    assert_eq!(print(&expr), "(- (- a b) c)");
}

#[test]
fn unary_nests_right_recursively() {
    let expr = parse(&["!", "!", "x"], &ContextStack::new()).expect("parse");
    assert_eq!(print(&expr), "(! (! x))");
}

#[test]
fn grouping_overrides_precedence_in_a_method_body() {
    let context = method_body_context();
    let expr = parse(&["(", "a", "+", "b", ")", "*", "c"], &context).expect("parse");
    assert_eq!(print(&expr), "(* (group (+ a b)) c)");
}

#[test]
fn grouping_keeps_its_open_and_close_tokens() {
    let context = method_body_context();
    let expr = parse(&["(", "x", ")"], &context).expect("parse");
    match expr {
        Expr::Grouping(grouping) => {
            assert_eq!(grouping.open.text(), "(");
            assert_eq!(grouping.open.column(), 1);
            assert_eq!(grouping.close.text(), ")");
            assert_eq!(grouping.close.column(), 3);
            assert_eq!(print(&grouping.inner), "x");
        }
        other => panic!("expected grouping, got {other:?}"),
    }
}

#[test]
fn grouping_is_refused_outside_its_contexts() {
    // At top level a parenthesis is not a grouped expression, so no rule can
    // begin at `(`.
    let err = parse(&["(", "x", ")"], &ContextStack::new()).unwrap_err();
    match err {
        ExprError::NoRuleMatches { token } => assert_eq!(token.text(), "("),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_close_paren_reports_the_open_token() {
    let context = method_body_context();
    let err = parse(&["(", "a", "+", "b"], &context).unwrap_err();
    match err {
        ExprError::MissingClosingParenthesis { open } => {
            assert_eq!(open.text(), "(");
            assert_eq!(open.line(), 1);
            assert_eq!(open.column(), 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn operator_with_no_operand_is_rejected() {
    let err = parse(&["=="], &ContextStack::new()).unwrap_err();
    match err {
        ExprError::NoRuleMatches { token } => assert_eq!(token.text(), "=="),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn binary_node_carries_its_operator_token() {
    let expr = parse(&["a", "!=", "b"], &ContextStack::new()).expect("parse");
    match expr {
        Expr::Binary(binary) => {
            assert_eq!(binary.operator.text(), "!=");
            assert_eq!(binary.operator.column(), 2);
        }
        other => panic!("expected binary, got {other:?}"),
    }
}

#[test]
fn can_start_agrees_with_parse() {
    let engine = ExprParser::new();
    let context = ContextStack::new();

    let cursor = cursor_at_first_token(&["x"]);
    assert!(engine.can_start(&cursor, &context));

    let cursor = cursor_at_first_token(&["{"]);
    assert!(!engine.can_start(&cursor, &context));

    // `(` can begin an expression only inside a grouping context.
    let cursor = cursor_at_first_token(&["(", "x", ")"]);
    assert!(!engine.can_start(&cursor, &context));
    assert!(engine.can_start(&cursor, &method_body_context()));
}

#[test]
fn parse_stops_at_the_first_non_expression_token() {
    let mut cursor = cursor_at_first_token(&["a", "+", "b", ")"]);
    let context = ContextStack::new();
    let expr = ExprParser::new()
        .parse(&mut cursor, &context)
        .expect("parse");
    assert_eq!(print(&expr), "(+ a b)");
    assert!(cursor.current_token_matches(")"));
}
