use pl0js::ast::{Expr, Operand, Operator};
use pl0js::frontend::lexer::scan;
use pl0js::frontend::parser::parse_expression;
use pl0js::frontend::resolver::{ExpressionResolver, RpnItem};
use pl0js::frontend::token::{Token, TokenKind};
use pl0js::utils::errors::{Pl0Error, Pl0Result};

// Helper function to scan and resolve a standalone expression
fn resolve(source: &str) -> Pl0Result<Expr> {
    let tokens = scan(source)?;
    parse_expression(&tokens)
}

fn num(n: i64) -> Expr {
    Expr::number(n)
}

fn bin(op: Operator, left: Expr, right: Expr) -> Expr {
    Expr::binary(op, left, right)
}

fn op_token(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text, 1)
}

#[test]
fn test_multiplication_binds_tighter() -> Pl0Result<()> {
    let expected = bin(Operator::Plus, num(1), bin(Operator::Multiply, num(2), num(3)));
    assert_eq!(resolve("1+2*3")?, expected);
    Ok(())
}

#[test]
fn test_parentheses_override_precedence() -> Pl0Result<()> {
    let expected = bin(Operator::Multiply, bin(Operator::Plus, num(1), num(2)), num(3));
    assert_eq!(resolve("(1+2)*3")?, expected);
    Ok(())
}

#[test]
fn test_subtraction_is_left_associative() -> Pl0Result<()> {
    let expected = bin(Operator::Minus, bin(Operator::Minus, num(8), num(3)), num(2));
    assert_eq!(resolve("8-3-2")?, expected);
    Ok(())
}

#[test]
fn test_division_keeps_operand_order() -> Pl0Result<()> {
    let expected = bin(Operator::Divide, bin(Operator::Divide, num(16), num(4)), num(2));
    assert_eq!(resolve("16/4/2")?, expected);
    assert_eq!(resolve("16/4/2")?.to_string(), "DIV(DIV(16, 4), 2)");
    Ok(())
}

#[test]
fn test_mixed_precedence_levels() -> Pl0Result<()> {
    // a - b * c + d  =>  (a - (b * c)) + d
    let expected = bin(
        Operator::Plus,
        bin(
            Operator::Minus,
            Expr::ident("a"),
            bin(Operator::Multiply, Expr::ident("b"), Expr::ident("c")),
        ),
        Expr::ident("d"),
    );
    assert_eq!(resolve("a - b * c + d")?, expected);
    Ok(())
}

#[test]
fn test_leading_unary_minus() -> Pl0Result<()> {
    let expected = bin(Operator::Plus, Expr::unary(Operator::UnaryMinus, num(1)), num(2));
    assert_eq!(resolve("-1+2")?, expected);
    Ok(())
}

#[test]
fn test_leading_sign_covers_first_term() -> Pl0Result<()> {
    let expected = Expr::unary(Operator::UnaryMinus, bin(Operator::Multiply, num(2), num(3)));
    assert_eq!(resolve("-2*3")?, expected);

    let expected = bin(Operator::Minus, Expr::unary(Operator::UnaryPlus, Expr::ident("x")), num(1));
    assert_eq!(resolve("+x-1")?, expected);
    Ok(())
}

#[test]
fn test_unary_inside_parentheses() -> Pl0Result<()> {
    // 2 * (-3 + 1)
    let expected = bin(
        Operator::Multiply,
        num(2),
        bin(Operator::Plus, Expr::unary(Operator::UnaryMinus, num(3)), num(1)),
    );
    assert_eq!(resolve("2*(-3+1)")?, expected);
    Ok(())
}

#[test]
fn test_nested_parentheses() -> Pl0Result<()> {
    let expected = bin(
        Operator::Minus,
        num(10),
        bin(Operator::Minus, num(4), bin(Operator::Minus, num(3), num(1))),
    );
    assert_eq!(resolve("10-(4-(3-1))")?, expected);
    Ok(())
}

#[test]
fn test_unclosed_paren() {
    let result = resolve("(1+2");
    assert!(matches!(result, Err(Pl0Error::ParenMismatch { .. })), "got {:?}", result);
}

#[test]
fn test_surplus_closing_paren() {
    let result = resolve("1+2)");
    assert!(matches!(result, Err(Pl0Error::ParenMismatch { .. })), "got {:?}", result);
}

#[test]
fn test_complete_reports_open_paren() -> Pl0Result<()> {
    let mut resolver = ExpressionResolver::new();
    resolver.process(&op_token(TokenKind::LParen, "("))?;
    resolver.process(&Token::number(1, "1", 1))?;
    let result = resolver.complete();
    assert!(matches!(result, Err(Pl0Error::ParenMismatch { .. })), "got {:?}", result);
    Ok(())
}

#[test]
fn test_unrecognized_operator_token() {
    let mut resolver = ExpressionResolver::new();
    let result = resolver.process(&op_token(TokenKind::Semicolon, ";"));
    match result {
        Err(Pl0Error::ExpressionError { message, line }) => {
            assert!(message.contains("';'"), "message was {}", message);
            assert_eq!(line, 1);
        }
        other => panic!("Expected an ExpressionError, but got: {:?}", other),
    }
}

#[test]
fn test_rpn_queue() -> Pl0Result<()> {
    let mut resolver = ExpressionResolver::new();
    for token in scan("1+2*3")?.iter().filter(|t| t.kind != TokenKind::Eof) {
        resolver.process(token)?;
    }
    resolver.complete()?;
    assert_eq!(
        resolver.rpn(),
        &[
            RpnItem::Operand(Operand::Number(1)),
            RpnItem::Operand(Operand::Number(2)),
            RpnItem::Operand(Operand::Number(3)),
            RpnItem::Operator(Operator::Multiply),
            RpnItem::Operator(Operator::Plus),
        ]
    );
    Ok(())
}

#[test]
fn test_tree_is_non_destructive() -> Pl0Result<()> {
    let mut resolver = ExpressionResolver::new();
    resolver.process(&Token::new(TokenKind::Ident, "x", 1))?;
    resolver.process(&op_token(TokenKind::Minus, "-"))?;
    resolver.process(&Token::number(1, "1", 1))?;
    resolver.complete()?;
    let first = resolver.tree()?;
    let second = resolver.tree()?;
    assert_eq!(first, second);
    assert_eq!(first, bin(Operator::Minus, Expr::ident("x"), num(1)));
    Ok(())
}

#[test]
fn test_tree_requires_complete() -> Pl0Result<()> {
    let mut resolver = ExpressionResolver::new();
    resolver.process(&Token::number(7, "7", 1))?;
    assert!(matches!(resolver.tree(), Err(Pl0Error::ExpressionError { .. })));
    Ok(())
}

#[test]
fn test_missing_operand() -> Pl0Result<()> {
    let mut resolver = ExpressionResolver::new();
    resolver.process(&Token::number(1, "1", 1))?;
    resolver.process(&op_token(TokenKind::Plus, "+"))?;
    resolver.complete()?;
    assert!(matches!(resolver.tree(), Err(Pl0Error::ExpressionError { .. })));
    Ok(())
}

#[test]
fn test_dangling_operands() -> Pl0Result<()> {
    let mut resolver = ExpressionResolver::new();
    resolver.process(&Token::number(1, "1", 1))?;
    resolver.process(&Token::number(2, "2", 1))?;
    resolver.complete()?;
    assert!(matches!(resolver.tree(), Err(Pl0Error::ExpressionError { .. })));
    Ok(())
}

#[test]
fn test_missing_factor_is_a_syntax_error() {
    let result = resolve("1+*2");
    match result {
        Err(Pl0Error::SyntaxError { expected, found, .. }) => {
            assert_eq!(expected, "factor");
            assert_eq!(found, "*");
        }
        other => panic!("Expected a SyntaxError, but got: {:?}", other),
    }
}
