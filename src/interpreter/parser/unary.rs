use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{Nesting, expect, unexpected_token},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (identity)
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative and bind tighter than any binary
/// operator, so `-x * y` is `(-x) * y` and `!-x` is `!(-x)`.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "!") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Bang, _)) => UnaryOperator::Not,
        _ => return parse_primary(tokens),
    };

    let line = tokens.next().map_or(0, |(_, line)| *line);
    let _nesting = Nesting::enter(line)?;
    let expr = parse_unary(tokens)?;

    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER | STRING | IDENTIFIER | "true" | "false"
///              | "(" expression ")"
///              | "door" "(" ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), line)) => Ok(Expr::Literal { value: LiteralValue::Integer(*n),
                                                             line:  *line, }),
        Some((Token::True, line)) => Ok(Expr::Literal { value: LiteralValue::Bool(true),
                                                        line:  *line, }),
        Some((Token::False, line)) => Ok(Expr::Literal { value: LiteralValue::Bool(false),
                                                         line:  *line, }),
        Some((Token::Str(s), line)) => Ok(Expr::Literal { value: LiteralValue::String(unquote(s)),
                                                          line:  *line, }),
        Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                     line: *line, }),
        Some((Token::LParen, line)) => {
            let _nesting = Nesting::enter(*line)?;
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen)?;

            Ok(Expr::Grouping { expr: Box::new(expr),
                                line: *line, })
        },
        Some((Token::Door, line)) => {
            expect(tokens, &Token::LParen)?;
            expect(tokens, &Token::RParen)?;

            Ok(Expr::Input { line: *line })
        },
        Some((tok, line)) => Err(unexpected_token(tok, *line)),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Removes the surrounding quotes kept by the lexer.
fn unquote(literal: &str) -> String {
    literal.strip_prefix('"')
           .and_then(|s| s.strip_suffix('"'))
           .unwrap_or(literal)
           .to_string()
}
