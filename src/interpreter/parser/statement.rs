use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{Nesting, expect, unexpected_token},
        },
    },
};

/// Parses a single command.
///
/// A command is one of:
/// - an assignment, `name = expr;`
/// - a print, `show(expr);`
/// - a block, `{ ... }`
/// - a loop, `until (expr) command`
/// - a conditional, `if (expr) command` with an optional `else command`
///
/// The leading token decides which production applies.
///
/// # Errors
/// Besides syntax errors, commands nested more than
/// [`MAX_NESTING`](crate::interpreter::parser::utils::MAX_NESTING) levels
/// deep are rejected.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_command<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let _nesting = Nesting::enter(tokens.peek().map_or(0, |(_, line)| *line))?;

    match tokens.next() {
        Some((Token::Identifier(name), line)) => parse_assignment(tokens, name, *line),
        Some((Token::Show, line)) => parse_print(tokens, *line),
        Some((Token::LBrace, line)) => parse_block(tokens, *line),
        Some((Token::Until, line)) => {
            let condition = parse_condition(tokens)?;
            let body = parse_command(tokens)?;

            Ok(Statement::While { condition,
                                  body: Box::new(body),
                                  line: *line })
        },
        Some((Token::If, line)) => parse_if(tokens, *line),
        Some((tok, line)) => Err(unexpected_token(tok, *line)),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses the rest of `name = expr;` after the identifier.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           name: &str,
                           line: usize)
                           -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::Equals)?;
    let value = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon)?;

    Ok(Statement::Assignment { name: name.to_string(),
                               value,
                               line })
}

/// Parses the rest of `show(expr);` after the keyword.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    expect(tokens, &Token::Semicolon)?;

    Ok(Statement::Print { expr, line })
}

/// Parses an `if` command with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if (<condition>) <command>
///     if (<condition>) <command> else <command>
/// ```
/// An `else` always belongs to the nearest `if` that does not have one yet,
/// so `if (a) if (b) x = 1; else x = 2;` attaches the `else` to `if (b)`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_condition(tokens)?;
    let then_branch = parse_command(tokens)?;

    let else_branch = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();
            Some(Box::new(parse_command(tokens)?))
        },
        _ => None,
    };

    Ok(Statement::Condition { condition,
                              then_branch: Box::new(then_branch),
                              else_branch,
                              line })
}

/// Parses a parenthesized condition, `( expr )`.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;

    Ok(condition)
}
