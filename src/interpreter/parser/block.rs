use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_command},
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of one or more commands. Parsing continues until a
/// closing `}` token is encountered. Nested blocks stay nested as their own
/// `Statement::Block`; the commands of one block always form a single flat
/// list.
///
/// Grammar: `block := "{" command+ "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace.
///
/// # Returns
/// A `Statement::Block` containing all parsed commands.
///
/// # Errors
/// - `EmptyBlock` for `{}`.
/// - `UnexpectedEndOfInput` if the closing brace is missing.
/// - Propagates any errors from command parsing.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_command(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    if statements.is_empty() {
        return Err(ParseError::EmptyBlock { line });
    }

    Ok(Statement::Block { statements, line })
}
