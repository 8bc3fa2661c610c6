use std::{cell::Cell, iter::Peekable};

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Builds the error reported for a token that no production accepts.
///
/// The reserved keywords `toolkit`, `recover` and `over` get their own
/// error so that programs using them are told why they were rejected.
pub(in crate::interpreter::parser) fn unexpected_token(token: &Token, line: usize) -> ParseError {
    match token {
        Token::Toolkit | Token::Recover | Token::Over => {
            ParseError::ReservedKeyword { keyword: token.to_string(),
                                          line }
        },
        _ => ParseError::UnexpectedToken { token: token.to_string(),
                                           line },
    }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if a different token follows or the input ends.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(unexpected_token(tok, *line)),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// The deepest nesting of commands, groupings and unary operators accepted.
pub const MAX_NESTING: usize = 128;

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Marks one level of recursive descent; the level is released on drop.
pub(in crate::interpreter::parser) struct Nesting(());

impl Nesting {
    /// Enters a nested construct starting on `line`.
    ///
    /// # Errors
    /// `NestingTooDeep` once [`MAX_NESTING`] levels are already open.
    pub(in crate::interpreter::parser) fn enter(line: usize) -> ParseResult<Self> {
        DEPTH.with(|depth| {
                 if depth.get() >= MAX_NESTING {
                     return Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                             line });
                 }
                 depth.set(depth.get() + 1);
                 Ok(Self(()))
             })
    }
}

impl Drop for Nesting {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}
