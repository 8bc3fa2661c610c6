/// Lexical errors.
///
/// Diagnostics produced while tokenizing. They never stop the lexer; the
/// offending input is skipped and tokenizing continues.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree.
/// Any of them ends the run before evaluation starts.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, unbound variables, division by zero and
/// unreadable console input.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
