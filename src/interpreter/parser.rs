/// Parser entry points.
///
/// Holds the program-level entry point, the expression entry point and the
/// shared result type.
pub mod core;

/// Unary operator and primary expression parsing.
///
/// Handles prefix `+`, `-` and `!`, literals, variables, parenthesized
/// expressions and `door()`.
pub mod unary;

/// Binary operator parsing.
///
/// One function per precedence level, from `or` down to `*` and `/`.
pub mod binary;

/// Block parsing.
///
/// Parses `{ command ... }` into a flat, ordered list of statements.
pub mod block;

/// Helpers shared by the parsing functions.
pub mod utils;

/// Statement parsing.
///
/// Implements the `command` production: assignment, `show`, blocks, `until`
/// loops and `if`/`else`.
pub mod statement;
