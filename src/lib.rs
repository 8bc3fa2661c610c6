//! # doorlang
//!
//! doorlang is an interpreter for a small imperative scripting language.
//! Programs are a single `{ ... }` block of assignments, `show(...)` prints,
//! `until` loops and `if`/`else` conditionals over integers, booleans and
//! strings, with `door()` reading integers from the console.
//!
//! ```text
//! {
//!     x = 0;
//!     until (x < 3) {
//!         show(x);
//!         x = x + 1;
//!     }
//! }
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        environment::Environment, evaluator::core::Context, lexer::tokenize,
        parser::core::parse_program, source::Source,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and walked once by the evaluator.
pub mod ast;
/// Provides the error types for lexing, parsing, and evaluation.
///
/// Each error carries the original source line and renders as a one-line
/// diagnostic.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together source preparation, lexing, parsing, the
/// environment, evaluation and value representations.
pub mod interpreter;

/// Lexes and parses a prepared source.
///
/// Lexical errors are printed to stderr and skipped; the parser then sees
/// whatever tokens remain.
///
/// # Errors
/// Returns the first syntax error.
pub fn parse_source(source: &Source) -> Result<Statement, ParseError> {
    let lexed = tokenize(source);
    for error in &lexed.errors {
        eprintln!("{error}");
    }
    parse_program(&lexed.tokens)
}

/// Runs program text against the given console.
///
/// The program is parsed completely before anything is executed. On
/// success the final variable bindings are returned.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs. Output
/// written before a runtime error stays in `output`.
///
/// # Examples
/// ```
/// use doorlang::run_with;
///
/// let mut output = Vec::<u8>::new();
/// run_with("{ x = 6 * 7; show(x); }", "".as_bytes(), &mut output).unwrap();
/// assert_eq!(output, b"42\n");
///
/// // Division by zero ends the run.
/// let res = run_with("{ show(1 / 0); }", "".as_bytes(), std::io::sink());
/// assert!(res.is_err());
/// ```
pub fn run_with<R: BufRead, W: Write>(text: &str,
                                      input: R,
                                      output: W)
                                      -> Result<Environment, Box<dyn std::error::Error>> {
    let program = parse_source(&Source::from_text(text))?;
    execute(&program, Context::new(input, output))
}

/// Runs a prepared source against the process stdin and stdout.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs.
pub fn run(source: &Source) -> Result<(), Box<dyn std::error::Error>> {
    let program = parse_source(source)?;
    execute(&program, Context::stdio())?;
    Ok(())
}

fn execute<R: BufRead, W: Write>(program: &Statement,
                                 mut context: Context<R, W>)
                                 -> Result<Environment, Box<dyn std::error::Error>> {
    tracing::debug!("executing program");
    context.execute(program)?;
    context.output.flush()?;
    Ok(context.environment)
}
