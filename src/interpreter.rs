/// The source module prepares program text for the lexer.
///
/// Lines are stripped of surrounding whitespace and joined without a
/// separator. The module also keeps a map from positions in the joined text
/// back to the original line numbers.
pub mod source;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the prepared source text and produces a stream of tokens,
/// each corresponding to a number, string, identifier, keyword, operator or
/// delimiter. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the joined text into tokens tagged with their original line.
/// - Re-tags reserved words as keywords.
/// - Reports invalid characters without stopping.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of the program.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Encodes operator precedence and associativity.
/// - Reports the first syntax error with the offending token and its line.
pub mod parser;
/// The environment module holds the program's variables.
///
/// One flat mapping from names to values, shared by every block of the
/// program for the whole run.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST once, evaluating expressions, running
/// statements, updating the environment and talking to the console.
///
/// # Responsibilities
/// - Evaluates every kind of AST node.
/// - Enforces operand types; there are no implicit conversions.
/// - Reports runtime errors such as division by zero or unbound variables.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// Integers, booleans and strings, plus their text form for `show`.
pub mod value;
