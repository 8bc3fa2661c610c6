use thiserror::Error;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Invalid syntax. Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The line of the last token read.
        line: usize,
    },
    /// Found extra tokens after the program block was closed.
    #[error("Error on line {line}: Extra tokens after the program block: {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A block with no commands in it.
    #[error("Error on line {line}: A block must contain at least one command.")]
    EmptyBlock {
        /// The line of the opening brace.
        line: usize,
    },
    /// A reserved keyword that no construct of the language accepts.
    #[error("Error on line {line}: Keyword '{keyword}' is reserved and cannot be used.")]
    ReservedKeyword {
        /// The keyword as written.
        keyword: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Expressions or commands nested deeper than the parser allows.
    #[error("Error on line {line}: Nesting is too deep (more than {limit} levels).")]
    NestingTooDeep {
        /// The maximum number of nested levels.
        limit: usize,
        /// The line of the construct that went over the limit.
        line:  usize,
    },
}
