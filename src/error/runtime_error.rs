use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// Every runtime error is fatal: evaluation stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("Error on line {line}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to operands of the wrong types.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeError {
        /// Names the operator and the operand types.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A condition did not evaluate to a boolean.
    #[error("Error on line {line}: Expected boolean condition, found {found}.")]
    ExpectedBoolean {
        /// Type name of the value found instead.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Console input was not an integer, or there was no input left.
    #[error("Error on line {line}: Expected an integer from input, found '{input}'.")]
    InvalidInput {
        /// The line read from the console, trimmed.
        input: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reading from or writing to the console failed.
    #[error("Error on line {line}: Console I/O failed: {details}.")]
    Console {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
