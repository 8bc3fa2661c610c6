use thiserror::Error;

/// Represents a problem found while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that does not start any token.
    #[error("Error on line {line}: Invalid syntax. Character {character} is invalid.")]
    InvalidCharacter {
        /// The skipped character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A run of digits that does not fit into a 64-bit signed integer.
    #[error("Error on line {line}: Integer literal {literal} is too large.")]
    LiteralTooLarge {
        /// The digits as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
