/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons, equality and logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements unary plus, arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, expression evaluation and the shared result
/// type.
pub mod core;

/// Statement execution.
///
/// Runs blocks, assignments, `show`, `until` loops and `if`/`else`.
pub mod statement;

/// Console input, `door()`.
pub mod input;
