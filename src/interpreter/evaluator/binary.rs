/// Operator dispatch and shared error construction.
pub mod core;

/// Checked integer arithmetic: `+`, `-`, `*`, `/`.
pub(crate) mod arithmetic;

/// Relational and equality operators.
pub(crate) mod comparison;

/// Logical `and` / `or`.
pub(crate) mod logic;
