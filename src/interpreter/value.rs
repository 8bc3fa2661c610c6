use std::fmt;

use crate::{ast::LiteralValue, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Values are plain data: assigning one to a variable stores a copy, so no
/// two variables ever alias each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators. Conditions of `if` and
    /// `until` must evaluate to `Bool`.
    Bool(bool),
    /// A string of text.
    String(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::String(s) => Self::String(s.clone()),
        }
    }
}

impl Value {
    /// Name of the value's type, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use doorlang::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "integer");
    /// assert_eq!(Value::from("x").type_name(), "string");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::String(_) => "string",
        }
    }

    /// Returns the boolean held by a condition value.
    ///
    /// No other type is treated as true or false.
    ///
    /// # Errors
    /// `RuntimeError::ExpectedBoolean` if the value is not a boolean.
    pub const fn as_condition(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { found: self.type_name(),
                                                     line }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::String(s) => f.write_str(s),
        }
    }
}
