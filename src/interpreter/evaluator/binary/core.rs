use std::fmt::Display;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{
                arithmetic::eval_arithmetic,
                comparison::{eval_equality, eval_relational},
                logic::eval_logic,
            },
            core::EvalResult,
        },
        value::Value,
    },
};

/// Evaluates a binary operation between two already evaluated operands.
///
/// Both operands are always evaluated before this is called, so `and` and
/// `or` never short-circuit. Routing:
/// - `+ - * /` go to `eval_arithmetic` and need two integers.
/// - `< > <= >=` go to `eval_relational` and need two integers.
/// - `== !=` go to `eval_equality`, which accepts any pair of values.
/// - `and or` go to `eval_logic` and need two booleans.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use doorlang::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4), 1);
/// assert_eq!(result.unwrap(), Value::Integer(7));
///
/// let result = eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Bool(true), 1);
/// assert!(result.is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
    };

    match op {
        Add | Sub | Mul | Div => eval_arithmetic(op, left, right, line),
        Less | Greater | LessEqual | GreaterEqual => eval_relational(op, left, right, line),
        Equal | NotEqual => Ok(eval_equality(op, left, right)),
        And | Or => eval_logic(op, left, right, line),
    }
}

/// Builds the type error for an operator applied to unsupported operands.
pub(crate) fn operand_type_error(op: impl Display,
                                 left: &Value,
                                 right: &Value,
                                 line: usize)
                                 -> RuntimeError {
    RuntimeError::TypeError { details: format!("Cannot apply '{op}' to {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}
