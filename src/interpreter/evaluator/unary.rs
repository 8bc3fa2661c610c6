use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Plus`: identity on integers.
/// - `Negate`: integer negation; negating `i64::MIN` overflows.
/// - `Not`: boolean negation.
///
/// # Example
/// ```
/// use doorlang::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::Value},
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
/// assert_eq!(v, Value::Integer(-5));
///
/// let v = eval_unary(UnaryOperator::Not, &Value::Bool(false), 1).unwrap();
/// assert_eq!(v, Value::Bool(true));
///
/// assert!(eval_unary(UnaryOperator::Not, &Value::Integer(0), 1).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOperator::Plus, Value::Integer(n)) => Ok(Value::Integer(*n)),
        (UnaryOperator::Negate, Value::Integer(n)) => {
            n.checked_neg()
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { line })
        },
        (UnaryOperator::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        _ => Err(RuntimeError::TypeError { details: format!("Cannot apply unary '{op}' to {}",
                                                            value.type_name()),
                                           line }),
    }
}
