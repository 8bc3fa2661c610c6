use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{binary::core::operand_type_error, core::EvalResult},
        value::Value,
    },
};

/// Maps an equality operator and a boolean equality result to the final
/// boolean value, inverting it for `!=`.
#[must_use]
pub fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::Equal => is_equal,
        BinaryOperator::NotEqual => !is_equal,
        _ => unreachable!("equality_op_result used with non equality operator"),
    }
}

/// Evaluates `==` or `!=`.
///
/// Values are equal when they have the same type and the same contents.
/// Values of different types are never equal; comparing them is not an
/// error.
#[must_use]
pub fn eval_equality(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    Value::Bool(equality_op_result(op, left == right))
}

/// Evaluates `<`, `>`, `<=` or `>=` on two integers.
///
/// # Errors
/// `TypeError` if either operand is not an integer.
pub fn eval_relational(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
        return Err(operand_type_error(op, left, right, line));
    };

    Ok(Value::Bool(match op {
                       BinaryOperator::Less => a < b,
                       BinaryOperator::Greater => a > b,
                       BinaryOperator::LessEqual => a <= b,
                       BinaryOperator::GreaterEqual => a >= b,
                       _ => unreachable!("eval_relational used with non relational operator"),
                   }))
}
