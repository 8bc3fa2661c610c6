use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{binary::core::operand_type_error, core::EvalResult},
        value::Value,
    },
};

/// Evaluates a logical operation between two boolean values.
///
/// Integers and strings are not converted to booleans.
///
/// # Errors
/// `TypeError` if either operand is not a boolean.
pub fn eval_logic(op: BinaryOperator,
                  left: &Value,
                  right: &Value,
                  line: usize)
                  -> EvalResult<Value> {
    let (Value::Bool(a), Value::Bool(b)) = (left, right) else {
        return Err(operand_type_error(op, left, right, line));
    };

    match op {
        BinaryOperator::And => Ok(Value::Bool(*a && *b)),
        BinaryOperator::Or => Ok(Value::Bool(*a || *b)),
        _ => unreachable!(),
    }
}
