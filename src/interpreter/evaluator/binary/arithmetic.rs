use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::operand_type_error, core::EvalResult},
        value::Value,
    },
};

/// Evaluates an arithmetic operation on two integers.
///
/// Only integers take part in arithmetic; strings are not concatenated and
/// booleans are not promoted. Results that do not fit into an `i64` are an
/// error rather than wrapping. Division truncates toward zero.
///
/// # Errors
/// - `TypeError` if either operand is not an integer.
/// - `DivisionByZero` for a zero divisor.
/// - `Overflow` if the result is out of range.
pub fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
        return Err(operand_type_error(op, left, right, line));
    };

    let result = match op {
        BinaryOperator::Add => a.checked_add(*b),
        BinaryOperator::Sub => a.checked_sub(*b),
        BinaryOperator::Mul => a.checked_mul(*b),
        BinaryOperator::Div => {
            if *b == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            a.checked_div(*b)
        },
        _ => unreachable!("eval_arithmetic used with non arithmetic operator"),
    };

    result.map(Value::Integer)
          .ok_or(RuntimeError::Overflow { line })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn division_truncates_toward_zero() {
        let result = eval_arithmetic(BinaryOperator::Div, &Value::Integer(-7), &Value::Integer(2), 1);
        assert_eq!(result, Ok(Value::Integer(-3)));
    }

    #[test]
    fn minimum_divided_by_minus_one_overflows() {
        let result = eval_arithmetic(BinaryOperator::Div,
                                     &Value::Integer(i64::MIN),
                                     &Value::Integer(-1),
                                     4);
        assert_eq!(result, Err(RuntimeError::Overflow { line: 4 }));
    }
}
