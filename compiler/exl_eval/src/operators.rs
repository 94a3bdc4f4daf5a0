//! Binary and unary operator evaluation.
//!
//! Direct enum dispatch over `(op, left, right)`. Integers stay integers
//! where the result is exact; mixing an integer with a float promotes to
//! float.

use exl_ir::{BinaryOp, UnaryOp};
use exl_value::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, modulo_by_zero, unary_type_mismatch,
};
use exl_value::{EvalResult, Value};

#[allow(
    clippy::cast_precision_loss,
    reason = "mixed int/float arithmetic promotes to float by definition"
)]
#[inline]
fn int_to_float(n: i64) -> f64 {
    n as f64
}

/// Both operands as floats, if both are numeric.
fn as_floats(left: &Value, right: &Value) -> Option<(f64, f64)> {
    match (left, right) {
        (Value::Int(a), Value::Float(b)) => Some((int_to_float(*a), *b)),
        (Value::Float(a), Value::Int(b)) => Some((*a, int_to_float(*b))),
        (Value::Float(a), Value::Float(b)) => Some((*a, *b)),
        _ => None,
    }
}

fn mismatch(op: BinaryOp, left: &Value, right: &Value) -> exl_value::EvalError {
    binary_type_mismatch(op.as_symbol(), left.type_name(), right.type_name())
}

/// Evaluate a binary operation on two already evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: Value, right: Value) -> EvalResult {
    match op {
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul => eval_arithmetic(op, &left, &right),
        BinaryOp::Div => eval_div(&left, &right),
        BinaryOp::Mod => eval_mod(&left, &right),
        BinaryOp::Concat => eval_concat(&left, &right),
        BinaryOp::Eq => Ok(Value::Bool(values_equal(&left, &right))),
        BinaryOp::NotEq => Ok(Value::Bool(!values_equal(&left, &right))),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            eval_comparison(op, &left, &right)
        }
        BinaryOp::And => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
        BinaryOp::Or => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
    }
}

fn eval_arithmetic(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    if let (Value::Int(a), Value::Int(b)) = (left, right) {
        let result = match op {
            BinaryOp::Add => a.checked_add(*b),
            BinaryOp::Sub => a.checked_sub(*b),
            _ => a.checked_mul(*b),
        };
        return result
            .map(Value::Int)
            .ok_or_else(|| integer_overflow(op.as_symbol()));
    }
    let Some((a, b)) = as_floats(left, right) else {
        return Err(mismatch(op, left, right));
    };
    Ok(Value::Float(match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        _ => a * b,
    }))
}

fn eval_div(left: &Value, right: &Value) -> EvalResult {
    if let (Value::Int(a), Value::Int(b)) = (left, right) {
        if *b == 0 {
            return Err(division_by_zero());
        }
        let rem = a.checked_rem(*b).ok_or_else(|| integer_overflow("/"))?;
        if rem == 0 {
            return a
                .checked_div(*b)
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("/"));
        }
        return Ok(Value::Float(int_to_float(*a) / int_to_float(*b)));
    }
    let Some((a, b)) = as_floats(left, right) else {
        return Err(mismatch(BinaryOp::Div, left, right));
    };
    if b == 0.0 {
        return Err(division_by_zero());
    }
    Ok(Value::Float(a / b))
}

fn eval_mod(left: &Value, right: &Value) -> EvalResult {
    let (Value::Int(a), Value::Int(b)) = (left, right) else {
        return Err(mismatch(BinaryOp::Mod, left, right));
    };
    if *b == 0 {
        return Err(modulo_by_zero());
    }
    a.checked_rem(*b)
        .map(Value::Int)
        .ok_or_else(|| integer_overflow("%"))
}

fn eval_concat(left: &Value, right: &Value) -> EvalResult {
    match (left.to_text(), right.to_text()) {
        (Some(a), Some(b)) => Ok(Value::Str(a + &b)),
        _ => Err(mismatch(BinaryOp::Concat, left, right)),
    }
}

/// Equality with numeric promotion: `1 == 1.0`.
fn values_equal(left: &Value, right: &Value) -> bool {
    match as_floats(left, right) {
        Some((a, b)) => a == b,
        None => left == right,
    }
}

fn eval_comparison(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => match as_floats(left, right) {
            Some((a, b)) => a.partial_cmp(&b),
            None => return Err(mismatch(op, left, right)),
        },
    };
    // NaN compares false against everything.
    let Some(ordering) = ordering else {
        return Ok(Value::Bool(false));
    };
    Ok(Value::Bool(match op {
        BinaryOp::Lt => ordering.is_lt(),
        BinaryOp::LtEq => ordering.is_le(),
        BinaryOp::Gt => ordering.is_gt(),
        _ => ordering.is_ge(),
    }))
}

/// Evaluate a unary operation on an already evaluated operand.
pub fn evaluate_unary(op: UnaryOp, operand: Value) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("-")),
        (UnaryOp::Neg, Value::Float(x)) => Ok(Value::Float(-x)),
        (UnaryOp::Pos, value @ (Value::Int(_) | Value::Float(_))) => Ok(value),
        (UnaryOp::Not, value) => Ok(Value::Bool(!value.is_truthy())),
        (op, value) => Err(unary_type_mismatch(op.as_symbol(), value.type_name())),
    }
}
