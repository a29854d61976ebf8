//! Applies an operator to two register values. Numbers combine with
//! single-precision arithmetic, and a handful of operators have meanings for
//! strings: '+' concatenates, '*' repeats and '/' takes a leading fraction.

use super::{Operator, RegisterName, Registers, Value};
use crate::errors::{Error, Result};

/// The longest string, in bytes, that repeating a string may produce
pub const MAX_REPEAT_LEN: usize = 1 << 24;

/// Applies an operator to the values held in two registers. The registers are
/// left untouched; the caller decides where the result goes.
pub fn apply(
    op: Operator,
    lhs: RegisterName,
    rhs: RegisterName,
    registers: &Registers,
) -> Result<Value> {
    evaluate(op, registers.get(lhs), registers.get(rhs))
}

/// Applies an operator to two values
pub fn evaluate(op: Operator, lhs: &Value, rhs: &Value) -> Result<Value> {
    // The order of these arms matters, the first one that matches wins
    match (lhs, rhs) {
        (Value::Number(l), Value::Number(r)) => arithmetic(op, *l, *r),
        (Value::Text(l), Value::Text(r)) if op == Operator::Add => {
            Ok(Value::Text(format!("{}{}", l, r)))
        }
        (Value::Text(s), Value::Number(n)) if op == Operator::Mul => repeat(s, *n),
        (Value::Number(n), Value::Text(s)) if op == Operator::Mul => repeat(s, *n),
        (Value::Text(s), Value::Number(n)) if op == Operator::Div => split(s, *n),
        _ => Err(Error::TypeMismatch {
            op,
            lhs: lhs.type_name(),
            rhs: rhs.type_name(),
        }),
    }
}

fn arithmetic(op: Operator, lhs: f32, rhs: f32) -> Result<Value> {
    let result = match op {
        Operator::Add => lhs + rhs,
        Operator::Sub => lhs - rhs,
        Operator::Mul => lhs * rhs,
        Operator::Div => {
            if rhs == 0.0 {
                return Err(Error::DivideByZero);
            }
            lhs / rhs
        }
    };

    Ok(Value::Number(result))
}

/// Repeats a string. The count is truncated toward zero.
fn repeat(s: &str, count: f32) -> Result<Value> {
    let times = count as i32;
    if times < 0 {
        return Err(Error::NegativeRepeat);
    }

    match s.len().checked_mul(times as usize) {
        Some(len) if len <= MAX_REPEAT_LEN => Ok(Value::Text(s.repeat(times as usize))),
        _ => Err(Error::RepeatTooLong(MAX_REPEAT_LEN)),
    }
}

/// Returns the first 1/parts of a string, dropping any remainder
fn split(s: &str, parts: f32) -> Result<Value> {
    let parts = parts as i32;
    if parts <= 0 {
        return Err(Error::InvalidSplit);
    }

    let len = s.chars().count() / parts as usize;
    Ok(Value::Text(s.chars().take(len).collect()))
}
