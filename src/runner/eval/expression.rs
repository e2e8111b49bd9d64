//! Binary and unary operator application.
//!
//! Each operator routes through the coercion rules in
//! `ds::operations::type_conversion` and the comparison rules in
//! `ds::operations::test_and_comparison`.

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::operations::test_and_comparison::{
    abstract_equality_comparison, abstract_relational_comparison, strict_equality_comparison,
};
use crate::runner::ds::operations::type_conversion::{
    get_type, number_as_f64, to_number, to_primitive, to_string,
};
use crate::runner::ds::value::{JsNumberType, JsValue};

pub use crate::runner::ds::operations::type_conversion::to_boolean;

use super::types::ValueResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOperator {
    Add,
    Multiply,
    LessThan,
    GreaterThan,
    GreaterThanEquals,
    LooseEquals,
    StrictEquals,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOperator {
    TypeOf,
    Not,
}

pub fn apply_binary_operator(op: BinaryOperator, a: &JsValue, b: &JsValue) -> ValueResult {
    match op {
        BinaryOperator::Add => add(a, b),
        BinaryOperator::Multiply => multiply(a, b),
        BinaryOperator::LessThan => Ok(JsValue::Boolean(
            abstract_relational_comparison(a, b)?.unwrap_or(false),
        )),
        BinaryOperator::GreaterThan => Ok(JsValue::Boolean(
            abstract_relational_comparison(b, a)?.unwrap_or(false),
        )),
        // `a >= b` is the negated `a < b`, except that an undefined
        // comparison still reports false.
        BinaryOperator::GreaterThanEquals => Ok(JsValue::Boolean(
            match abstract_relational_comparison(a, b)? {
                Some(r) => !r,
                None => false,
            },
        )),
        BinaryOperator::LooseEquals => Ok(JsValue::Boolean(abstract_equality_comparison(a, b)?)),
        BinaryOperator::StrictEquals => Ok(JsValue::Boolean(strict_equality_comparison(a, b))),
    }
}

pub fn apply_unary_operator(op: UnaryOperator, a: &JsValue) -> ValueResult {
    match op {
        UnaryOperator::TypeOf => Ok(JsValue::String(get_type(a).to_string())),
        UnaryOperator::Not => Ok(JsValue::Boolean(!to_boolean(a))),
    }
}

/// `+`: string concatenation when either primitive side is a string,
/// numeric addition otherwise.
pub fn add(a: &JsValue, b: &JsValue) -> ValueResult {
    let pa = to_primitive(a)?;
    let pb = to_primitive(b)?;
    match (&pa, &pb) {
        (JsValue::String(_), _) | (_, JsValue::String(_)) => Ok(JsValue::String(format!(
            "{}{}",
            to_string(&pa)?,
            to_string(&pb)?
        ))),
        _ => numeric_binary(&pa, &pb, |x, y| x + y, |x, y| x.wrapping_add(y)),
    }
}

pub fn multiply(a: &JsValue, b: &JsValue) -> ValueResult {
    let pa = to_primitive(a)?;
    let pb = to_primitive(b)?;
    numeric_binary(&pa, &pb, |x, y| x * y, |x, y| x.wrapping_mul(y))
}

fn numeric_binary(
    a: &JsValue,
    b: &JsValue,
    float_op: fn(f64, f64) -> f64,
    int_op: fn(i64, i64) -> i64,
) -> ValueResult {
    let na = to_number(a)?;
    let nb = to_number(b)?;
    match (&na, &nb) {
        (JsValue::Number(x), JsValue::Number(y)) => match (x, y) {
            (JsNumberType::Integer(x), JsNumberType::Integer(y)) => {
                Ok(JsValue::Number(JsNumberType::Integer(int_op(*x, *y))))
            }
            _ => match (number_as_f64(x), number_as_f64(y)) {
                (Some(x), Some(y)) => Ok(JsValue::Number(float_to_number(float_op(x, y)))),
                _ => Ok(JsValue::Number(JsNumberType::NaN)),
            },
        },
        _ => Err(JErrorType::TypeError(
            "numeric coercion produced a non-number".to_string(),
        )),
    }
}

fn float_to_number(f: f64) -> JsNumberType {
    if f.is_nan() {
        JsNumberType::NaN
    } else if f == f64::INFINITY {
        JsNumberType::PositiveInfinity
    } else if f == f64::NEG_INFINITY {
        JsNumberType::NegativeInfinity
    } else {
        JsNumberType::Float(f)
    }
}
