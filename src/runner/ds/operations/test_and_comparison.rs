use std::ptr;
use std::rc::Rc;

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object::JsObject;
use crate::runner::ds::operations::type_conversion::{number_as_f64, to_number, to_primitive};
use crate::runner::ds::value::{JsNumberType, JsValue};

fn is_same_value(a: &JsValue, b: &JsValue, strict_mode: bool) -> bool {
    match (a, b) {
        (JsValue::Undefined, JsValue::Undefined) => true,
        (JsValue::Null, JsValue::Null) => true,
        (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
        (JsValue::String(a), JsValue::String(b)) => a == b,
        (JsValue::Symbol(a), JsValue::Symbol(b)) => a == b,
        (JsValue::Number(na), JsValue::Number(nb)) => match (na, nb) {
            // The not-a-number marker equals nothing under strict
            // comparison, itself included.
            (JsNumberType::NaN, JsNumberType::NaN) => !strict_mode,
            _ => match (number_as_f64(na), number_as_f64(nb)) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        },
        (JsValue::Object(a), JsValue::Object(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

pub fn same_js_object<J: JsObject + ?Sized>(a: &J, b: &J) -> bool {
    ptr::eq(a.get_object_base(), b.get_object_base())
}

pub fn same_value(a: &JsValue, b: &JsValue) -> bool {
    is_same_value(a, b, false)
}

pub fn strict_equality_comparison(a: &JsValue, b: &JsValue) -> bool {
    is_same_value(a, b, true)
}

/// Loose equality. Same-tag operands compare strictly; mixed-tag operands
/// coerce: null and undefined match each other, strings coerce toward
/// numbers, booleans toward numbers, and a record against a primitive goes
/// through `to_primitive` first. Two records never coerce; they compare by
/// identity, which is why two structurally-equal arrays are not equal while
/// either of them loosely equals the joined string.
pub fn abstract_equality_comparison(a: &JsValue, b: &JsValue) -> Result<bool, JErrorType> {
    match (a, b) {
        (JsValue::Undefined, JsValue::Null) | (JsValue::Null, JsValue::Undefined) => Ok(true),
        (JsValue::Undefined, JsValue::Undefined)
        | (JsValue::Null, JsValue::Null)
        | (JsValue::Boolean(_), JsValue::Boolean(_))
        | (JsValue::String(_), JsValue::String(_))
        | (JsValue::Symbol(_), JsValue::Symbol(_))
        | (JsValue::Number(_), JsValue::Number(_))
        | (JsValue::Object(_), JsValue::Object(_)) => Ok(strict_equality_comparison(a, b)),
        (JsValue::Number(_), JsValue::String(_)) => {
            let nb = to_number(b)?;
            abstract_equality_comparison(a, &nb)
        }
        (JsValue::String(_), JsValue::Number(_)) => {
            let na = to_number(a)?;
            abstract_equality_comparison(&na, b)
        }
        (JsValue::Boolean(_), _) => {
            let na = to_number(a)?;
            abstract_equality_comparison(&na, b)
        }
        (_, JsValue::Boolean(_)) => {
            let nb = to_number(b)?;
            abstract_equality_comparison(a, &nb)
        }
        (JsValue::Object(_), JsValue::Number(_)) | (JsValue::Object(_), JsValue::String(_)) => {
            let pa = to_primitive(a)?;
            abstract_equality_comparison(&pa, b)
        }
        (JsValue::Number(_), JsValue::Object(_)) | (JsValue::String(_), JsValue::Object(_)) => {
            let pb = to_primitive(b)?;
            abstract_equality_comparison(a, &pb)
        }
        _ => Ok(false),
    }
}

/// Relational comparison, `a < b`. Two strings compare lexicographically;
/// anything else coerces both sides toward numbers. `None` means the
/// comparison is undefined because a side coerced to the not-a-number
/// marker; every ordering operator reports false for it.
pub fn abstract_relational_comparison(
    a: &JsValue,
    b: &JsValue,
) -> Result<Option<bool>, JErrorType> {
    let pa = to_primitive(a)?;
    let pb = to_primitive(b)?;
    if let (JsValue::String(sa), JsValue::String(sb)) = (&pa, &pb) {
        return Ok(Some(sa < sb));
    }
    let na = to_number(&pa)?;
    let nb = to_number(&pb)?;
    match (&na, &nb) {
        (JsValue::Number(x), JsValue::Number(y)) => match (number_as_f64(x), number_as_f64(y)) {
            (Some(x), Some(y)) => Ok(Some(x < y)),
            _ => Ok(None),
        },
        _ => Ok(None),
    }
}

pub fn less_than(a: &JsValue, b: &JsValue) -> Result<bool, JErrorType> {
    Ok(abstract_relational_comparison(a, b)?.unwrap_or(false))
}

pub fn greater_than(a: &JsValue, b: &JsValue) -> Result<bool, JErrorType> {
    Ok(abstract_relational_comparison(b, a)?.unwrap_or(false))
}
