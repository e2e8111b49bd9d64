use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object::ObjectType;
use crate::runner::ds::value::{JsNumberType, JsValue};

pub const TYPE_STR_UNDEFINED: &str = "undefined";
pub const TYPE_STR_NULL: &str = "null";
pub const TYPE_STR_BOOLEAN: &str = "boolean";
pub const TYPE_STR_STRING: &str = "string";
pub const TYPE_STR_SYMBOL: &str = "symbol";
pub const TYPE_STR_NUMBER: &str = "number";
pub const TYPE_STR_OBJECT: &str = "object";
pub const TYPE_STR_FUNCTION: &str = "function";

/// The seven-category type tag of a value. `Null` reports `"object"`; that
/// is documented behavior of the modeled language, preserved here on
/// purpose. Callables report `"function"` even though they are
/// representationally a record subtype.
pub fn get_type(a: &JsValue) -> &'static str {
    match a {
        JsValue::Undefined => TYPE_STR_UNDEFINED,
        JsValue::Null => TYPE_STR_OBJECT,
        JsValue::Boolean(_) => TYPE_STR_BOOLEAN,
        JsValue::String(_) => TYPE_STR_STRING,
        JsValue::Symbol(_) => TYPE_STR_SYMBOL,
        JsValue::Number(_) => TYPE_STR_NUMBER,
        JsValue::Object(o) => match *(**o).borrow() {
            ObjectType::Ordinary(_) => TYPE_STR_OBJECT,
            ObjectType::Function(_) => TYPE_STR_FUNCTION,
            ObjectType::Array(_) => TYPE_STR_OBJECT,
        },
    }
}

/// Collapses a record to a primitive. Arrays join their elements with ","
/// which is what makes `[1,2,3]` loosely equal to `"1,2,3"`.
pub fn to_primitive(v: &JsValue) -> Result<JsValue, JErrorType> {
    match v {
        JsValue::Object(o) => {
            let o_b = (**o).borrow();
            match &*o_b {
                ObjectType::Array(a) => Ok(JsValue::String(a.join(",")?)),
                _ => Ok(JsValue::String(o_b.as_js_object().to_string())),
            }
        }
        _ => Ok(v.clone()),
    }
}

/// Coerces toward a numeric value. A string with no numeric reading
/// produces the not-a-number marker, never an error.
pub fn to_number(v: &JsValue) -> Result<JsValue, JErrorType> {
    match v {
        JsValue::Undefined => Ok(JsValue::Number(JsNumberType::NaN)),
        JsValue::Null => Ok(JsValue::Number(JsNumberType::Integer(0))),
        JsValue::Boolean(b) => Ok(JsValue::Number(JsNumberType::Integer(match *b {
            true => 1,
            false => 0,
        }))),
        JsValue::String(s) => Ok(JsValue::Number(string_to_number(s))),
        JsValue::Symbol(s) => Err(JErrorType::TypeError(format!(
            "'{}' symbol cannot be converted to number",
            s
        ))),
        JsValue::Number(_) => Ok(v.clone()),
        JsValue::Object(_) => {
            let pv = to_primitive(v)?;
            to_number(&pv)
        }
    }
}

fn string_to_number(s: &str) -> JsNumberType {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return JsNumberType::Integer(0);
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return JsNumberType::Integer(i);
    }
    match trimmed {
        "Infinity" | "+Infinity" => JsNumberType::PositiveInfinity,
        "-Infinity" => JsNumberType::NegativeInfinity,
        _ => match trimmed.parse::<f64>() {
            Ok(f) => JsNumberType::Float(f),
            Err(_) => JsNumberType::NaN,
        },
    }
}

pub fn to_string(v: &JsValue) -> Result<String, JErrorType> {
    match v {
        JsValue::Undefined => Ok(TYPE_STR_UNDEFINED.to_string()),
        JsValue::Null => Ok(TYPE_STR_NULL.to_string()),
        JsValue::Boolean(b) => Ok(b.to_string()),
        JsValue::String(s) => Ok(s.clone()),
        JsValue::Symbol(s) => Err(JErrorType::TypeError(format!(
            "'{}' symbol cannot be converted to string",
            s
        ))),
        JsValue::Number(n) => Ok(n.to_string()),
        JsValue::Object(_) => match to_primitive(v)? {
            JsValue::String(s) => Ok(s),
            other => to_string(&other),
        },
    }
}

/// The falsy table: `false`, the empty string, `0`, `-0`, the not-a-number
/// marker, the null-marker and the undefined-marker. Everything else is
/// truthy.
pub fn to_boolean(v: &JsValue) -> bool {
    match v {
        JsValue::Undefined => false,
        JsValue::Null => false,
        JsValue::Boolean(b) => *b,
        JsValue::String(s) => !s.is_empty(),
        JsValue::Symbol(_) => true,
        JsValue::Number(n) => match n {
            JsNumberType::Integer(i) => *i != 0,
            JsNumberType::Float(f) => *f != 0.0,
            JsNumberType::NaN => false,
            JsNumberType::PositiveInfinity => true,
            JsNumberType::NegativeInfinity => true,
        },
        JsValue::Object(_) => true,
    }
}

/// The numeric reading of a number variant; `None` is the not-a-number
/// marker, which no ordering test accepts.
pub fn number_as_f64(n: &JsNumberType) -> Option<f64> {
    match n {
        JsNumberType::Integer(i) => Some(*i as f64),
        JsNumberType::Float(f) => Some(*f),
        JsNumberType::NaN => None,
        JsNumberType::PositiveInfinity => Some(f64::INFINITY),
        JsNumberType::NegativeInfinity => Some(f64::NEG_INFINITY),
    }
}
