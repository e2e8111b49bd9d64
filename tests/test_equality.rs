//! Tests for loose equality coercion and relational comparison.

extern crate gist;

use gist::runner::ds::object::new_array_object;
use gist::runner::ds::operations::test_and_comparison::{
    abstract_equality_comparison, greater_than, less_than, strict_equality_comparison,
};
use gist::runner::ds::value::{JsNumberType, JsValue};

fn int(n: i64) -> JsValue {
    JsValue::Number(JsNumberType::Integer(n))
}

fn s(v: &str) -> JsValue {
    JsValue::String(v.to_string())
}

fn loose_eq(a: &JsValue, b: &JsValue) -> bool {
    abstract_equality_comparison(a, b).unwrap()
}

#[test]
fn test_array_against_joined_string() {
    let a = JsValue::Object(new_array_object(vec![int(1), int(2), int(3)]));
    assert!(loose_eq(&a, &s("1,2,3")));
}

#[test]
fn test_structurally_equal_arrays_are_not_equal() {
    let a = JsValue::Object(new_array_object(vec![int(1), int(2), int(3)]));
    let b = JsValue::Object(new_array_object(vec![int(1), int(2), int(3)]));
    assert!(!loose_eq(&a, &b));
    // each still matches the joined string
    assert!(loose_eq(&a, &s("1,2,3")));
    assert!(loose_eq(&b, &s("1,2,3")));
}

#[test]
fn test_record_identity() {
    let a = JsValue::Object(new_array_object(vec![int(1)]));
    assert!(loose_eq(&a, &a.clone()));
}

#[test]
fn test_failed_coercion_is_unordered() {
    let a = int(42);
    let b = s("foo");
    assert!(!less_than(&a, &b).unwrap());
    assert!(!greater_than(&a, &b).unwrap());
    assert!(!loose_eq(&a, &b));
}

#[test]
fn test_nan_is_unequal_to_itself() {
    let nan = JsValue::Number(JsNumberType::NaN);
    assert!(!strict_equality_comparison(&nan, &nan));
    assert!(!loose_eq(&nan, &nan));
    assert!(!less_than(&nan, &nan).unwrap());
    assert!(!greater_than(&nan, &nan).unwrap());
}

#[test]
fn test_null_and_undefined_match_loosely() {
    assert!(loose_eq(&JsValue::Null, &JsValue::Undefined));
    assert!(loose_eq(&JsValue::Undefined, &JsValue::Null));
    assert!(!strict_equality_comparison(&JsValue::Null, &JsValue::Undefined));
    assert!(!loose_eq(&JsValue::Null, &int(0)));
}

#[test]
fn test_numeric_string_coercion() {
    assert!(loose_eq(&int(42), &s("42")));
    assert!(loose_eq(&s("42"), &int(42)));
    assert!(!loose_eq(&int(42), &s("43")));
    assert!(less_than(&int(41), &s("42")).unwrap());
}

#[test]
fn test_boolean_coerces_toward_number() {
    assert!(loose_eq(&JsValue::Boolean(true), &int(1)));
    assert!(loose_eq(&JsValue::Boolean(false), &int(0)));
    assert!(loose_eq(&JsValue::Boolean(true), &s("1")));
}

#[test]
fn test_string_relational_is_lexicographic() {
    assert!(less_than(&s("apple"), &s("banana")).unwrap());
    assert!(greater_than(&s("banana"), &s("apple")).unwrap());
}
