//! Tests for the dynamic type tag table.
//!
//! The seven-category model, including the historical rule that the
//! null-marker reports as "object" and callables get their own tag.

extern crate gist;

use std::rc::Rc;

use gist::runner::api::JsRunner;
use gist::runner::ds::operations::object::ordinary_object_create;
use gist::runner::ds::operations::type_conversion::get_type;
use gist::runner::ds::realm::EvalMode;
use gist::runner::ds::symbol::SymbolData;
use gist::runner::ds::value::{JsNumberType, JsValue};

#[test]
fn test_primitive_tags() {
    assert_eq!(get_type(&JsValue::Undefined), "undefined");
    assert_eq!(get_type(&JsValue::String("hello world".to_string())), "string");
    assert_eq!(get_type(&JsValue::Boolean(true)), "boolean");
    assert_eq!(get_type(&JsValue::Number(JsNumberType::Integer(42))), "number");
    assert_eq!(get_type(&JsValue::Number(JsNumberType::NaN)), "number");
    assert_eq!(
        get_type(&JsValue::Symbol(SymbolData::new_empty())),
        "symbol"
    );
}

#[test]
fn test_null_reports_as_object() {
    assert_eq!(get_type(&JsValue::Null), "object");
}

#[test]
fn test_record_tag() {
    let o = ordinary_object_create(None);
    assert_eq!(get_type(&JsValue::Object(o)), "object");
}

#[test]
fn test_callable_tag() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    let f = runner
        .make_function(
            "foo",
            vec![],
            vec![],
            Rc::new(|_ctx_stack, _this, _args| Ok(JsValue::Undefined)),
        )
        .unwrap();
    assert_eq!(get_type(&JsValue::Object(f)), "function");
}

#[test]
fn test_reassignment_retypes() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    runner.declare_var("a").unwrap();
    assert_eq!(get_type(&runner.get("a").unwrap()), "undefined");
    runner
        .set("a", JsValue::String("hello world".to_string()))
        .unwrap();
    assert_eq!(get_type(&runner.get("a").unwrap()), "string");
    runner.set("a", JsValue::Boolean(true)).unwrap();
    assert_eq!(get_type(&runner.get("a").unwrap()), "boolean");
    runner.set("a", JsValue::Null).unwrap();
    assert_eq!(get_type(&runner.get("a").unwrap()), "object");
}

#[test]
fn test_symbol_builtin_mints_fresh_identities() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    let symbol_fn = match runner.get("Symbol").unwrap() {
        JsValue::Object(o) => o,
        v => panic!("Symbol is not an object: {}", v),
    };
    let s1 = runner.call_bare(&symbol_fn, vec![]).unwrap();
    let s2 = runner.call_bare(&symbol_fn, vec![]).unwrap();
    assert_eq!(get_type(&s1), "symbol");
    assert_ne!(s1, s2);
}
