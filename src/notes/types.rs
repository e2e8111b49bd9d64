//! Type sections: the seven type tags, object literals and callables as
//! values.

use std::rc::Rc;

use crate::notes::{as_object, int, str_value};
use crate::runner::api::JsRunner;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::operations::object::{get, get_v, ordinary_object_create, set};
use crate::runner::ds::operations::type_conversion::to_string;
use crate::runner::ds::value::JsValue;
use crate::runner::eval::expression::{apply_unary_operator, UnaryOperator};

fn log_type_of(runner: &mut JsRunner, v: &JsValue) -> Result<(), JErrorType> {
    let tag = apply_unary_operator(UnaryOperator::TypeOf, v)?;
    runner.console_log(vec![tag])
}

/// `typeof` through the whole tag table, including the historical
/// `typeof null == "object"` anomaly: `undefined`, `string`, `boolean`,
/// `object`, `undefined`, `object`, `symbol`.
pub fn type_tags(runner: &mut JsRunner) -> Result<(), JErrorType> {
    runner.declare_var("a")?;
    let a = runner.get("a")?;
    log_type_of(runner, &a)?;

    runner.set("a", str_value("hello world"))?;
    let a = runner.get("a")?;
    log_type_of(runner, &a)?;

    runner.set("a", JsValue::Boolean(true))?;
    let a = runner.get("a")?;
    log_type_of(runner, &a)?;

    // reports "object", kept as specified behavior
    runner.set("a", JsValue::Null)?;
    let a = runner.get("a")?;
    log_type_of(runner, &a)?;

    runner.set("a", JsValue::Undefined)?;
    let a = runner.get("a")?;
    log_type_of(runner, &a)?;

    let record = ordinary_object_create(None);
    set(&record, PropertyKey::str("b"), str_value("c"));
    runner.set("a", JsValue::Object(record))?;
    let a = runner.get("a")?;
    log_type_of(runner, &a)?;

    let symbol_fn = as_object(runner.get("Symbol")?)?;
    let sym = runner.call_bare(&symbol_fn, vec![])?;
    runner.set("a", sym)?;
    let a = runner.get("a")?;
    log_type_of(runner, &a)?;
    Ok(())
}

/// Dot and computed access resolve identically: `hello world`, `42`,
/// `true`, `hello world`.
pub fn object_literals(runner: &mut JsRunner) -> Result<(), JErrorType> {
    let obj = ordinary_object_create(None);
    set(&obj, PropertyKey::str("a"), str_value("hello world"));
    set(&obj, PropertyKey::str("b"), int(42));
    set(&obj, PropertyKey::str("c"), JsValue::Boolean(true));

    let a = get(&obj, &PropertyKey::str("a"));
    runner.console_log(vec![a])?;
    let b = get(&obj, &PropertyKey::str("b"));
    runner.console_log(vec![b])?;
    let c = get(&obj, &PropertyKey::str("c"));
    runner.console_log(vec![c])?;

    // computed access through a string value
    let key = str_value("a");
    let v = get_v(&JsValue::Object(obj), &PropertyKey::Str(to_string(&key)?))?;
    runner.console_log(vec![v])?;
    Ok(())
}

/// Callables are a record subtype and may carry properties of their own:
/// `function`, `number`, `string`.
pub fn functions_as_values(runner: &mut JsRunner) -> Result<(), JErrorType> {
    let foo = runner.make_function(
        "foo",
        vec![],
        vec![],
        Rc::new(|_ctx_stack, _this, _args| Ok(int(42))),
    )?;
    runner.hoist_function("foo", foo.clone())?;
    set(&foo, PropertyKey::str("bar"), str_value("hello world"));

    log_type_of(runner, &JsValue::Object(foo.clone()))?;
    let result = runner.call_bare(&foo, vec![])?;
    log_type_of(runner, &result)?;
    let bar = get(&foo, &PropertyKey::str("bar"));
    log_type_of(runner, &bar)?;
    Ok(())
}
