//! Prototype section: a read-miss on the derived record delegates to its
//! linked base.

use crate::notes::{as_object, int, str_value};
use crate::runner::api::JsRunner;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::operations::object::{get, ordinary_object_create, set};
use crate::runner::ds::value::JsValue;

/// ```text
/// var foo = { a: 42 };
/// var bar = Object.create( foo );
/// bar.b = "hello world";
/// bar.b;   // "hello world"
/// bar.a;   // 42 <-- delegated to `foo`
/// ```
pub fn delegation(runner: &mut JsRunner) -> Result<(), JErrorType> {
    let foo = ordinary_object_create(None);
    set(&foo, PropertyKey::str("a"), int(42));

    let object_builtin = as_object(runner.get("Object")?)?;
    let bar = as_object(runner.call_method(
        &object_builtin,
        &PropertyKey::str("create"),
        vec![JsValue::Object(foo)],
    )?)?;
    set(&bar, PropertyKey::str("b"), str_value("hello world"));

    let b = get(&bar, &PropertyKey::str("b"));
    runner.console_log(vec![b])?;
    let a = get(&bar, &PropertyKey::str("a"));
    runner.console_log(vec![a])?;
    Ok(())
}
