//! Receiver-binding section: the same callable reads `this.bar` under all
//! four call-site forms.

use std::rc::Rc;

use crate::notes::{log, str_value};
use crate::runner::api::JsRunner;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::operations::lex_env::get_this_binding;
use crate::runner::ds::operations::object::{get_v, ordinary_object_create, set};
use crate::runner::ds::value::JsValue;

/// ```text
/// function foo() {
///     console.log( this.bar );
/// }
/// var bar = "global";
/// var obj1 = { bar: "obj1", foo: foo };
/// var obj2 = { bar: "obj2" };
/// foo();              // "global"
/// obj1.foo();         // "obj1"
/// foo.call( obj2 );   // "obj2"
/// new foo();          // undefined
/// ```
pub fn call_site_forms(runner: &mut JsRunner) -> Result<(), JErrorType> {
    let foo = runner.make_function(
        "foo",
        vec![],
        vec![],
        Rc::new(|ctx_stack, _this, _args| {
            let this = get_this_binding(ctx_stack)?;
            let bar = get_v(&this, &PropertyKey::str("bar"))?;
            log(ctx_stack, vec![bar])?;
            Ok(JsValue::Undefined)
        }),
    )?;
    runner.hoist_function("foo", foo.clone())?;

    runner.declare_var("bar")?;
    runner.set("bar", str_value("global"))?;

    let obj1 = ordinary_object_create(None);
    set(&obj1, PropertyKey::str("bar"), str_value("obj1"));
    set(&obj1, PropertyKey::str("foo"), JsValue::Object(foo.clone()));

    let obj2 = ordinary_object_create(None);
    set(&obj2, PropertyKey::str("bar"), str_value("obj2"));

    runner.call_bare(&foo, vec![])?;
    runner.call_method(&obj1, &PropertyKey::str("foo"), vec![])?;
    runner.call_with(&foo, JsValue::Object(obj2), vec![])?;
    runner.construct(&foo, vec![])?;
    Ok(())
}
