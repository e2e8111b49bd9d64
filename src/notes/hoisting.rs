//! Hoisting section: a function-scoped declaration late in the body still
//! owns the whole body, and a named function can be called above its
//! declaration line.

use std::rc::Rc;

use crate::notes::{int, log};
use crate::runner::api::JsRunner;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::operations::lex_env::{resolve_binding, set_binding};
use crate::runner::ds::value::JsValue;

/// ```text
/// var a = 2;
/// foo();              // works because `foo()` declaration is "hoisted"
/// function foo() {
///     a = 3;
///     console.log( a );   // 3
///     var a;              // declaration is "hoisted" to the top of foo()
/// }
/// console.log( a );   // 2
/// ```
pub fn hoisted_declarations(runner: &mut JsRunner) -> Result<(), JErrorType> {
    runner.declare_var("a")?;
    runner.set("a", int(2))?;

    let foo = runner.make_function(
        "foo",
        vec![],
        vec!["a"],
        Rc::new(|ctx_stack, _this, _args| {
            // the late `var a` already owns this assignment
            set_binding(ctx_stack, "a", int(3))?;
            let a = resolve_binding(ctx_stack, "a")?;
            log(ctx_stack, vec![a])?;
            Ok(JsValue::Undefined)
        }),
    )?;
    runner.hoist_function("foo", foo.clone())?;
    runner.call_bare(&foo, vec![])?;

    let a = runner.get("a")?;
    runner.console_log(vec![a])?;
    Ok(())
}
