//! Closure section: an inner callable keeps its maker's frame alive, and
//! every maker invocation gets an independent frame.

use std::rc::Rc;

use crate::notes::{as_object, int};
use crate::runner::api::JsRunner;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::function_object::new_function_in_running_ctx;
use crate::runner::ds::operations::lex_env::resolve_binding;
use crate::runner::ds::value::JsValue;
use crate::runner::eval::expression::add;

/// ```text
/// function makeAdder(x) {
///     function add(y) {
///         return y + x;
///     }
///     return add;
/// }
/// var plusOne = makeAdder( 1 );
/// var plusTen = makeAdder( 10 );
/// plusOne( 3 );   // 4
/// plusOne( 41 );  // 42
/// plusTen( 13 );  // 23
/// ```
pub fn make_adder(runner: &mut JsRunner) -> Result<(), JErrorType> {
    let make_adder = runner.make_function(
        "makeAdder",
        vec!["x"],
        vec![],
        Rc::new(|ctx_stack, _this, _args| {
            let add_fn = new_function_in_running_ctx(
                ctx_stack,
                "add",
                vec!["y".to_string()],
                vec![],
                Rc::new(|ctx_stack, _this, _args| {
                    let y = resolve_binding(ctx_stack, "y")?;
                    // `x` resolves through the maker's frame
                    let x = resolve_binding(ctx_stack, "x")?;
                    add(&y, &x)
                }),
            )?;
            Ok(JsValue::Object(add_fn))
        }),
    )?;
    runner.hoist_function("makeAdder", make_adder.clone())?;

    let plus_one = as_object(runner.call_bare(&make_adder, vec![int(1)])?)?;
    let plus_ten = as_object(runner.call_bare(&make_adder, vec![int(10)])?)?;

    let r = runner.call_bare(&plus_one, vec![int(3)])?;
    runner.console_log(vec![r])?;
    let r = runner.call_bare(&plus_one, vec![int(41)])?;
    runner.console_log(vec![r])?;
    let r = runner.call_bare(&plus_ten, vec![int(13)])?;
    runner.console_log(vec![r])?;
    Ok(())
}
