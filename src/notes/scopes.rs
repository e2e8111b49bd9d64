//! Scope sections: lexical nesting, the auto-global, block scoping and
//! IIFEs.

use std::rc::Rc;

use crate::notes::{int, log};
use crate::runner::api::JsRunner;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::function_object::{call_bare, new_function_in_running_ctx};
use crate::runner::ds::operations::lex_env::{
    declare_let, pop_block_scope, push_block_scope, resolve_binding, set_binding,
};
use crate::runner::ds::operations::test_and_comparison::abstract_relational_comparison;
use crate::runner::ds::value::JsValue;
use crate::runner::eval::expression::{add, multiply};

/// ```text
/// function outer() {
///     var a = 1;
///     function inner() {
///         var b = 2;
///         console.log( a + b );   // 3
///     }
///     inner();
///     console.log( a );           // 1
/// }
/// outer();
/// ```
pub fn lexical_scope(runner: &mut JsRunner) -> Result<(), JErrorType> {
    let outer = runner.make_function(
        "outer",
        vec![],
        vec!["a"],
        Rc::new(|ctx_stack, _this, _args| {
            set_binding(ctx_stack, "a", int(1))?;
            let inner = new_function_in_running_ctx(
                ctx_stack,
                "inner",
                vec![],
                vec!["b".to_string()],
                Rc::new(|ctx_stack, _this, _args| {
                    set_binding(ctx_stack, "b", int(2))?;
                    let a = resolve_binding(ctx_stack, "a")?;
                    let b = resolve_binding(ctx_stack, "b")?;
                    let sum = add(&a, &b)?;
                    log(ctx_stack, vec![sum])?;
                    Ok(JsValue::Undefined)
                }),
            )?;
            call_bare(ctx_stack, &inner, vec![])?;
            let a = resolve_binding(ctx_stack, "a")?;
            log(ctx_stack, vec![a])?;
            Ok(JsValue::Undefined)
        }),
    )?;
    runner.hoist_function("outer", outer.clone())?;
    runner.call_bare(&outer, vec![])?;
    Ok(())
}

/// Each function sees its own bindings and every enclosing frame's:
/// `1 2 3`, `1 2`, `1`.
pub fn nested_scopes(runner: &mut JsRunner) -> Result<(), JErrorType> {
    let foo = runner.make_function(
        "foo",
        vec![],
        vec!["a"],
        Rc::new(|ctx_stack, _this, _args| {
            set_binding(ctx_stack, "a", int(1))?;
            let bar = new_function_in_running_ctx(
                ctx_stack,
                "bar",
                vec![],
                vec!["b".to_string()],
                Rc::new(|ctx_stack, _this, _args| {
                    set_binding(ctx_stack, "b", int(2))?;
                    let baz = new_function_in_running_ctx(
                        ctx_stack,
                        "baz",
                        vec![],
                        vec!["c".to_string()],
                        Rc::new(|ctx_stack, _this, _args| {
                            set_binding(ctx_stack, "c", int(3))?;
                            let a = resolve_binding(ctx_stack, "a")?;
                            let b = resolve_binding(ctx_stack, "b")?;
                            let c = resolve_binding(ctx_stack, "c")?;
                            log(ctx_stack, vec![a, b, c])?;
                            Ok(JsValue::Undefined)
                        }),
                    )?;
                    call_bare(ctx_stack, &baz, vec![])?;
                    let a = resolve_binding(ctx_stack, "a")?;
                    let b = resolve_binding(ctx_stack, "b")?;
                    log(ctx_stack, vec![a, b])?;
                    Ok(JsValue::Undefined)
                }),
            )?;
            call_bare(ctx_stack, &bar, vec![])?;
            let a = resolve_binding(ctx_stack, "a")?;
            log(ctx_stack, vec![a])?;
            Ok(JsValue::Undefined)
        }),
    )?;
    runner.hoist_function("foo", foo.clone())?;
    runner.call_bare(&foo, vec![])?;
    Ok(())
}

/// Assigning a name no frame owns, outside strict mode, creates a global:
/// `1`.
pub fn auto_global(runner: &mut JsRunner) -> Result<(), JErrorType> {
    let foo = runner.make_function(
        "foo",
        vec![],
        vec![],
        Rc::new(|ctx_stack, _this, _args| {
            // `a` not formally declared
            set_binding(ctx_stack, "a", int(1))?;
            Ok(JsValue::Undefined)
        }),
    )?;
    runner.hoist_function("foo", foo.clone())?;
    runner.call_bare(&foo, vec![])?;
    let a = runner.get("a")?;
    runner.console_log(vec![a])?;
    Ok(())
}

/// `let` bindings belong to their block; the loop body re-declares `c`
/// each pass: `5`, `7`, `9`.
pub fn block_scoping(runner: &mut JsRunner) -> Result<(), JErrorType> {
    let foo = runner.make_function(
        "foo",
        vec![],
        vec!["a"],
        Rc::new(|ctx_stack, _this, _args| {
            set_binding(ctx_stack, "a", int(1))?;
            let a = resolve_binding(ctx_stack, "a")?;
            let in_range = match abstract_relational_comparison(&a, &int(1))? {
                Some(lt) => !lt,
                None => false,
            };
            if in_range {
                push_block_scope(ctx_stack)?;
                declare_let(ctx_stack, "b", int(2))?;
                loop {
                    let b = resolve_binding(ctx_stack, "b")?;
                    if abstract_relational_comparison(&b, &int(5))? != Some(true) {
                        break;
                    }
                    push_block_scope(ctx_stack)?;
                    declare_let(ctx_stack, "c", multiply(&b, &int(2))?)?;
                    set_binding(ctx_stack, "b", add(&b, &int(1))?)?;
                    let a = resolve_binding(ctx_stack, "a")?;
                    let c = resolve_binding(ctx_stack, "c")?;
                    let sum = add(&a, &c)?;
                    log(ctx_stack, vec![sum])?;
                    pop_block_scope(ctx_stack)?;
                }
                pop_block_scope(ctx_stack)?;
            }
            Ok(JsValue::Undefined)
        }),
    )?;
    runner.hoist_function("foo", foo.clone())?;
    runner.call_bare(&foo, vec![])?;
    Ok(())
}

/// An immediately-invoked function gets its own frame; the enclosing `a`
/// is untouched: `10`, `42`, `42`.
pub fn iife(runner: &mut JsRunner) -> Result<(), JErrorType> {
    runner.declare_var("a")?;
    runner.set("a", int(42))?;

    let shadowing = runner.make_function(
        "IIFE",
        vec![],
        vec!["a"],
        Rc::new(|ctx_stack, _this, _args| {
            set_binding(ctx_stack, "a", int(10))?;
            let a = resolve_binding(ctx_stack, "a")?;
            log(ctx_stack, vec![a])?;
            Ok(JsValue::Undefined)
        }),
    )?;
    runner.call_bare(&shadowing, vec![])?;
    let a = runner.get("a")?;
    runner.console_log(vec![a])?;

    let returning = runner.make_function(
        "IIFE",
        vec![],
        vec![],
        Rc::new(|_ctx_stack, _this, _args| Ok(int(42))),
    )?;
    let result = runner.call_bare(&returning, vec![])?;
    runner.declare_var("x")?;
    runner.set("x", result)?;
    let x = runner.get("x")?;
    runner.console_log(vec![x])?;
    Ok(())
}
