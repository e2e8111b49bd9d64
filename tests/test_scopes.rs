//! Tests for lexical scoping, hoisting, block scoping, the auto-global
//! and closures.

extern crate gist;

use std::rc::Rc;

use gist::runner::api::JsRunner;
use gist::runner::ds::error::JErrorType;
use gist::runner::ds::function_object::new_function_in_running_ctx;
use gist::runner::ds::operations::lex_env::{resolve_binding, set_binding};
use gist::runner::ds::realm::EvalMode;
use gist::runner::ds::value::{JsNumberType, JsValue};
use gist::runner::eval::expression::add;

fn int(n: i64) -> JsValue {
    JsValue::Number(JsNumberType::Integer(n))
}

#[test]
fn test_hoisted_var_reads_undefined_before_assignment() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    // `var a` appears late in the body; the pre-pass binds it first
    let f = runner
        .make_function(
            "foo",
            vec![],
            vec!["a"],
            Rc::new(|ctx_stack, _this, _args| {
                let early = resolve_binding(ctx_stack, "a")?;
                assert_eq!(early, JsValue::Undefined);
                set_binding(ctx_stack, "a", int(3))?;
                resolve_binding(ctx_stack, "a")
            }),
        )
        .unwrap();
    assert_eq!(runner.call_bare(&f, vec![]).unwrap(), int(3));
}

#[test]
fn test_function_local_var_shadows_global() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    runner.declare_var("a").unwrap();
    runner.set("a", int(2)).unwrap();
    let f = runner
        .make_function(
            "foo",
            vec![],
            vec!["a"],
            Rc::new(|ctx_stack, _this, _args| {
                set_binding(ctx_stack, "a", int(3))?;
                resolve_binding(ctx_stack, "a")
            }),
        )
        .unwrap();
    assert_eq!(runner.call_bare(&f, vec![]).unwrap(), int(3));
    assert_eq!(runner.get("a").unwrap(), int(2));
}

#[test]
fn test_undeclared_read_is_a_reference_error() {
    let runner = JsRunner::new_capturing(EvalMode::Sloppy);
    match runner.get("nope") {
        Err(JErrorType::ReferenceError(_)) => {}
        other => panic!("expected reference error, got {:?}", other),
    }
}

#[test]
fn test_sloppy_auto_global() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    let f = runner
        .make_function(
            "foo",
            vec![],
            vec![],
            Rc::new(|ctx_stack, _this, _args| {
                set_binding(ctx_stack, "a", int(1))?;
                Ok(JsValue::Undefined)
            }),
        )
        .unwrap();
    runner.call_bare(&f, vec![]).unwrap();
    assert_eq!(runner.get("a").unwrap(), int(1));
}

#[test]
fn test_strict_undeclared_assignment_is_a_reference_error() {
    let mut runner = JsRunner::new_capturing(EvalMode::Strict);
    let f = runner
        .make_function(
            "foo",
            vec![],
            vec![],
            Rc::new(|ctx_stack, _this, _args| {
                set_binding(ctx_stack, "a", int(1))?;
                Ok(JsValue::Undefined)
            }),
        )
        .unwrap();
    match runner.call_bare(&f, vec![]) {
        Err(JErrorType::ReferenceError(_)) => {}
        other => panic!("expected reference error, got {:?}", other),
    }
}

#[test]
fn test_block_scoped_binding_vanishes_with_its_block() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    runner.enter_block().unwrap();
    runner.declare_let("b", int(2)).unwrap();
    assert_eq!(runner.get("b").unwrap(), int(2));
    runner.exit_block().unwrap();
    match runner.get("b") {
        Err(JErrorType::ReferenceError(_)) => {}
        other => panic!("expected reference error, got {:?}", other),
    }
}

#[test]
fn test_closure_captures_by_reference() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    // outer() makes a reader closure, then mutates the captured binding
    // after the closure exists; the reader observes the mutation
    let outer = runner
        .make_function(
            "outer",
            vec![],
            vec!["a"],
            Rc::new(|ctx_stack, _this, _args| {
                set_binding(ctx_stack, "a", int(1))?;
                let reader = new_function_in_running_ctx(
                    ctx_stack,
                    "reader",
                    vec![],
                    vec![],
                    Rc::new(|ctx_stack, _this, _args| resolve_binding(ctx_stack, "a")),
                )?;
                set_binding(ctx_stack, "a", int(2))?;
                Ok(JsValue::Object(reader))
            }),
        )
        .unwrap();
    let reader = match runner.call_bare(&outer, vec![]).unwrap() {
        JsValue::Object(o) => o,
        v => panic!("expected a callable, got {}", v),
    };
    // the maker's frame outlives the maker's call
    assert_eq!(runner.call_bare(&reader, vec![]).unwrap(), int(2));
}

#[test]
fn test_make_adder_frames_are_independent() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    let make_adder = runner
        .make_function(
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
                        let x = resolve_binding(ctx_stack, "x")?;
                        add(&y, &x)
                    }),
                )?;
                Ok(JsValue::Object(add_fn))
            }),
        )
        .unwrap();
    let plus_one = match runner.call_bare(&make_adder, vec![int(1)]).unwrap() {
        JsValue::Object(o) => o,
        v => panic!("expected a callable, got {}", v),
    };
    let plus_ten = match runner.call_bare(&make_adder, vec![int(10)]).unwrap() {
        JsValue::Object(o) => o,
        v => panic!("expected a callable, got {}", v),
    };
    assert_eq!(runner.call_bare(&plus_one, vec![int(3)]).unwrap(), int(4));
    assert_eq!(runner.call_bare(&plus_one, vec![int(41)]).unwrap(), int(42));
    assert_eq!(runner.call_bare(&plus_ten, vec![int(13)]).unwrap(), int(23));
}
