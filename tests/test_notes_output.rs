//! Whole-script test: playing every notes section produces exactly the
//! console lines the source annotations promise, in order.

extern crate gist;

use gist::notes;
use gist::runner::api::JsRunner;
use gist::runner::ds::realm::EvalMode;

#[test]
fn test_full_transcript() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    notes::run_all(&mut runner).unwrap();
    let expected = vec![
        // lexical scope
        "3", "1", // type tags
        "undefined", "string", "boolean", "object", "undefined", "object", "symbol",
        // object literals
        "hello world", "42", "true", "hello world", // functions as values
        "function", "number", "string", // equality and inequality
        "true", "true", "false", "false", "false", "false", // hoisting
        "3", "2", // nested scopes
        "1 2 3", "1 2", "1", // auto-global
        "1", // block scoping
        "5", "7", "9", // IIFE
        "10", "42", "42", // closures
        "4", "42", "23", // this binding
        "global", "obj1", "obj2", "undefined", // prototype delegation
        "hello world", "42",
    ];
    assert_eq!(runner.console_output(), expected);
}

#[test]
fn test_sections_are_self_contained() {
    // each section also runs alone against a fresh runner
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    notes::closures::make_adder(&mut runner).unwrap();
    assert_eq!(runner.console_output(), vec!["4", "42", "23"]);

    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    notes::prototypes::delegation(&mut runner).unwrap();
    assert_eq!(runner.console_output(), vec!["hello world", "42"]);

    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    notes::scopes::block_scoping(&mut runner).unwrap();
    assert_eq!(runner.console_output(), vec!["5", "7", "9"]);
}
