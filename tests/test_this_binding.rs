//! Tests for call-site receiver binding: bare, method, explicit and
//! constructor call forms.

extern crate gist;

use std::rc::Rc;

use gist::runner::api::JsRunner;
use gist::runner::ds::error::JErrorType;
use gist::runner::ds::object::JsObjectType;
use gist::runner::ds::object_property::PropertyKey;
use gist::runner::ds::operations::lex_env::get_this_binding;
use gist::runner::ds::operations::object::{get, get_v, has_own_property, ordinary_object_create, set};
use gist::runner::ds::realm::EvalMode;
use gist::runner::ds::value::JsValue;

fn s(v: &str) -> JsValue {
    JsValue::String(v.to_string())
}

/// A callable returning `this.bar`.
fn make_bar_reader(runner: &mut JsRunner) -> JsObjectType {
    runner
        .make_function(
            "foo",
            vec![],
            vec![],
            Rc::new(|ctx_stack, _this, _args| {
                let this = get_this_binding(ctx_stack)?;
                get_v(&this, &PropertyKey::str("bar"))
            }),
        )
        .unwrap()
}

#[test]
fn test_bare_call_binds_the_global_record() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    runner.declare_var("bar").unwrap();
    runner.set("bar", s("global")).unwrap();
    let foo = make_bar_reader(&mut runner);
    assert_eq!(runner.call_bare(&foo, vec![]).unwrap(), s("global"));
}

#[test]
fn test_method_call_binds_the_holder() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    let foo = make_bar_reader(&mut runner);

    let obj1 = ordinary_object_create(None);
    set(&obj1, PropertyKey::str("bar"), s("obj1"));
    set(&obj1, PropertyKey::str("foo"), JsValue::Object(foo.clone()));
    let obj2 = ordinary_object_create(None);
    set(&obj2, PropertyKey::str("bar"), s("obj2"));
    set(&obj2, PropertyKey::str("foo"), JsValue::Object(foo));

    assert_eq!(
        runner
            .call_method(&obj1, &PropertyKey::str("foo"), vec![])
            .unwrap(),
        s("obj1")
    );
    assert_eq!(
        runner
            .call_method(&obj2, &PropertyKey::str("foo"), vec![])
            .unwrap(),
        s("obj2")
    );
}

#[test]
fn test_explicit_binding_call() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    let foo = make_bar_reader(&mut runner);
    let obj2 = ordinary_object_create(None);
    set(&obj2, PropertyKey::str("bar"), s("obj2"));
    assert_eq!(
        runner
            .call_with(&foo, JsValue::Object(obj2), vec![])
            .unwrap(),
        s("obj2")
    );
}

#[test]
fn test_constructor_call_binds_a_fresh_record() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    runner.declare_var("bar").unwrap();
    runner.set("bar", s("global")).unwrap();
    // the body records what it saw for `this.bar` onto the receiver
    let ctor = runner
        .make_function(
            "foo",
            vec![],
            vec![],
            Rc::new(|ctx_stack, _this, _args| {
                let this = get_this_binding(ctx_stack)?;
                let seen = get_v(&this, &PropertyKey::str("bar"))?;
                if let JsValue::Object(o) = &this {
                    set(o, PropertyKey::str("seen"), seen);
                }
                Ok(JsValue::Undefined)
            }),
        )
        .unwrap();
    let made = match runner.construct(&ctor, vec![]).unwrap() {
        JsValue::Object(o) => o,
        v => panic!("expected a record, got {}", v),
    };
    // a fresh record has no `bar`, even though the global one does
    assert!(has_own_property(&made, &PropertyKey::str("seen")));
    assert_eq!(get(&made, &PropertyKey::str("seen")), JsValue::Undefined);
}

#[test]
fn test_constructor_call_receiver_and_implicit_return() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    let ctor = runner
        .make_function(
            "Point",
            vec![],
            vec![],
            Rc::new(|ctx_stack, _this, _args| {
                let this = get_this_binding(ctx_stack)?;
                match &this {
                    JsValue::Object(o) => set(o, PropertyKey::str("x"), s("here")),
                    v => {
                        return Err(JErrorType::TypeError(format!(
                            "receiver is not a record: {}",
                            v
                        )))
                    }
                }
                Ok(JsValue::Undefined)
            }),
        )
        .unwrap();
    let made = runner.construct(&ctor, vec![]).unwrap();
    let made = match made {
        JsValue::Object(o) => o,
        v => panic!("expected a record, got {}", v),
    };
    assert!(has_own_property(&made, &PropertyKey::str("x")));
    assert_eq!(get(&made, &PropertyKey::str("x")), s("here"));
    // the fresh record is linked to the callable's prototype, which points
    // back at the callable through `constructor`
    let proto_ctor = get(&made, &PropertyKey::str("constructor"));
    assert_eq!(proto_ctor, JsValue::Object(ctor));
}

#[test]
fn test_constructor_explicit_record_return_wins() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    let replacement = ordinary_object_create(None);
    set(&replacement, PropertyKey::str("tag"), s("explicit"));
    let r = replacement.clone();
    let ctor = runner
        .make_function(
            "Maker",
            vec![],
            vec![],
            Rc::new(move |_ctx_stack, _this, _args| Ok(JsValue::Object(r.clone()))),
        )
        .unwrap();
    let made = runner.construct(&ctor, vec![]).unwrap();
    assert_eq!(made, JsValue::Object(replacement));
}

#[test]
fn test_strict_bare_call_receiver_is_undefined() {
    let mut runner = JsRunner::new_capturing(EvalMode::Strict);
    let probe = runner
        .make_function(
            "probe",
            vec![],
            vec![],
            Rc::new(|ctx_stack, _this, _args| get_this_binding(ctx_stack)),
        )
        .unwrap();
    assert_eq!(runner.call_bare(&probe, vec![]).unwrap(), JsValue::Undefined);

    // reading a property through the undefined receiver is a type error
    let foo = make_bar_reader(&mut runner);
    match runner.call_bare(&foo, vec![]) {
        Err(JErrorType::TypeError(_)) => {}
        other => panic!("expected type error, got {:?}", other),
    }
}
