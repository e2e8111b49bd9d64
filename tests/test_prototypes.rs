//! Tests for prototype delegation: read-miss fallback, write shadowing and
//! transitive chains.

extern crate gist;

use gist::runner::api::JsRunner;
use gist::runner::ds::object_property::PropertyKey;
use gist::runner::ds::operations::object::{
    get, get_prototype_of, has_own_property, ordinary_object_create, set, set_prototype_of,
};
use gist::runner::ds::realm::EvalMode;
use gist::runner::ds::value::{JsNumberType, JsValue};

fn int(n: i64) -> JsValue {
    JsValue::Number(JsNumberType::Integer(n))
}

fn s(v: &str) -> JsValue {
    JsValue::String(v.to_string())
}

#[test]
fn test_read_miss_delegates_to_the_base() {
    let base = ordinary_object_create(None);
    set(&base, PropertyKey::str("a"), int(42));
    let derived = ordinary_object_create(Some(base));
    set(&derived, PropertyKey::str("b"), s("hello world"));

    assert_eq!(get(&derived, &PropertyKey::str("b")), s("hello world"));
    assert_eq!(get(&derived, &PropertyKey::str("a")), int(42));
    assert!(!has_own_property(&derived, &PropertyKey::str("a")));
}

#[test]
fn test_write_shadows_instead_of_mutating_through() {
    let base = ordinary_object_create(None);
    set(&base, PropertyKey::str("a"), int(42));
    let derived = ordinary_object_create(Some(base.clone()));

    set(&derived, PropertyKey::str("a"), int(99));
    assert_eq!(get(&derived, &PropertyKey::str("a")), int(99));
    assert_eq!(get(&base, &PropertyKey::str("a")), int(42));
}

#[test]
fn test_transitive_delegation() {
    let root = ordinary_object_create(None);
    set(&root, PropertyKey::str("a"), int(1));
    let mid = ordinary_object_create(Some(root));
    set(&mid, PropertyKey::str("b"), int(2));
    let leaf = ordinary_object_create(Some(mid));

    assert_eq!(get(&leaf, &PropertyKey::str("a")), int(1));
    assert_eq!(get(&leaf, &PropertyKey::str("b")), int(2));
    assert_eq!(get(&leaf, &PropertyKey::str("c")), JsValue::Undefined);
}

#[test]
fn test_prototype_cycle_is_rejected() {
    let a = ordinary_object_create(None);
    let b = ordinary_object_create(Some(a.clone()));
    assert!(!set_prototype_of(&a, Some(b)));
    assert!(get_prototype_of(&a).is_none());
}

#[test]
fn test_object_create_builtin_links() {
    let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
    let base = ordinary_object_create(None);
    set(&base, PropertyKey::str("a"), int(42));

    let object_builtin = match runner.get("Object").unwrap() {
        JsValue::Object(o) => o,
        v => panic!("Object is not an object: {}", v),
    };
    let derived = match runner
        .call_method(
            &object_builtin,
            &PropertyKey::str("create"),
            vec![JsValue::Object(base.clone())],
        )
        .unwrap()
    {
        JsValue::Object(o) => o,
        v => panic!("expected a record, got {}", v),
    };

    set(&derived, PropertyKey::str("b"), s("hello world"));
    assert_eq!(get(&derived, &PropertyKey::str("b")), s("hello world"));
    assert_eq!(get(&derived, &PropertyKey::str("a")), int(42));
    let proto = get_prototype_of(&derived).unwrap();
    assert_eq!(JsValue::Object(proto), JsValue::Object(base));
}
