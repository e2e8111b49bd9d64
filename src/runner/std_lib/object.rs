//! Object built-in.
//!
//! `Object.create` is the only surface needed here: it is the primitive
//! behind prototype linkage.

use std::rc::Rc;

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::function_object::{new_function_object, JsFnBody};
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::operations::object::{ordinary_object_create, set};
use crate::runner::ds::realm::JsCodeRealmType;
use crate::runner::ds::value::JsValue;

/// Register the `Object` function and its `create` method on the realm's
/// global object.
pub fn install(realm: &JsCodeRealmType) {
    let (global_object, global_env) = {
        let r = (**realm).borrow();
        (r.global_object.clone(), r.global_env.clone())
    };

    let object_fn_body: JsFnBody = Rc::new(|_ctx_stack, _this, args| match args.first() {
        None | Some(JsValue::Undefined) | Some(JsValue::Null) => {
            Ok(JsValue::Object(ordinary_object_create(None)))
        }
        Some(v) => Ok(v.clone()),
    });
    let object_fn = new_function_object(
        "Object",
        vec!["value".to_string()],
        vec![],
        object_fn_body,
        global_env.clone(),
        realm.clone(),
    );

    let create_body: JsFnBody = Rc::new(|_ctx_stack, _this, args| match args.first() {
        Some(JsValue::Object(proto)) => {
            Ok(JsValue::Object(ordinary_object_create(Some(proto.clone()))))
        }
        Some(JsValue::Null) => Ok(JsValue::Object(ordinary_object_create(None))),
        _ => Err(JErrorType::TypeError(
            "Object prototype may only be an Object or null".to_string(),
        )),
    });
    let create_fn = new_function_object(
        "create",
        vec!["proto".to_string()],
        vec![],
        create_body,
        global_env,
        realm.clone(),
    );
    {
        let mut f = (*object_fn).borrow_mut();
        f.as_js_object_mut()
            .set(PropertyKey::str("create"), JsValue::Object(create_fn));
    }

    set(
        &global_object,
        PropertyKey::str("Object"),
        JsValue::Object(object_fn),
    );
}
