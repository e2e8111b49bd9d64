use std::cell::RefCell;
use std::rc::Rc;

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object::{JsObjectType, ObjectType, OrdinaryObject};
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::value::JsValue;

/// Creates a record with an explicit parent link. This is the runtime
/// relation behind `Object.create`: a one-way lookup fallback between two
/// instances, not a static type relation.
pub fn ordinary_object_create(prototype: Option<JsObjectType>) -> JsObjectType {
    Rc::new(RefCell::new(ObjectType::Ordinary(Box::new(
        OrdinaryObject::new(prototype),
    ))))
}

pub fn get(o: &JsObjectType, key: &PropertyKey) -> JsValue {
    (**o).borrow().as_js_object().get(key)
}

pub fn set(o: &JsObjectType, key: PropertyKey, value: JsValue) {
    (**o).borrow_mut().as_js_object_mut().set(key, value)
}

pub fn has_own_property(o: &JsObjectType, key: &PropertyKey) -> bool {
    (**o).borrow().as_js_object().has_own_property(key)
}

pub fn set_prototype_of(o: &JsObjectType, prototype: Option<JsObjectType>) -> bool {
    (**o)
        .borrow_mut()
        .as_js_object_mut()
        .set_prototype_of(prototype)
}

pub fn get_prototype_of(o: &JsObjectType) -> Option<JsObjectType> {
    (**o).borrow().as_js_object().get_prototype_of()
}

/// Property read off an arbitrary value. Reading through the undefined- or
/// null-marker is the one genuine error in this model; other primitives
/// simply have no own entries here.
pub fn get_v(v: &JsValue, key: &PropertyKey) -> Result<JsValue, JErrorType> {
    match v {
        JsValue::Undefined | JsValue::Null => Err(JErrorType::TypeError(format!(
            "cannot read property '{}' of {}",
            key, v
        ))),
        JsValue::Object(o) => Ok(get(o, key)),
        _ => Ok(JsValue::Undefined),
    }
}
