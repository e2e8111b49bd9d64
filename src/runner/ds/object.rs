use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::function_object::JsFunctionObject;
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::operations::test_and_comparison::same_js_object;
use crate::runner::ds::operations::type_conversion::to_string;
use crate::runner::ds::value::{JsNumberType, JsValue};

pub type JsObjectType = Rc<RefCell<ObjectType>>;

lazy_static! {
    pub static ref ARRAY_LENGTH_PROP: PropertyKey = PropertyKey::Str("length".to_string());
}

pub enum ObjectType {
    Ordinary(Box<dyn JsObject>),
    Function(Box<dyn JsFunctionObject>),
    Array(Box<dyn JsArrayObject>),
}
impl ObjectType {
    pub fn is_callable(&self) -> bool {
        match self {
            ObjectType::Function(_) => true,
            _ => false,
        }
    }

    pub fn as_js_object(&self) -> &dyn JsObject {
        match self {
            ObjectType::Ordinary(o) => o.as_super_trait(),
            ObjectType::Function(o) => o.as_super_trait(),
            ObjectType::Array(o) => o.as_super_trait(),
        }
    }

    pub fn as_js_object_mut(&mut self) -> &mut dyn JsObject {
        match self {
            ObjectType::Ordinary(o) => o.as_super_trait_mut(),
            ObjectType::Function(o) => o.as_super_trait_mut(),
            ObjectType::Array(o) => o.as_super_trait_mut(),
        }
    }

    /// Panics when the object is not callable; gate on [`ObjectType::is_callable`].
    pub fn as_js_function_object(&self) -> &dyn JsFunctionObject {
        match self {
            ObjectType::Function(o) => o.as_js_function_object(),
            _ => panic!("object is not callable"),
        }
    }
}
impl PartialEq for ObjectType {
    fn eq(&self, other: &Self) -> bool {
        same_js_object(self.as_js_object(), other.as_js_object())
    }
}

pub struct ObjectBase {
    properties: HashMap<PropertyKey, JsValue>,
    prototype: Option<JsObjectType>,
}
impl ObjectBase {
    pub fn new() -> Self {
        ObjectBase {
            properties: HashMap::new(),
            prototype: None,
        }
    }
}

pub trait JsObject {
    fn get_object_base_mut(&mut self) -> &mut ObjectBase;

    fn get_object_base(&self) -> &ObjectBase;

    fn as_super_trait(&self) -> &dyn JsObject;

    fn as_super_trait_mut(&mut self) -> &mut dyn JsObject;

    fn get_prototype_of(&self) -> Option<JsObjectType> {
        match &self.get_object_base().prototype {
            None => None,
            Some(p) => Some(p.clone()),
        }
    }

    /// Establishes the one-way delegation link. Fails on a chain that would
    /// loop back to this object.
    fn set_prototype_of(&mut self, prototype: Option<JsObjectType>) -> bool {
        if let Some(new_proto) = &prototype {
            let mut p = Some(new_proto.clone());
            loop {
                if let Some(some_p) = p {
                    match some_p.try_borrow() {
                        Ok(b) => {
                            if same_js_object(self.as_super_trait(), b.as_js_object()) {
                                return false;
                            }
                            p = b.as_js_object().get_prototype_of();
                        }
                        // A link already mutably borrowed is the object being
                        // mutated, which is itself a loop.
                        Err(_) => return false,
                    }
                } else {
                    break;
                }
            }
        }
        self.get_object_base_mut().prototype = prototype;
        true
    }

    fn get_own_property(&self, property: &PropertyKey) -> Option<JsValue> {
        self.get_object_base().properties.get(property).cloned()
    }

    fn has_own_property(&self, property: &PropertyKey) -> bool {
        self.get_object_base().properties.contains_key(property)
    }

    fn has_property(&self, property: &PropertyKey) -> bool {
        if self.has_own_property(property) {
            true
        } else {
            match &self.get_object_base().prototype {
                None => false,
                Some(o) => (**o).borrow().as_js_object().has_property(property),
            }
        }
    }

    /// Read with delegation: own entries first, then the prototype chain on
    /// miss. A total miss yields the undefined-marker.
    fn get(&self, property: &PropertyKey) -> JsValue {
        match self.get_own_property(property) {
            Some(v) => v,
            None => match self.get_prototype_of() {
                None => JsValue::Undefined,
                Some(p) => (*p).borrow().as_js_object().get(property),
            },
        }
    }

    /// Write without delegation: always creates or overwrites an own entry,
    /// shadowing any same-named entry further down the chain.
    fn set(&mut self, property: PropertyKey, value: JsValue) {
        self.get_object_base_mut().properties.insert(property, value);
    }

    fn to_string(&self) -> String {
        "[object Object]".to_string()
    }
}

pub struct OrdinaryObject {
    base: ObjectBase,
}
impl OrdinaryObject {
    pub fn new(prototype: Option<JsObjectType>) -> Self {
        let mut base = ObjectBase::new();
        base.prototype = prototype;
        OrdinaryObject { base }
    }
}
impl JsObject for OrdinaryObject {
    fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    fn get_object_base(&self) -> &ObjectBase {
        &self.base
    }

    fn as_super_trait(&self) -> &dyn JsObject {
        self
    }

    fn as_super_trait_mut(&mut self) -> &mut dyn JsObject {
        self
    }
}

pub trait JsArrayObject: JsObject {
    fn as_js_array_object(&self) -> &dyn JsArrayObject;

    fn length(&self) -> u32 {
        match self.get_own_property(&*ARRAY_LENGTH_PROP) {
            Some(JsValue::Number(JsNumberType::Integer(i))) => i as u32,
            _ => 0,
        }
    }

    /// Elements joined into a single string. This is the string an array
    /// coerces to when compared against a primitive.
    fn join(&self, separator: &str) -> Result<String, JErrorType> {
        let mut parts: Vec<String> = Vec::new();
        for i in 0..self.length() {
            match self.get_own_property(&PropertyKey::Int(i)) {
                None | Some(JsValue::Undefined) | Some(JsValue::Null) => parts.push(String::new()),
                Some(v) => parts.push(to_string(&v)?),
            }
        }
        Ok(parts.join(separator))
    }
}

pub struct ArrayObject {
    base: ObjectBase,
}
impl ArrayObject {
    pub fn new(elements: Vec<JsValue>) -> Self {
        let mut base = ObjectBase::new();
        let len = elements.len() as i64;
        for (i, element) in elements.into_iter().enumerate() {
            base.properties.insert(PropertyKey::Int(i as u32), element);
        }
        base.properties.insert(
            ARRAY_LENGTH_PROP.clone(),
            JsValue::Number(JsNumberType::Integer(len)),
        );
        ArrayObject { base }
    }
}
impl JsObject for ArrayObject {
    fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    fn get_object_base(&self) -> &ObjectBase {
        &self.base
    }

    fn as_super_trait(&self) -> &dyn JsObject {
        self
    }

    fn as_super_trait_mut(&mut self) -> &mut dyn JsObject {
        self
    }

    fn to_string(&self) -> String {
        self.join(",").unwrap_or_default()
    }
}
impl JsArrayObject for ArrayObject {
    fn as_js_array_object(&self) -> &dyn JsArrayObject {
        self
    }
}

pub fn new_array_object(elements: Vec<JsValue>) -> JsObjectType {
    Rc::new(RefCell::new(ObjectType::Array(Box::new(ArrayObject::new(
        elements,
    )))))
}
