use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::lex_env::{JsLexEnvironmentType, LexEnvironment};
use crate::runner::ds::object::JsObjectType;
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::value::JsValue;

pub trait EnvironmentRecord {
    fn has_binding(&self, name: &str) -> bool;
    fn create_mutable_binding(&mut self, name: String) -> Result<(), JErrorType>;
    fn initialize_binding(&mut self, name: &str, value: JsValue) -> Result<(), JErrorType>;
    fn set_mutable_binding(&mut self, name: &str, value: JsValue) -> Result<(), JErrorType>;
    fn get_binding_value(&self, name: &str) -> Result<JsValue, JErrorType>;
    fn has_this_binding(&self) -> bool;
}

pub enum EnvironmentRecordType {
    Declarative(DeclarativeEnvironmentRecord),
    Function(FunctionEnvironmentRecord),
    Global(GlobalEnvironmentRecord),
}
impl EnvironmentRecordType {
    pub fn as_env_record(&self) -> &dyn EnvironmentRecord {
        match self {
            EnvironmentRecordType::Declarative(d) => d,
            EnvironmentRecordType::Function(d) => d,
            EnvironmentRecordType::Global(d) => d,
        }
    }

    pub fn as_env_record_mut(&mut self) -> &mut dyn EnvironmentRecord {
        match self {
            EnvironmentRecordType::Declarative(d) => d,
            EnvironmentRecordType::Function(d) => d,
            EnvironmentRecordType::Global(d) => d,
        }
    }
}

/// Bindings introduced by a function body or block. A binding created but
/// not yet initialized may not be read or written.
pub struct DeclarativeEnvironmentRecord {
    bindings: HashMap<String, Option<JsValue>>,
}
impl DeclarativeEnvironmentRecord {
    pub fn new() -> Self {
        DeclarativeEnvironmentRecord {
            bindings: HashMap::new(),
        }
    }
}
impl EnvironmentRecord for DeclarativeEnvironmentRecord {
    fn has_binding(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    fn create_mutable_binding(&mut self, name: String) -> Result<(), JErrorType> {
        if !self.has_binding(&name) {
            self.bindings.insert(name, None);
        }
        Ok(())
    }

    fn initialize_binding(&mut self, name: &str, value: JsValue) -> Result<(), JErrorType> {
        match self.bindings.get_mut(name) {
            Some(slot) => {
                *slot = Some(value);
                Ok(())
            }
            None => Err(JErrorType::ReferenceError(format!(
                "'{}' is not defined",
                name
            ))),
        }
    }

    fn set_mutable_binding(&mut self, name: &str, value: JsValue) -> Result<(), JErrorType> {
        match self.bindings.get_mut(name) {
            Some(slot) => {
                if slot.is_none() {
                    Err(JErrorType::ReferenceError(format!(
                        "'{}' is not initialized",
                        name
                    )))
                } else {
                    *slot = Some(value);
                    Ok(())
                }
            }
            None => Err(JErrorType::ReferenceError(format!(
                "'{}' is not defined",
                name
            ))),
        }
    }

    fn get_binding_value(&self, name: &str) -> Result<JsValue, JErrorType> {
        match self.bindings.get(name) {
            None => Err(JErrorType::ReferenceError(format!(
                "'{}' is not defined",
                name
            ))),
            Some(v) => match v {
                None => Err(JErrorType::ReferenceError(format!(
                    "'{}' is not initialized",
                    name
                ))),
                Some(v) => Ok(v.clone()),
            },
        }
    }

    fn has_this_binding(&self) -> bool {
        false
    }
}

/// The frame created per callable invocation. Owns the receiver slot on top
/// of an ordinary declarative record.
pub struct FunctionEnvironmentRecord {
    base_env: DeclarativeEnvironmentRecord,
    this_value: Option<JsValue>,
    function_object: JsObjectType,
}
impl FunctionEnvironmentRecord {
    pub fn new(f: JsObjectType) -> Self {
        FunctionEnvironmentRecord {
            base_env: DeclarativeEnvironmentRecord::new(),
            this_value: None,
            function_object: f,
        }
    }

    pub fn bind_this_value(&mut self, this: JsValue) -> Result<(), JErrorType> {
        if self.this_value.is_some() {
            Err(JErrorType::ReferenceError(
                "'this' is already initialized".to_string(),
            ))
        } else {
            self.this_value = Some(this);
            Ok(())
        }
    }

    pub fn get_this_binding(&self) -> Result<JsValue, JErrorType> {
        match &self.this_value {
            Some(this) => Ok(this.clone()),
            None => Err(JErrorType::ReferenceError(
                "'this' is not initialized".to_string(),
            )),
        }
    }

    pub fn function_object(&self) -> &JsObjectType {
        &self.function_object
    }
}
impl EnvironmentRecord for FunctionEnvironmentRecord {
    fn has_binding(&self, name: &str) -> bool {
        self.base_env.has_binding(name)
    }

    fn create_mutable_binding(&mut self, name: String) -> Result<(), JErrorType> {
        self.base_env.create_mutable_binding(name)
    }

    fn initialize_binding(&mut self, name: &str, value: JsValue) -> Result<(), JErrorType> {
        self.base_env.initialize_binding(name, value)
    }

    fn set_mutable_binding(&mut self, name: &str, value: JsValue) -> Result<(), JErrorType> {
        self.base_env.set_mutable_binding(name, value)
    }

    fn get_binding_value(&self, name: &str) -> Result<JsValue, JErrorType> {
        self.base_env.get_binding_value(name)
    }

    fn has_this_binding(&self) -> bool {
        true
    }
}

/// The outermost record: declarative bindings layered over the global
/// object, whose properties double as global `var` bindings. This is what
/// makes a global declared with `var` reachable through the ambient
/// receiver.
pub struct GlobalEnvironmentRecord {
    declarative_record: DeclarativeEnvironmentRecord,
    global_object: JsObjectType,
    var_names: Vec<String>,
}
impl GlobalEnvironmentRecord {
    pub fn new(global_object: JsObjectType) -> Self {
        GlobalEnvironmentRecord {
            declarative_record: DeclarativeEnvironmentRecord::new(),
            global_object,
            var_names: Vec::new(),
        }
    }

    pub fn get_this_binding(&self) -> &JsObjectType {
        &self.global_object
    }

    pub fn has_var_declaration(&self, name: &str) -> bool {
        self.var_names.iter().any(|n| n == name)
    }

    pub fn create_global_var_binding(&mut self, name: String) -> Result<(), JErrorType> {
        let key = PropertyKey::str(&name);
        let is_new = !(*self.global_object)
            .borrow()
            .as_js_object()
            .has_own_property(&key);
        if is_new {
            (*self.global_object)
                .borrow_mut()
                .as_js_object_mut()
                .set(key, JsValue::Undefined);
        }
        if !self.var_names.contains(&name) {
            self.var_names.push(name);
        }
        Ok(())
    }

    pub fn create_global_function_binding(
        &mut self,
        name: String,
        f: JsValue,
    ) -> Result<(), JErrorType> {
        (*self.global_object)
            .borrow_mut()
            .as_js_object_mut()
            .set(PropertyKey::str(&name), f);
        if !self.var_names.contains(&name) {
            self.var_names.push(name);
        }
        Ok(())
    }
}
impl EnvironmentRecord for GlobalEnvironmentRecord {
    fn has_binding(&self, name: &str) -> bool {
        if self.declarative_record.has_binding(name) {
            true
        } else {
            (*self.global_object)
                .borrow()
                .as_js_object()
                .has_property(&PropertyKey::str(name))
        }
    }

    fn create_mutable_binding(&mut self, name: String) -> Result<(), JErrorType> {
        if self.declarative_record.has_binding(&name) {
            Err(JErrorType::TypeError(format!(
                "'{}' binding is already present",
                name
            )))
        } else {
            self.declarative_record.create_mutable_binding(name)
        }
    }

    fn initialize_binding(&mut self, name: &str, value: JsValue) -> Result<(), JErrorType> {
        if self.declarative_record.has_binding(name) {
            self.declarative_record.initialize_binding(name, value)
        } else {
            (*self.global_object)
                .borrow_mut()
                .as_js_object_mut()
                .set(PropertyKey::str(name), value);
            Ok(())
        }
    }

    fn set_mutable_binding(&mut self, name: &str, value: JsValue) -> Result<(), JErrorType> {
        if self.declarative_record.has_binding(name) {
            self.declarative_record.set_mutable_binding(name, value)
        } else {
            (*self.global_object)
                .borrow_mut()
                .as_js_object_mut()
                .set(PropertyKey::str(name), value);
            Ok(())
        }
    }

    fn get_binding_value(&self, name: &str) -> Result<JsValue, JErrorType> {
        if self.declarative_record.has_binding(name) {
            self.declarative_record.get_binding_value(name)
        } else {
            let key = PropertyKey::str(name);
            let global = (*self.global_object).borrow();
            if global.as_js_object().has_property(&key) {
                Ok(global.as_js_object().get(&key))
            } else {
                Err(JErrorType::ReferenceError(format!(
                    "'{}' is not defined",
                    name
                )))
            }
        }
    }

    fn has_this_binding(&self) -> bool {
        true
    }
}

pub fn new_declarative_environment(outer_lex: Option<JsLexEnvironmentType>) -> JsLexEnvironmentType {
    Rc::new(RefCell::new(LexEnvironment {
        inner: Box::new(EnvironmentRecordType::Declarative(
            DeclarativeEnvironmentRecord::new(),
        )),
        outer: outer_lex,
    }))
}

pub fn new_function_environment(f: JsObjectType) -> JsLexEnvironmentType {
    assert!((*f).borrow().is_callable(), "f needs to be callable");
    let outer_lex = (*f)
        .borrow()
        .as_js_function_object()
        .get_function_object_base()
        .environment
        .clone();
    Rc::new(RefCell::new(LexEnvironment {
        inner: Box::new(EnvironmentRecordType::Function(
            FunctionEnvironmentRecord::new(f),
        )),
        outer: Some(outer_lex),
    }))
}

pub fn new_global_environment(global_object: JsObjectType) -> JsLexEnvironmentType {
    Rc::new(RefCell::new(LexEnvironment {
        inner: Box::new(EnvironmentRecordType::Global(GlobalEnvironmentRecord::new(
            global_object,
        ))),
        outer: None,
    }))
}
