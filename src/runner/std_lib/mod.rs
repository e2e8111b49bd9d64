//! Standard library built-in objects.
//!
//! Built-ins are installed eagerly onto the realm's global object before
//! any script code runs.

pub mod console;
pub mod object;

use std::rc::Rc;

use crate::runner::ds::function_object::{new_function_object, JsFnBody};
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::operations::object::set;
use crate::runner::ds::operations::type_conversion::to_string;
use crate::runner::ds::realm::JsCodeRealmType;
use crate::runner::ds::symbol::SymbolData;
use crate::runner::ds::value::JsValue;

use self::console::ConsoleWriter;

/// Installs the core built-ins: `console`, `Object` and the `Symbol`
/// factory.
pub fn install_core(realm: &JsCodeRealmType, writer: &ConsoleWriter) {
    console::install(realm, writer);
    object::install(realm);
    install_symbol(realm);
}

/// `Symbol(description?)` - every call mints a token with a fresh identity.
fn install_symbol(realm: &JsCodeRealmType) {
    let (global_object, global_env) = {
        let r = (**realm).borrow();
        (r.global_object.clone(), r.global_env.clone())
    };
    let body: JsFnBody = Rc::new(|_ctx_stack, _this, args| {
        Ok(JsValue::Symbol(match args.first() {
            None | Some(JsValue::Undefined) => SymbolData::new_empty(),
            Some(v) => SymbolData::new(to_string(v)?),
        }))
    });
    let symbol_fn = new_function_object(
        "Symbol",
        vec!["description".to_string()],
        vec![],
        body,
        global_env,
        realm.clone(),
    );
    set(
        &global_object,
        PropertyKey::str("Symbol"),
        JsValue::Object(symbol_fn),
    );
}
