//! The annotated script, transcribed section by section.
//!
//! Each section drives the runtime the way the source fragment does and
//! logs the lines the fragment's comments annotate. [`run_all`] plays the
//! sections in the source order.

pub mod closures;
pub mod equality;
pub mod hoisting;
pub mod prototypes;
pub mod scopes;
pub mod this_binding;
pub mod types;

use crate::runner::api::JsRunner;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::execution_context::ExecutionContextStack;
use crate::runner::ds::function_object::call_method;
use crate::runner::ds::object::JsObjectType;
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::operations::lex_env::resolve_binding;
use crate::runner::ds::value::{JsNumberType, JsValue};

/// Runs every section in the source order.
pub fn run_all(runner: &mut JsRunner) -> Result<(), JErrorType> {
    scopes::lexical_scope(runner)?;
    types::type_tags(runner)?;
    types::object_literals(runner)?;
    types::functions_as_values(runner)?;
    equality::equality_and_inequality(runner)?;
    hoisting::hoisted_declarations(runner)?;
    scopes::nested_scopes(runner)?;
    scopes::auto_global(runner)?;
    scopes::block_scoping(runner)?;
    scopes::iife(runner)?;
    closures::make_adder(runner)?;
    this_binding::call_site_forms(runner)?;
    prototypes::delegation(runner)?;
    Ok(())
}

pub(crate) fn int(n: i64) -> JsValue {
    JsValue::Number(JsNumberType::Integer(n))
}

pub(crate) fn str_value(s: &str) -> JsValue {
    JsValue::String(s.to_string())
}

/// `console.log(..)` from inside a function body, through the installed
/// built-in.
pub(crate) fn log(
    ctx_stack: &mut ExecutionContextStack,
    args: Vec<JsValue>,
) -> Result<(), JErrorType> {
    let console = as_object(resolve_binding(ctx_stack, "console")?)?;
    call_method(ctx_stack, &console, &PropertyKey::str("log"), args)?;
    Ok(())
}

pub(crate) fn as_object(v: JsValue) -> Result<JsObjectType, JErrorType> {
    match v {
        JsValue::Object(o) => Ok(o),
        v => Err(JErrorType::TypeError(format!("'{}' is not an object", v))),
    }
}
