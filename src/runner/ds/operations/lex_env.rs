use crate::runner::ds::env_record::{new_declarative_environment, EnvironmentRecordType};
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::execution_context::ExecutionContextStack;
use crate::runner::ds::lex_env::JsLexEnvironmentType;
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::realm::EvalMode;
use crate::runner::ds::value::JsValue;

fn running_lex_env(ctx_stack: &ExecutionContextStack) -> Result<JsLexEnvironmentType, JErrorType> {
    ctx_stack
        .get_running_execution_ctx()
        .map(|ctx| ctx.lex_env.clone())
        .ok_or_else(|| JErrorType::ReferenceError("no running execution context".to_string()))
}

/// Walks the frame chain outward until a record owns the name.
fn find_binding_env(
    start: JsLexEnvironmentType,
    name: &str,
) -> Option<JsLexEnvironmentType> {
    let mut env = Some(start);
    while let Some(e) = env {
        let found = (*e).borrow().inner.as_env_record().has_binding(name);
        if found {
            return Some(e);
        }
        env = (*e).borrow().outer.clone();
    }
    None
}

/// Resolves a free name against the running frame chain.
pub fn resolve_binding(
    ctx_stack: &ExecutionContextStack,
    name: &str,
) -> Result<JsValue, JErrorType> {
    let start = running_lex_env(ctx_stack)?;
    match find_binding_env(start, name) {
        Some(e) => (*e).borrow().inner.as_env_record().get_binding_value(name),
        None => Err(JErrorType::ReferenceError(format!(
            "'{}' is not defined",
            name
        ))),
    }
}

/// Assigns through the frame chain. A name no frame owns becomes a
/// property of the global record in sloppy mode (the auto-global) and a
/// reference error in strict mode.
pub fn set_binding(
    ctx_stack: &mut ExecutionContextStack,
    name: &str,
    value: JsValue,
) -> Result<(), JErrorType> {
    let start = running_lex_env(ctx_stack)?;
    if let Some(e) = find_binding_env(start, name) {
        return (*e)
            .borrow_mut()
            .inner
            .as_env_record_mut()
            .set_mutable_binding(name, value);
    }
    let realm = ctx_stack
        .get_running_execution_ctx()
        .ok_or_else(|| JErrorType::ReferenceError("no running execution context".to_string()))?
        .realm
        .clone();
    let mode = (*realm).borrow().eval_mode;
    match mode {
        EvalMode::Sloppy => {
            let global = (*realm).borrow().global_object.clone();
            (*global)
                .borrow_mut()
                .as_js_object_mut()
                .set(PropertyKey::str(name), value);
            Ok(())
        }
        EvalMode::Strict => Err(JErrorType::ReferenceError(format!(
            "'{}' is not defined",
            name
        ))),
    }
}

/// The receiver visible from the running frame: the nearest enclosing
/// record that owns a receiver slot, falling back to the global record.
pub fn get_this_binding(ctx_stack: &ExecutionContextStack) -> Result<JsValue, JErrorType> {
    let mut env = Some(running_lex_env(ctx_stack)?);
    while let Some(e) = env {
        let eb = (*e).borrow();
        if eb.inner.as_env_record().has_this_binding() {
            return match &*eb.inner {
                EnvironmentRecordType::Function(f_env) => f_env.get_this_binding(),
                EnvironmentRecordType::Global(g_env) => {
                    Ok(JsValue::Object(g_env.get_this_binding().clone()))
                }
                EnvironmentRecordType::Declarative(_) => unreachable!(),
            };
        }
        env = eb.outer.clone();
    }
    Err(JErrorType::ReferenceError(
        "'this' is not bound".to_string(),
    ))
}

/// Opens a block: a fresh declarative frame chained to the running one.
/// Block-scoped declarations made inside it vanish with the block.
pub fn push_block_scope(ctx_stack: &mut ExecutionContextStack) -> Result<(), JErrorType> {
    let current = running_lex_env(ctx_stack)?;
    let block_env = new_declarative_environment(Some(current));
    ctx_stack
        .get_running_execution_ctx_mut()
        .ok_or_else(|| JErrorType::ReferenceError("no running execution context".to_string()))?
        .lex_env = block_env;
    Ok(())
}

pub fn pop_block_scope(ctx_stack: &mut ExecutionContextStack) -> Result<(), JErrorType> {
    let current = running_lex_env(ctx_stack)?;
    let outer = (*current)
        .borrow()
        .outer
        .clone()
        .ok_or_else(|| JErrorType::ReferenceError("no enclosing scope".to_string()))?;
    ctx_stack
        .get_running_execution_ctx_mut()
        .ok_or_else(|| JErrorType::ReferenceError("no running execution context".to_string()))?
        .lex_env = outer;
    Ok(())
}

/// A block-scoped declaration: the binding exists only from this point to
/// the end of the enclosing block. No pre-pass touches it.
pub fn declare_let(
    ctx_stack: &mut ExecutionContextStack,
    name: &str,
    value: JsValue,
) -> Result<(), JErrorType> {
    let env = running_lex_env(ctx_stack)?;
    let mut env_b = (*env).borrow_mut();
    let rec = env_b.inner.as_env_record_mut();
    rec.create_mutable_binding(name.to_string())?;
    rec.initialize_binding(name, value)
}
