use std::cell::RefCell;
use std::rc::Rc;

use crate::runner::ds::env_record::{new_function_environment, EnvironmentRecordType};
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::execution_context::{ExecutionContext, ExecutionContextStack};
use crate::runner::ds::lex_env::JsLexEnvironmentType;
use crate::runner::ds::object::{JsObject, JsObjectType, ObjectBase, ObjectType};
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::operations::object::ordinary_object_create;
use crate::runner::ds::realm::{EvalMode, JsCodeRealmType};
use crate::runner::ds::value::JsValue;

/// A unit of behavior. The receiver and the argument list are handed in
/// directly; enclosing bindings are reached through the context stack,
/// whose top frame chains out to the callable's captured environment.
pub type JsFnBody =
    Rc<dyn Fn(&mut ExecutionContextStack, &JsValue, &[JsValue]) -> Result<JsValue, JErrorType>>;

pub struct FunctionObjectBase {
    pub name: String,
    /// The frame current when the callable was created. Shared, not
    /// snapshotted: later mutations through any holder are observed.
    pub environment: JsLexEnvironmentType,
    pub formal_parameters: Vec<String>,
    /// Function-scoped declaration names, pre-bound to the undefined-marker
    /// before the body runs.
    pub var_declarations: Vec<String>,
    pub body: JsFnBody,
    pub realm: JsCodeRealmType,
    pub object_base: ObjectBase,
}
impl FunctionObjectBase {
    pub fn new(
        name: String,
        environment: JsLexEnvironmentType,
        formal_parameters: Vec<String>,
        var_declarations: Vec<String>,
        body: JsFnBody,
        realm: JsCodeRealmType,
    ) -> Self {
        FunctionObjectBase {
            name,
            environment,
            formal_parameters,
            var_declarations,
            body,
            realm,
            object_base: ObjectBase::new(),
        }
    }

    pub fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        &mut self.object_base
    }

    pub fn get_object_base(&self) -> &ObjectBase {
        &self.object_base
    }
}

pub trait JsFunctionObject: JsObject {
    fn get_function_object_base_mut(&mut self) -> &mut FunctionObjectBase;

    fn get_function_object_base(&self) -> &FunctionObjectBase;

    fn as_js_function_object(&self) -> &dyn JsFunctionObject;

    fn as_js_function_object_mut(&mut self) -> &mut dyn JsFunctionObject;
}

pub struct FunctionObject {
    base: FunctionObjectBase,
}
impl FunctionObject {
    pub fn new(base: FunctionObjectBase) -> Self {
        FunctionObject { base }
    }
}
impl JsObject for FunctionObject {
    fn get_object_base_mut(&mut self) -> &mut ObjectBase {
        self.base.get_object_base_mut()
    }

    fn get_object_base(&self) -> &ObjectBase {
        self.base.get_object_base()
    }

    fn as_super_trait(&self) -> &dyn JsObject {
        self
    }

    fn as_super_trait_mut(&mut self) -> &mut dyn JsObject {
        self
    }

    fn to_string(&self) -> String {
        format!(
            "function {}({}) {{ [native code] }}",
            self.base.name,
            self.base.formal_parameters.join(", ")
        )
    }
}
impl JsFunctionObject for FunctionObject {
    fn get_function_object_base_mut(&mut self) -> &mut FunctionObjectBase {
        &mut self.base
    }

    fn get_function_object_base(&self) -> &FunctionObjectBase {
        &self.base
    }

    fn as_js_function_object(&self) -> &dyn JsFunctionObject {
        self
    }

    fn as_js_function_object_mut(&mut self) -> &mut dyn JsFunctionObject {
        self
    }
}

/// Creates a callable capturing the given environment, with its associated
/// `prototype` object already linked up for constructor calls.
pub fn new_function_object(
    name: &str,
    formal_parameters: Vec<String>,
    var_declarations: Vec<String>,
    body: JsFnBody,
    environment: JsLexEnvironmentType,
    realm: JsCodeRealmType,
) -> JsObjectType {
    let f: JsObjectType = Rc::new(RefCell::new(ObjectType::Function(Box::new(
        FunctionObject::new(FunctionObjectBase::new(
            name.to_string(),
            environment,
            formal_parameters,
            var_declarations,
            body,
            realm,
        )),
    ))));
    let proto = ordinary_object_create(None);
    (*proto)
        .borrow_mut()
        .as_js_object_mut()
        .set(PropertyKey::str("constructor"), JsValue::Object(f.clone()));
    (*f)
        .borrow_mut()
        .as_js_object_mut()
        .set(PropertyKey::str("prototype"), JsValue::Object(proto));
    f
}

/// Creates a callable whose environment and realm are taken from the
/// running execution context; this is how a function definition nested in
/// another body closes over the invocation's live frame.
pub fn new_function_in_running_ctx(
    ctx_stack: &ExecutionContextStack,
    name: &str,
    formal_parameters: Vec<String>,
    var_declarations: Vec<String>,
    body: JsFnBody,
) -> Result<JsObjectType, JErrorType> {
    let ctx = ctx_stack
        .get_running_execution_ctx()
        .ok_or_else(|| JErrorType::ReferenceError("no running execution context".to_string()))?;
    Ok(new_function_object(
        name,
        formal_parameters,
        var_declarations,
        body,
        ctx.lex_env.clone(),
        ctx.realm.clone(),
    ))
}

pub fn prepare_for_ordinary_call(f: &JsObjectType) -> Result<ExecutionContext, JErrorType> {
    let realm = {
        let f_b = (**f).borrow();
        if !f_b.is_callable() {
            return Err(JErrorType::TypeError(format!(
                "'{}' is not a function",
                f_b.as_js_object().to_string()
            )));
        }
        f_b.as_js_function_object()
            .get_function_object_base()
            .realm
            .clone()
    };
    let local_env = new_function_environment(f.clone());
    Ok(ExecutionContext {
        function: Some(f.clone()),
        realm,
        lex_env: local_env.clone(),
        var_env: local_env,
    })
}

pub fn ordinary_call_bind_this(
    callee_ctx: &ExecutionContext,
    this_argument: JsValue,
) -> Result<(), JErrorType> {
    let mut env = callee_ctx.lex_env.borrow_mut();
    if let EnvironmentRecordType::Function(f_env) = &mut *env.inner {
        f_env.bind_this_value(this_argument)
    } else {
        Ok(())
    }
}

/// The hoisting pre-pass: formal parameters are bound to their arguments
/// and every function-scoped declaration name is bound to the
/// undefined-marker before the body's statements execute, so an early read
/// observes `undefined` rather than failing.
pub fn function_declaration_instantiation(
    f: &JsObjectType,
    callee_ctx: &ExecutionContext,
    argument_list: &[JsValue],
) -> Result<(), JErrorType> {
    let (formals, vars) = {
        let f_b = (**f).borrow();
        let base = f_b.as_js_function_object().get_function_object_base();
        (base.formal_parameters.clone(), base.var_declarations.clone())
    };
    let mut env = callee_ctx.lex_env.borrow_mut();
    let rec = env.inner.as_env_record_mut();
    for (i, param) in formals.iter().enumerate() {
        rec.create_mutable_binding(param.clone())?;
        rec.initialize_binding(
            param,
            argument_list.get(i).cloned().unwrap_or(JsValue::Undefined),
        )?;
    }
    for var_name in &vars {
        if !rec.has_binding(var_name) {
            rec.create_mutable_binding(var_name.clone())?;
            rec.initialize_binding(var_name, JsValue::Undefined)?;
        }
    }
    Ok(())
}

/// The core invocation path shared by every call-site form. The receiver
/// has already been decided by the caller.
pub fn call(
    ctx_stack: &mut ExecutionContextStack,
    f: &JsObjectType,
    this_argument: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    let callee_ctx = prepare_for_ordinary_call(f)?;
    ordinary_call_bind_this(&callee_ctx, this_argument.clone())?;
    function_declaration_instantiation(f, &callee_ctx, &args)?;
    let body = (**f)
        .borrow()
        .as_js_function_object()
        .get_function_object_base()
        .body
        .clone();
    ctx_stack.push_execution_ctx(callee_ctx);
    let result = body(ctx_stack, &this_argument, &args);
    ctx_stack.pop_running_execution_ctx();
    result
}

/// Bare call: no receiver at the call site. The ambient receiver depends on
/// the realm's configured evaluation mode.
pub fn call_bare(
    ctx_stack: &mut ExecutionContextStack,
    f: &JsObjectType,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    let this = {
        let f_b = (**f).borrow();
        if !f_b.is_callable() {
            return Err(JErrorType::TypeError(format!(
                "'{}' is not a function",
                f_b.as_js_object().to_string()
            )));
        }
        let realm = f_b
            .as_js_function_object()
            .get_function_object_base()
            .realm
            .clone();
        let mode = (*realm).borrow().eval_mode;
        match mode {
            EvalMode::Sloppy => JsValue::Object((*realm).borrow().global_object.clone()),
            EvalMode::Strict => JsValue::Undefined,
        }
    };
    call(ctx_stack, f, this, args)
}

/// Method call: the receiver is the object the callable was looked up on.
pub fn call_method(
    ctx_stack: &mut ExecutionContextStack,
    o: &JsObjectType,
    key: &PropertyKey,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    let method = (**o).borrow().as_js_object().get(key);
    match method {
        JsValue::Object(f) => {
            if (*f).borrow().is_callable() {
                call(ctx_stack, &f, JsValue::Object(o.clone()), args)
            } else {
                Err(JErrorType::TypeError(format!(
                    "'{}' is not a function",
                    key
                )))
            }
        }
        _ => Err(JErrorType::TypeError(format!(
            "'{}' is not a function",
            key
        ))),
    }
}

/// Explicit-binding call: the receiver is supplied by the caller.
pub fn call_with(
    ctx_stack: &mut ExecutionContextStack,
    f: &JsObjectType,
    this_argument: JsValue,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    call(ctx_stack, f, this_argument, args)
}

/// Constructor call: a fresh record linked to the callable's `prototype`
/// becomes the receiver and the implicit result; an explicit object return
/// takes precedence.
pub fn construct(
    ctx_stack: &mut ExecutionContextStack,
    f: &JsObjectType,
    args: Vec<JsValue>,
) -> Result<JsValue, JErrorType> {
    let proto = {
        let f_b = (**f).borrow();
        if !f_b.is_callable() {
            return Err(JErrorType::TypeError(format!(
                "'{}' is not a constructor",
                f_b.as_js_object().to_string()
            )));
        }
        match f_b.as_js_object().get(&PropertyKey::str("prototype")) {
            JsValue::Object(p) => Some(p),
            _ => None,
        }
    };
    let this_obj = ordinary_object_create(proto);
    let result = call(ctx_stack, f, JsValue::Object(this_obj.clone()), args)?;
    match result {
        JsValue::Object(o) => Ok(JsValue::Object(o)),
        _ => Ok(JsValue::Object(this_obj)),
    }
}
