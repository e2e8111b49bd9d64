//! Entry point for driving the runtime.
//!
//! `JsRunner` owns a realm and an execution context stack with the global
//! context pre-pushed, and exposes the operations a script would perform:
//! declarations, reads, writes, calls and console logging.

use std::cell::RefCell;
use std::rc::Rc;

use crate::runner::ds::env_record::EnvironmentRecordType;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::execution_context::{ExecutionContext, ExecutionContextStack};
use crate::runner::ds::function_object::{
    self, new_function_in_running_ctx, JsFnBody,
};
use crate::runner::ds::object::JsObjectType;
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::operations::lex_env::{
    declare_let, get_this_binding, pop_block_scope, push_block_scope, resolve_binding, set_binding,
};
use crate::runner::ds::realm::{CodeRealm, EvalMode, JsCodeRealmType};
use crate::runner::ds::value::JsValue;
use crate::runner::std_lib::console::ConsoleWriter;
use crate::runner::std_lib::install_core;

pub struct JsRunner {
    realm: JsCodeRealmType,
    ctx_stack: ExecutionContextStack,
    console: ConsoleWriter,
}

impl JsRunner {
    /// A runner whose console echoes to stdout.
    pub fn new(eval_mode: EvalMode) -> Self {
        Self::with_writer(eval_mode, ConsoleWriter::stdout())
    }

    /// A runner whose console only captures; used by tests asserting on
    /// output lines.
    pub fn new_capturing(eval_mode: EvalMode) -> Self {
        Self::with_writer(eval_mode, ConsoleWriter::capturing())
    }

    fn with_writer(eval_mode: EvalMode, console: ConsoleWriter) -> Self {
        let realm: JsCodeRealmType = Rc::new(RefCell::new(CodeRealm::new(eval_mode)));
        install_core(&realm, &console);
        let global_env = (*realm).borrow().global_env.clone();
        let mut ctx_stack = ExecutionContextStack::new();
        ctx_stack.push_execution_ctx(ExecutionContext {
            function: None,
            realm: realm.clone(),
            lex_env: global_env.clone(),
            var_env: global_env,
        });
        JsRunner {
            realm,
            ctx_stack,
            console,
        }
    }

    pub fn realm(&self) -> &JsCodeRealmType {
        &self.realm
    }

    pub fn ctx_stack(&self) -> &ExecutionContextStack {
        &self.ctx_stack
    }

    pub fn ctx_stack_mut(&mut self) -> &mut ExecutionContextStack {
        &mut self.ctx_stack
    }

    /// A top-level `var` declaration. Creates the global binding (backed by
    /// a global object property) bound to the undefined-marker, matching
    /// what hoisting does before any statement runs.
    pub fn declare_var(&mut self, name: &str) -> Result<(), JErrorType> {
        let global_env = (*self.realm).borrow().global_env.clone();
        let mut env = (*global_env).borrow_mut();
        match &mut *env.inner {
            EnvironmentRecordType::Global(g) => g.create_global_var_binding(name.to_string()),
            _ => Err(JErrorType::ReferenceError(
                "global environment record is missing".to_string(),
            )),
        }
    }

    /// A top-level function declaration. Like `declare_var`, but the
    /// binding is initialized to the callable up front.
    pub fn hoist_function(&mut self, name: &str, f: JsObjectType) -> Result<(), JErrorType> {
        let global_env = (*self.realm).borrow().global_env.clone();
        let mut env = (*global_env).borrow_mut();
        match &mut *env.inner {
            EnvironmentRecordType::Global(g) => {
                g.create_global_function_binding(name.to_string(), JsValue::Object(f))
            }
            _ => Err(JErrorType::ReferenceError(
                "global environment record is missing".to_string(),
            )),
        }
    }

    /// Reads a name through the running frame chain.
    pub fn get(&self, name: &str) -> Result<JsValue, JErrorType> {
        resolve_binding(&self.ctx_stack, name)
    }

    /// Assigns a name through the running frame chain, with the sloppy-mode
    /// auto-global fallback.
    pub fn set(&mut self, name: &str, value: JsValue) -> Result<(), JErrorType> {
        set_binding(&mut self.ctx_stack, name, value)
    }

    /// A `let` declaration in the running frame.
    pub fn declare_let(&mut self, name: &str, value: JsValue) -> Result<(), JErrorType> {
        declare_let(&mut self.ctx_stack, name, value)
    }

    /// Opens a `{ ... }` block scope on the running context.
    pub fn enter_block(&mut self) -> Result<(), JErrorType> {
        push_block_scope(&mut self.ctx_stack)
    }

    pub fn exit_block(&mut self) -> Result<(), JErrorType> {
        pop_block_scope(&mut self.ctx_stack)
    }

    /// The receiver visible from the running frame.
    pub fn this_value(&self) -> Result<JsValue, JErrorType> {
        get_this_binding(&self.ctx_stack)
    }

    /// Creates a callable closing over the running frame.
    pub fn make_function(
        &mut self,
        name: &str,
        formal_parameters: Vec<&str>,
        var_declarations: Vec<&str>,
        body: JsFnBody,
    ) -> Result<JsObjectType, JErrorType> {
        new_function_in_running_ctx(
            &self.ctx_stack,
            name,
            formal_parameters.iter().map(|s| s.to_string()).collect(),
            var_declarations.iter().map(|s| s.to_string()).collect(),
            body,
        )
    }

    pub fn call_bare(
        &mut self,
        f: &JsObjectType,
        args: Vec<JsValue>,
    ) -> Result<JsValue, JErrorType> {
        function_object::call_bare(&mut self.ctx_stack, f, args)
    }

    pub fn call_method(
        &mut self,
        o: &JsObjectType,
        key: &PropertyKey,
        args: Vec<JsValue>,
    ) -> Result<JsValue, JErrorType> {
        function_object::call_method(&mut self.ctx_stack, o, key, args)
    }

    pub fn call_with(
        &mut self,
        f: &JsObjectType,
        this_argument: JsValue,
        args: Vec<JsValue>,
    ) -> Result<JsValue, JErrorType> {
        function_object::call_with(&mut self.ctx_stack, f, this_argument, args)
    }

    pub fn construct(
        &mut self,
        f: &JsObjectType,
        args: Vec<JsValue>,
    ) -> Result<JsValue, JErrorType> {
        function_object::construct(&mut self.ctx_stack, f, args)
    }

    /// `console.log(...)` through the installed built-in.
    pub fn console_log(&mut self, args: Vec<JsValue>) -> Result<(), JErrorType> {
        let console = match resolve_binding(&self.ctx_stack, "console")? {
            JsValue::Object(o) => o,
            v => {
                return Err(JErrorType::TypeError(format!(
                    "'console' is not an object, got '{}'",
                    v
                )))
            }
        };
        function_object::call_method(
            &mut self.ctx_stack,
            &console,
            &PropertyKey::str("log"),
            args,
        )?;
        Ok(())
    }

    /// Every line logged so far, in order.
    pub fn console_output(&self) -> Vec<String> {
        self.console.lines()
    }
}
