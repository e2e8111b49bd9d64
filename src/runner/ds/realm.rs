use std::cell::RefCell;
use std::rc::Rc;

use crate::runner::ds::env_record::new_global_environment;
use crate::runner::ds::lex_env::JsLexEnvironmentType;
use crate::runner::ds::object::{JsObjectType, ObjectType, OrdinaryObject};

pub type JsCodeRealmType = Rc<RefCell<CodeRealm>>;

/// Evaluation mode for the ambient receiver of a bare call. This is an
/// explicit configuration, never a silent default: sloppy mode binds the
/// global record, strict mode binds the undefined-marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvalMode {
    Sloppy,
    Strict,
}

pub struct CodeRealm {
    pub global_object: JsObjectType,
    pub global_env: JsLexEnvironmentType,
    pub eval_mode: EvalMode,
}
impl CodeRealm {
    pub fn new(eval_mode: EvalMode) -> Self {
        let global_object: JsObjectType = Rc::new(RefCell::new(ObjectType::Ordinary(Box::new(
            OrdinaryObject::new(None),
        ))));
        let global_env = new_global_environment(global_object.clone());
        CodeRealm {
            global_object,
            global_env,
            eval_mode,
        }
    }
}
