use std::cell::RefCell;
use std::rc::Rc;

use crate::runner::ds::env_record::EnvironmentRecordType;

pub type JsLexEnvironmentType = Rc<RefCell<LexEnvironment>>;

/// A lexical scope frame. Inner frames hold a shared back-reference to their
/// enclosing frame; a closure holding the frame keeps it alive past the
/// enclosing call's return.
pub struct LexEnvironment {
    pub inner: Box<EnvironmentRecordType>,
    pub outer: Option<JsLexEnvironmentType>,
}
