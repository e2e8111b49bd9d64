//! Console built-in object.
//!
//! The runtime's only externally observable effect is the sequential text
//! output produced here, one line per logged expression.

use std::cell::RefCell;
use std::rc::Rc;

use crate::runner::ds::function_object::{new_function_object, JsFnBody};
use crate::runner::ds::object_property::PropertyKey;
use crate::runner::ds::operations::object::{ordinary_object_create, set};
use crate::runner::ds::realm::JsCodeRealmType;
use crate::runner::ds::value::{JsNumberType, JsValue};

struct ConsoleState {
    echo: bool,
    lines: Vec<String>,
}

/// Destination for console output. Lines are always retained so callers
/// can assert on them; echoing to stdout is optional.
#[derive(Clone)]
pub struct ConsoleWriter {
    inner: Rc<RefCell<ConsoleState>>,
}
impl ConsoleWriter {
    pub fn stdout() -> Self {
        ConsoleWriter {
            inner: Rc::new(RefCell::new(ConsoleState {
                echo: true,
                lines: Vec::new(),
            })),
        }
    }

    pub fn capturing() -> Self {
        ConsoleWriter {
            inner: Rc::new(RefCell::new(ConsoleState {
                echo: false,
                lines: Vec::new(),
            })),
        }
    }

    pub fn write_line(&self, line: String) {
        let mut state = self.inner.borrow_mut();
        if state.echo {
            println!("{}", line);
        }
        state.lines.push(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.borrow().lines.clone()
    }
}

/// Register the console object on the realm's global object.
pub fn install(realm: &JsCodeRealmType, writer: &ConsoleWriter) {
    let (global_object, global_env) = {
        let r = (**realm).borrow();
        (r.global_object.clone(), r.global_env.clone())
    };
    let console = ordinary_object_create(None);

    let w = writer.clone();
    let log_body: JsFnBody = Rc::new(move |_ctx_stack, _this, args| {
        w.write_line(format_args(args));
        Ok(JsValue::Undefined)
    });
    let log_fn = new_function_object("log", vec![], vec![], log_body, global_env, realm.clone());
    set(&console, PropertyKey::str("log"), JsValue::Object(log_fn));

    set(
        &global_object,
        PropertyKey::str("console"),
        JsValue::Object(console),
    );
}

/// Format a value for console output.
pub fn format_value(value: &JsValue) -> String {
    match value {
        JsValue::Undefined => "undefined".to_string(),
        JsValue::Null => "null".to_string(),
        JsValue::Boolean(b) => b.to_string(),
        JsValue::Number(n) => match n {
            JsNumberType::Integer(i) => i.to_string(),
            JsNumberType::Float(f) => {
                if f.fract() == 0.0 && f.abs() < 1e15 {
                    format!("{:.0}", f)
                } else {
                    f.to_string()
                }
            }
            JsNumberType::NaN => "NaN".to_string(),
            JsNumberType::PositiveInfinity => "Infinity".to_string(),
            JsNumberType::NegativeInfinity => "-Infinity".to_string(),
        },
        JsValue::String(s) => s.clone(),
        JsValue::Symbol(s) => s.to_string(),
        JsValue::Object(_) => "[object Object]".to_string(),
    }
}

/// Format all arguments for console output.
pub fn format_args(args: &[JsValue]) -> String {
    args.iter().map(format_value).collect::<Vec<_>>().join(" ")
}
