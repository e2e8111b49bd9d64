//! Core types for the evaluation layer.

use crate::runner::ds::error::JErrorType;
use crate::runner::ds::value::JsValue;

pub type ValueResult = Result<JsValue, JErrorType>;
