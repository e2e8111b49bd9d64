//! Equality section: array-to-string coercion, record identity, and the
//! non-ordering of a failed numeric coercion.

use crate::notes::{int, str_value};
use crate::runner::api::JsRunner;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::object::new_array_object;
use crate::runner::ds::value::JsValue;
use crate::runner::eval::expression::{apply_binary_operator, BinaryOperator};

fn log_compare(
    runner: &mut JsRunner,
    op: BinaryOperator,
    a: &JsValue,
    b: &JsValue,
) -> Result<(), JErrorType> {
    let result = apply_binary_operator(op, a, b)?;
    runner.console_log(vec![result])
}

/// ```text
/// var a = [1,2,3];
/// var b = [1,2,3];
/// var c = "1,2,3";
/// a == c;   // true
/// b == c;   // true
/// a == b;   // false !!!
/// ```
/// then `42 < "foo"`, `42 > "foo"`, `42 == "foo"`, all false because the
/// string coerces to the not-a-number marker.
pub fn equality_and_inequality(runner: &mut JsRunner) -> Result<(), JErrorType> {
    let a = JsValue::Object(new_array_object(vec![int(1), int(2), int(3)]));
    let b = JsValue::Object(new_array_object(vec![int(1), int(2), int(3)]));
    let c = str_value("1,2,3");

    log_compare(runner, BinaryOperator::LooseEquals, &a, &c)?;
    log_compare(runner, BinaryOperator::LooseEquals, &b, &c)?;
    log_compare(runner, BinaryOperator::LooseEquals, &a, &b)?;

    let a = int(42);
    let b = str_value("foo");
    log_compare(runner, BinaryOperator::LessThan, &a, &b)?;
    log_compare(runner, BinaryOperator::GreaterThan, &a, &b)?;
    log_compare(runner, BinaryOperator::LooseEquals, &a, &b)?;
    Ok(())
}
