//! Operator application over runtime values.
//!
//! The coercion and comparison machinery lives in `ds::operations`; this
//! module exposes it the way a call site written against expressions would
//! reach it.

pub mod expression;
pub mod types;

pub use types::ValueResult;
