//! # gist - a miniature JavaScript-semantics runtime
//!
//! A small runtime modeling the core semantics of a dynamic scripting
//! language, driven through an explicit API rather than a parser:
//! - Tagged dynamic values with the seven-category `typeof` model
//! - Prototype-linked objects with read-miss delegation and write shadowing
//! - Lexical scope frames with hoisting, block scoping and live closures
//! - Call-site receiver binding (bare, method, explicit, constructor)
//! - Coercing loose equality and relational comparison
//!
//! ## Quick Start
//!
//! ```
//! use gist::runner::api::JsRunner;
//! use gist::runner::ds::realm::EvalMode;
//! use gist::runner::ds::value::{JsNumberType, JsValue};
//!
//! let mut runner = JsRunner::new(EvalMode::Sloppy);
//! runner.declare_var("a").unwrap();
//! runner.set("a", JsValue::Number(JsNumberType::Integer(42))).unwrap();
//! let a = runner.get("a").unwrap();
//! assert_eq!(a, JsValue::Number(JsNumberType::Integer(42)));
//! ```
//!
//! ## Running the annotated notes
//!
//! The [`notes`] module is a transcription of a set of language-learning
//! notes; each section drives the runtime and logs the lines the original
//! annotations promise:
//!
//! ```
//! use gist::notes;
//! use gist::runner::api::JsRunner;
//! use gist::runner::ds::realm::EvalMode;
//!
//! let mut runner = JsRunner::new_capturing(EvalMode::Sloppy);
//! notes::run_all(&mut runner).unwrap();
//! assert_eq!(runner.console_output().first().map(String::as_str), Some("3"));
//! ```
//!
//! ## Architecture
//!
//! - **[`runner::ds`]** - Data structures (values, objects, environments)
//! - **[`runner::eval`]** - Operator application over values
//! - **[`runner::std_lib`]** - Built-in objects (console, Object, Symbol)
//! - **[`notes`]** - The transcribed annotated script

#[macro_use]
extern crate lazy_static;

pub mod notes;
pub mod runner;
