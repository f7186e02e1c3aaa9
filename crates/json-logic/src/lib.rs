//! JSON logic rule evaluator.
//!
//! # Overview
//!
//! A rule is a JSON value. A single-key object `{"operator": operands}`
//! invokes an operator; every other value is a literal. Rules are applied to
//! a data document, which `var` paths read from.
//!
//! # Example
//!
//! ```
//! use json_logic::{apply, Value};
//! use serde_json::json;
//!
//! let rule = Value::from(json!({"if": [{"<": [{"var": "temp"}, 0]}, "freezing", "fine"]}));
//! let data = Value::from(json!({"temp": -4}));
//!
//! assert_eq!(apply(&rule, &data).unwrap(), Value::from("freezing"));
//! ```
//!
//! Rule and data text can be applied directly:
//!
//! ```
//! let result = json_logic::apply_json(r#"{"cat": ["a", {"var": "b"}]}"#, Some(r#"{"b": 1}"#));
//! assert_eq!(result.unwrap(), serde_json::json!("a1"));
//! ```

pub mod adaptor;
#[cfg(feature = "cli")]
pub mod cli;
pub mod engine;
pub mod error;
pub mod eval_ctx;
pub mod evaluate;
pub mod operators;
pub mod types;
pub mod util;
pub mod validate;
pub mod value;
pub mod vars;

pub use adaptor::{parse_data, parse_rule};
pub use engine::{JsonLogic, JsonLogicOptions};
pub use error::{Error, ValidationError};
pub use eval_ctx::EvalCtx;
pub use evaluate::evaluate;
pub use operators::operators_map;
pub use types::{Arity, OperatorDefinition, OperatorMap};
pub use value::{Kind, Map, Value};

use serde::de::DeserializeOwned;
use std::sync::OnceLock;

fn engine() -> &'static JsonLogic {
    static ENGINE: OnceLock<JsonLogic> = OnceLock::new();
    ENGINE.get_or_init(JsonLogic::default)
}

/// Applies `rule` to `data` with the built-in operators.
pub fn apply(rule: &Value, data: &Value) -> Result<Value, Error> {
    engine().apply(rule, data)
}

pub fn validate(rule: &Value) -> Result<(), ValidationError> {
    engine().validate(rule)
}

pub fn is_valid(rule: &Value) -> bool {
    engine().is_valid(rule)
}

/// Applies rule text to optional data text. See [`JsonLogic::apply_json`].
pub fn apply_json(rule: &str, data: Option<&str>) -> Result<serde_json::Value, Error> {
    engine().apply_json(rule, data)
}

pub fn apply_into<T: DeserializeOwned>(rule: &str, data: Option<&str>) -> Result<T, Error> {
    engine().apply_into(rule, data)
}

pub fn is_valid_json(rule: &str) -> bool {
    engine().is_valid_json(rule)
}
