//! Data access operators: `var`, `missing` and `missing_some`.

use crate::error::Error;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, OperatorDefinition};
use crate::value::Value;
use crate::vars;
use std::sync::Arc;

fn var_eval(args: &[Value], ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    vars::resolve(args, ctx)
}

fn var_check(args: &[Value]) -> Result<(), &'static str> {
    match args.first() {
        Some(Value::Bool(_) | Value::Array(_)) => Err("path must be a string, a number or null"),
        _ => Ok(()),
    }
}

fn missing_eval(args: &[Value], ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let keys = match args.first() {
        Some(Value::Array(keys)) => keys.as_slice(),
        _ => args,
    };
    Ok(Value::array(vars::missing(keys, ctx)?))
}

/// `[need, paths]`: nothing is missing once `need` of the paths are present.
fn missing_some_eval(args: &[Value], ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let need = match &args[0] {
        Value::Number(n) => *n,
        other => return Err(Error::mismatch("missing_some", "number", other.kind())),
    };
    let keys = args[1]
        .as_array()
        .ok_or_else(|| Error::mismatch("missing_some", "array", args[1].kind()))?;
    let absent = vars::missing(keys, ctx)?;
    let present = keys.len() - absent.len();
    if present as f64 >= need {
        Ok(Value::array(Vec::new()))
    } else {
        Ok(Value::array(absent))
    }
}

fn missing_some_check(args: &[Value]) -> Result<(), &'static str> {
    match args {
        [need, _] if !matches!(need, Value::Number(_) | Value::Object(_)) => {
            Err("need must be a number")
        }
        [_, paths] if !matches!(paths, Value::Array(_) | Value::Object(_)) => {
            Err("paths must be an array")
        }
        _ => Ok(()),
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "var",
            arity: Arity::Range(0, Some(2)),
            eval_fn: var_eval,
            lazy: false,
            check: Some(var_check),
        }),
        Arc::new(OperatorDefinition {
            name: "missing",
            arity: Arity::Any,
            eval_fn: missing_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "missing_some",
            arity: Arity::Fixed(2),
            eval_fn: missing_some_eval,
            lazy: false,
            check: Some(missing_some_check),
        }),
    ]
}
