//! Logical operators.

use crate::error::Error;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, OperatorDefinition};
use crate::util;
use crate::value::Value;
use std::sync::Arc;

fn not_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    Ok(Value::Bool(!util::truthy(&args[0])))
}

fn bool_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    Ok(Value::Bool(util::truthy(&args[0])))
}

/// All operands must hold; if they do and a positive number was among them,
/// the largest number is the result.
fn and_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let mut all = true;
    let mut max = 0.0_f64;
    for arg in args {
        match arg {
            Value::Bool(b) => all &= *b,
            Value::Number(n) => {
                all &= *n > 0.0;
                max = max.max(*n);
            }
            other => return Err(Error::mismatch("and", "boolean or number", other.kind())),
        }
    }
    if all && max > 0.0 {
        Ok(Value::Number(max))
    } else {
        Ok(Value::Bool(all))
    }
}

fn or_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    for arg in args {
        match arg {
            Value::Bool(true) => return Ok(Value::Bool(true)),
            Value::Number(n) if *n > 0.0 => return Ok(Value::Number(*n)),
            _ => {}
        }
    }
    Ok(Value::Bool(false))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "!",
            arity: Arity::Fixed(1),
            eval_fn: not_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "!!",
            arity: Arity::Fixed(1),
            eval_fn: bool_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "and",
            arity: Arity::Range(1, None),
            eval_fn: and_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "or",
            arity: Arity::Range(1, None),
            eval_fn: or_eval,
            lazy: false,
            check: None,
        }),
    ]
}
