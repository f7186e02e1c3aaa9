//! String operators.

use crate::error::Error;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, OperatorDefinition};
use crate::util;
use crate::value::Value;
use std::sync::Arc;

fn cat_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let mut result = String::new();
    for arg in args {
        result.push_str(&util::stringify("cat", arg)?);
    }
    Ok(Value::String(result))
}

/// Clamps a signed character offset into `0..=count`, counting negative
/// offsets from the end.
fn offset(n: f64, count: usize) -> usize {
    let n = n.trunc();
    if n < 0.0 {
        count.saturating_sub(n.abs() as usize)
    } else {
        (n as usize).min(count)
    }
}

/// `[s, start, len?]` over characters.
fn substr_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let source = util::stringify("substr", &args[0])?;
    let count = source.chars().count();
    let start = offset(util::to_number("substr", &args[1])?, count);
    let end = match args.get(2) {
        Some(len) => {
            let len = util::to_number("substr", len)?.trunc();
            if len < 0.0 {
                offset(len, count).max(start)
            } else {
                start.saturating_add(len as usize).min(count)
            }
        }
        None => count,
    };
    Ok(Value::String(
        source.chars().skip(start).take(end - start).collect(),
    ))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "cat",
            arity: Arity::Any,
            eval_fn: cat_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "substr",
            arity: Arity::Range(2, Some(3)),
            eval_fn: substr_eval,
            lazy: false,
            check: None,
        }),
    ]
}
