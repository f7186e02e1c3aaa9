//! Branching operators.

use crate::error::Error;
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::types::{Arity, OperatorDefinition};
use crate::util;
use crate::value::Value;
use std::sync::Arc;

/// `?:` sees all three operands already evaluated; the condition must be a
/// boolean.
fn ternary_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    match &args[0] {
        Value::Bool(true) => Ok(args[1].clone()),
        Value::Bool(false) => Ok(args[2].clone()),
        other => Err(Error::mismatch("?:", "boolean", other.kind())),
    }
}

/// `[cond, then, cond, then, ..., else]`, evaluating only what is needed.
fn if_eval(rules: &[Value], ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let mut branches = rules.chunks_exact(2);
    for branch in &mut branches {
        if util::truthy(&evaluate(&branch[0], ctx)?) {
            return evaluate(&branch[1], ctx);
        }
    }
    match branches.remainder() {
        [otherwise] => evaluate(otherwise, ctx),
        _ => Ok(Value::Null),
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "?:",
            arity: Arity::Fixed(3),
            eval_fn: ternary_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "if",
            arity: Arity::Any,
            eval_fn: if_eval,
            lazy: true,
            check: None,
        }),
    ]
}
