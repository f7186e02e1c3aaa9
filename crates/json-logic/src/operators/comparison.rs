//! Comparison operators.
//!
//! Every comparison with a single operand degrades to that operand's
//! truthiness. `<` and `<=` also take three operands as a chained
//! "between" test.

use crate::error::Error;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, OperatorDefinition};
use crate::util;
use crate::value::Value;
use std::sync::Arc;

fn unary(args: &[Value]) -> Value {
    Value::Bool(args.first().is_some_and(util::truthy))
}

fn eq_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    match args {
        [a, b] => Ok(Value::Bool(util::equals("==", a, b)?)),
        _ => Ok(unary(args)),
    }
}

fn ne_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    match args {
        [a, b] => Ok(Value::Bool(!util::equals("!=", a, b)?)),
        _ => Ok(unary(args)),
    }
}

fn strict_eq_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    match args {
        [a, b] => Ok(Value::Bool(util::hard_equals("===", a, b)?)),
        _ => Ok(unary(args)),
    }
}

fn strict_ne_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    match args {
        [a, b] => Ok(Value::Bool(!util::hard_equals("!==", a, b)?)),
        _ => Ok(unary(args)),
    }
}

fn lt_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let result = match args {
        [a, b] => util::less("<", a, b)?,
        [a, b, c] => util::less("<", a, b)? && util::less("<", b, c)?,
        _ => return Ok(unary(args)),
    };
    Ok(Value::Bool(result))
}

fn le_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let result = match args {
        [a, b] => util::less_or_equal("<=", a, b)?,
        [a, b, c] => util::less_or_equal("<=", a, b)? && util::less_or_equal("<=", b, c)?,
        _ => return Ok(unary(args)),
    };
    Ok(Value::Bool(result))
}

fn gt_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    match args {
        [a, b] => Ok(Value::Bool(util::less(">", b, a)?)),
        _ => Ok(unary(args)),
    }
}

fn ge_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    match args {
        [a, b] => Ok(Value::Bool(util::less(">=", b, a)? || util::equals(">=", a, b)?)),
        _ => Ok(unary(args)),
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "==",
            arity: Arity::Range(1, Some(2)),
            eval_fn: eq_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "!=",
            arity: Arity::Range(1, Some(2)),
            eval_fn: ne_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "===",
            arity: Arity::Range(1, Some(2)),
            eval_fn: strict_eq_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "!==",
            arity: Arity::Range(1, Some(2)),
            eval_fn: strict_ne_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "<",
            arity: Arity::Range(1, Some(3)),
            eval_fn: lt_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "<=",
            arity: Arity::Range(1, Some(3)),
            eval_fn: le_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: ">",
            arity: Arity::Range(1, Some(2)),
            eval_fn: gt_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: ">=",
            arity: Arity::Range(1, Some(2)),
            eval_fn: ge_eval,
            lazy: false,
            check: None,
        }),
    ]
}
