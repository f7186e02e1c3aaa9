//! Arithmetic operators.

use crate::error::Error;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, OperatorDefinition};
use crate::util;
use crate::value::Value;
use std::sync::Arc;

fn numbers(op: &'static str, args: &[Value]) -> Result<Vec<f64>, Error> {
    args.iter().map(|arg| util::to_number(op, arg)).collect()
}

fn add_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    Ok(Value::Number(numbers("+", args)?.into_iter().sum()))
}

fn subtract_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let result = match numbers("-", args)?.as_slice() {
        [a] => -a,
        [a, b, ..] => a - b,
        [] => 0.0,
    };
    Ok(Value::Number(result))
}

fn multiply_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    Ok(Value::Number(numbers("*", args)?.into_iter().product()))
}

fn divide_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    match numbers("/", args)?.as_slice() {
        [a] => Ok(Value::Number(*a)),
        [_, b, ..] if *b == 0.0 => Err(Error::DivisionByZero { operator: "/" }),
        [a, b, ..] => Ok(Value::Number(a / b)),
        [] => Ok(Value::Null),
    }
}

fn mod_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let a = util::to_number("%", &args[0])?;
    let b = util::to_number("%", &args[1])?;
    if b == 0.0 {
        return Err(Error::DivisionByZero { operator: "%" });
    }
    Ok(Value::Number(a % b))
}

fn min_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    Ok(numbers("min", args)?
        .into_iter()
        .reduce(f64::min)
        .map_or(Value::Null, Value::Number))
}

fn max_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    Ok(numbers("max", args)?
        .into_iter()
        .reduce(f64::max)
        .map_or(Value::Null, Value::Number))
}

fn abs_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    Ok(Value::Number(util::to_number("abs", &args[0])?.abs()))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "+",
            arity: Arity::Any,
            eval_fn: add_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "-",
            arity: Arity::Range(1, Some(2)),
            eval_fn: subtract_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "*",
            arity: Arity::Range(1, None),
            eval_fn: multiply_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "/",
            arity: Arity::Range(1, Some(2)),
            eval_fn: divide_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "%",
            arity: Arity::Fixed(2),
            eval_fn: mod_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "min",
            arity: Arity::Any,
            eval_fn: min_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "max",
            arity: Arity::Any,
            eval_fn: max_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "abs",
            arity: Arity::Fixed(1),
            eval_fn: abs_eval,
            lazy: false,
            check: None,
        }),
    ]
}
