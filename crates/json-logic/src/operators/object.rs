//! Object operators.

use crate::error::Error;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, OperatorDefinition};
use crate::value::Value;
use std::sync::Arc;

/// `[target, path, value]`: a copy of `target` with `value` at the dotted
/// `path`. The input tree is never modified.
fn set_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let path = match &args[1] {
        Value::String(path) => path.strip_prefix('.').unwrap_or(path.as_str()),
        other => return Err(Error::mismatch("set", "string path", other.kind())),
    };
    let segments: Vec<&str> = path.split('.').collect();
    args[0]
        .set_path(&segments, args[2].clone())
        .map_err(|found| Error::mismatch("set", "object", found))
}

fn set_check(args: &[Value]) -> Result<(), &'static str> {
    match args.get(1) {
        Some(Value::String(_) | Value::Object(_)) | None => Ok(()),
        Some(_) => Err("path must be a string"),
    }
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![Arc::new(OperatorDefinition {
        name: "set",
        arity: Arity::Fixed(3),
        eval_fn: set_eval,
        lazy: false,
        check: Some(set_check),
    })]
}
