//! Variable resolution.
//!
//! Paths are dot separated. A plain path is looked up in the current element
//! first and then at the data root. A leading `.` keeps the path inside the
//! current element. The empty path is the current element itself, and a
//! numeric path indexes into it when it is an array. A lookup that finds
//! nothing (or `null`) stays unresolved: enclosing elements are never
//! consulted.

use crate::error::Error;
use crate::eval_ctx::EvalCtx;
use crate::value::Value;

/// Resolves a `var` path. Returns `None` when nothing is found.
pub fn lookup<'v>(path: &Value, ctx: &EvalCtx<'v>) -> Result<Option<&'v Value>, Error> {
    let found = match path {
        Value::Null => Some(ctx.scope),
        Value::String(s) => lookup_str(s, ctx),
        Value::Number(n) => index(ctx.scope, *n),
        other => {
            return Err(Error::mismatch(
                "var",
                "string or number path",
                other.kind(),
            ))
        }
    };
    Ok(found.filter(|v| !v.is_null()))
}

fn lookup_str<'v>(path: &str, ctx: &EvalCtx<'v>) -> Option<&'v Value> {
    if path.is_empty() {
        return Some(ctx.scope);
    }
    match path.strip_prefix('.') {
        Some("") => Some(ctx.scope),
        Some(relative) => walk(ctx.scope, relative),
        None => walk(ctx.scope, path)
            .filter(|v| !v.is_null())
            .or_else(|| walk(ctx.data, path)),
    }
}

/// Follows a dotted path through nested objects.
pub fn walk<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.')
        .try_fold(root, |current, segment| current.as_object()?.get(segment))
}

fn index(scope: &Value, n: f64) -> Option<&Value> {
    if n < 0.0 || n.fract() != 0.0 {
        return None;
    }
    scope.as_array()?.get(n as usize)
}

/// Resolves a `var` operand list: `[path]` or `[path, default]`.
pub fn resolve(args: &[Value], ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let path = args.first().unwrap_or(&crate::value::NULL);
    Ok(match lookup(path, ctx)? {
        Some(value) => value.clone(),
        None => args.get(1).cloned().unwrap_or_default(),
    })
}

/// The paths among `keys` that resolve to nothing or to an empty string.
pub fn missing(keys: &[Value], ctx: &EvalCtx<'_>) -> Result<Vec<Value>, Error> {
    let mut absent = Vec::new();
    for key in keys {
        match lookup(key, ctx)? {
            Some(Value::String(s)) if s.is_empty() => absent.push(key.clone()),
            Some(_) => {}
            None => absent.push(key.clone()),
        }
    }
    Ok(absent)
}
