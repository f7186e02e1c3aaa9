//! Array operators: membership, merging and the lazy collection operators.
//!
//! `map`, `filter`, `reduce`, `all`, `some` and `none` evaluate their
//! collection in the current context and then run the predicate once per
//! element with the element as the new scope.

use crate::error::Error;
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::types::{Arity, OperatorDefinition};
use crate::util;
use crate::value::{Map, Value};
use std::cmp::Ordering;
use std::sync::Arc;

// ----------------------------------------------------------------- Membership

/// Matches `needle` against a single `in` haystack entry.
fn in_entry(needle: &Value, entry: &Value) -> Result<bool, Error> {
    if matches!(needle, Value::Array(_) | Value::Object(_)) {
        return if needle.kind() == entry.kind() {
            Err(Error::mismatch("in", "scalar needle", needle.kind()))
        } else {
            Ok(false)
        };
    }
    if let Value::Array(range) = entry {
        return match range.as_slice() {
            [lo, hi] if lo.kind() == needle.kind() && hi.kind() == needle.kind() => {
                Ok(util::less_or_equal("in", lo, needle)? && util::less_or_equal("in", needle, hi)?)
            }
            _ => Ok(false),
        };
    }
    util::hard_equals("in", needle, entry)
}

fn in_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let needle = &args[0];
    match &args[1] {
        Value::String(haystack) => match needle {
            Value::String(s) => Ok(Value::Bool(haystack.contains(s.as_str()))),
            other => Err(Error::mismatch("in", "string", other.kind())),
        },
        Value::Array(entries) => {
            for entry in entries.iter() {
                if in_entry(needle, entry)? {
                    return Ok(Value::Bool(true));
                }
            }
            Ok(Value::Bool(false))
        }
        other => Err(Error::mismatch("in", "string or array", other.kind())),
    }
}

fn in_sorted_candidate(needle: &Value, candidate: &Value) -> Result<bool, Error> {
    match candidate {
        Value::Array(range) => match range.as_slice() {
            [lo, hi] => {
                let from = util::compare_to("in_sorted", lo, needle)?;
                let to = util::compare_to("in_sorted", hi, needle)?;
                Ok(matches!(from, Some(Ordering::Less | Ordering::Equal))
                    && matches!(to, Some(Ordering::Greater | Ordering::Equal)))
            }
            _ => Ok(false),
        },
        scalar => Ok(util::compare_to("in_sorted", scalar, needle)? == Some(Ordering::Equal)),
    }
}

fn in_sorted_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let needle = &args[0];
    let candidates = args[1]
        .as_array()
        .ok_or_else(|| Error::mismatch("in_sorted", "array", args[1].kind()))?;
    for candidate in candidates {
        if in_sorted_candidate(needle, candidate)? {
            return Ok(Value::Bool(true));
        }
    }
    Ok(Value::Bool(false))
}

fn merge_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let mut merged = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Value::Array(items) => merged.extend(items.iter().cloned()),
            other => merged.push(other.clone()),
        }
    }
    Ok(Value::array(merged))
}

// ----------------------------------------------------------------- Collections

/// Evaluates the collection operand. Anything but an array is empty.
fn collection(rule: &Value, ctx: &EvalCtx<'_>) -> Result<Arc<Vec<Value>>, Error> {
    match evaluate(rule, ctx)? {
        Value::Array(items) => Ok(items),
        _ => Ok(Arc::default()),
    }
}

fn holds(predicate: &Value, item: &Value, ctx: &EvalCtx<'_>) -> Result<bool, Error> {
    Ok(util::truthy(&evaluate(predicate, &ctx.with_scope(item))?))
}

fn map_eval(rules: &[Value], ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let items = collection(&rules[0], ctx)?;
    let mapped = items
        .iter()
        .map(|item| evaluate(&rules[1], &ctx.with_scope(item)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::array(mapped))
}

fn filter_eval(rules: &[Value], ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let items = collection(&rules[0], ctx)?;
    let mut kept = Vec::new();
    for item in items.iter() {
        if holds(&rules[1], item, ctx)? {
            kept.push(item.clone());
        }
    }
    Ok(Value::array(kept))
}

fn reduce_eval(rules: &[Value], ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let items = collection(&rules[0], ctx)?;
    let mut accumulator = match rules.get(2) {
        Some(initial) => evaluate(initial, ctx)?,
        None => Value::Null,
    };
    for item in items.iter() {
        let mut scope = Map::with_capacity(2);
        scope.insert("current".to_string(), item.clone());
        scope.insert("accumulator".to_string(), accumulator);
        let scope = Value::object(scope);
        accumulator = evaluate(&rules[1], &ctx.with_scope(&scope))?;
    }
    Ok(accumulator)
}

fn all_eval(rules: &[Value], ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let items = collection(&rules[0], ctx)?;
    if items.is_empty() {
        return Ok(Value::Bool(false));
    }
    for item in items.iter() {
        if !holds(&rules[1], item, ctx)? {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

fn any_holds(rules: &[Value], ctx: &EvalCtx<'_>) -> Result<bool, Error> {
    let items = collection(&rules[0], ctx)?;
    for item in items.iter() {
        if holds(&rules[1], item, ctx)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn some_eval(rules: &[Value], ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    Ok(Value::Bool(any_holds(rules, ctx)?))
}

fn none_eval(rules: &[Value], ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    Ok(Value::Bool(!any_holds(rules, ctx)?))
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![
        Arc::new(OperatorDefinition {
            name: "in",
            arity: Arity::Fixed(2),
            eval_fn: in_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "in_sorted",
            arity: Arity::Fixed(2),
            eval_fn: in_sorted_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "merge",
            arity: Arity::Any,
            eval_fn: merge_eval,
            lazy: false,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "map",
            arity: Arity::Fixed(2),
            eval_fn: map_eval,
            lazy: true,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "filter",
            arity: Arity::Fixed(2),
            eval_fn: filter_eval,
            lazy: true,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "reduce",
            arity: Arity::Range(2, Some(3)),
            eval_fn: reduce_eval,
            lazy: true,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "all",
            arity: Arity::Fixed(2),
            eval_fn: all_eval,
            lazy: true,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "some",
            arity: Arity::Fixed(2),
            eval_fn: some_eval,
            lazy: true,
            check: None,
        }),
        Arc::new(OperatorDefinition {
            name: "none",
            arity: Arity::Fixed(2),
            eval_fn: none_eval,
            lazy: true,
            check: None,
        }),
    ]
}
