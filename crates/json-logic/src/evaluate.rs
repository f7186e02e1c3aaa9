//! The recursive rule dispatcher.

use crate::error::{Error, ValidationError};
use crate::eval_ctx::EvalCtx;
use crate::types::{assert_arity, OperatorDefinition};
use crate::value::Value;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::trace;

/// Evaluates a rule against an execution context.
///
/// - Anything but a single-key object is a literal and is returned as is.
/// - A single-key object `{operator: operands}` dispatches to the matching
///   operator. Eager operators see their operands evaluated; lazy ones get
///   the operand rules untouched.
pub fn evaluate(rule: &Value, ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    let Some((name, operand)) = rule.as_operation() else {
        return Ok(rule.clone());
    };

    let def = ctx
        .operators
        .get(name)
        .ok_or_else(|| ValidationError::UnknownOperator(name.to_string()))?;
    trace!(operator = def.name, lazy = def.lazy, "dispatch");

    if def.lazy {
        let rules = operand_rules(operand);
        assert_arity(def, rules.len())?;
        return (def.eval_fn)(&rules, ctx);
    }

    let args = evaluate_operands(def, operand, ctx)?;
    assert_arity(def, args.len())?;
    (def.eval_fn)(&args, ctx)
}

/// The operand list as written: an array supplies the list, any other value
/// is the only operand.
pub fn operand_rules(operand: &Value) -> Cow<'_, [Value]> {
    match operand {
        Value::Array(items) => Cow::Borrowed(items.as_slice()),
        other => Cow::Owned(vec![other.clone()]),
    }
}

/// Pre-evaluates the operands of an eager operator.
///
/// Elements of an operand array are evaluated one level deep: nested arrays
/// are data. A lone rule operand is evaluated and, when the operator takes a
/// list, a sequence result becomes the operand list.
fn evaluate_operands(
    def: &OperatorDefinition,
    operand: &Value,
    ctx: &EvalCtx<'_>,
) -> Result<Vec<Value>, Error> {
    match operand {
        Value::Array(items) => items.iter().map(|item| evaluate(item, ctx)).collect(),
        rule if rule.as_operation().is_some() => match evaluate(rule, ctx)? {
            Value::Array(items) if def.arity.takes_list() => Ok(Arc::unwrap_or_clone(items)),
            other => Ok(vec![other]),
        },
        other => Ok(vec![other.clone()]),
    }
}
