//! Coercion helpers shared by the operator families.
//!
//! Comparisons are asymmetric: the first operand decides the kind the second
//! one is coerced into. A second operand that cannot be coerced is a type
//! mismatch, never a silent `false`.

use crate::error::Error;
use crate::value::Value;
use std::borrow::Cow;
use std::cmp::Ordering;

// ----------------------------------------------------------------- Scalars

/// Parses a numeric string. Unparsable text is zero.
pub fn parse_number(s: &str) -> f64 {
    s.parse::<f64>().unwrap_or(0.0)
}

/// Shortest decimal representation, never in exponent form.
pub fn format_number(n: f64) -> String {
    format!("{n}")
}

/// Loose truthiness: `true` and strictly positive numbers.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => *n > 0.0,
        _ => false,
    }
}

/// Second operand of a numeric comparison.
fn number_operand(op: &'static str, value: &Value) -> Result<f64, Error> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::String(s) => Ok(parse_number(s)),
        other => Err(Error::mismatch(op, "number or numeric string", other.kind())),
    }
}

/// Second operand of a string comparison.
fn string_operand<'v>(op: &'static str, value: &'v Value) -> Result<Cow<'v, str>, Error> {
    match value {
        Value::String(s) => Ok(Cow::Borrowed(s)),
        Value::Number(n) => Ok(Cow::Owned(format_number(*n))),
        other => Err(Error::mismatch(op, "string or number", other.kind())),
    }
}

/// Arithmetic operand.
pub fn to_number(op: &'static str, value: &Value) -> Result<f64, Error> {
    number_operand(op, value)
}

/// String form used by concatenation.
pub fn stringify(op: &'static str, value: &Value) -> Result<String, Error> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(format_number(*n)),
        Value::String(s) => Ok(s.clone()),
        Value::Array(items) => {
            let parts = items
                .iter()
                .map(|item| stringify(op, item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(parts.join(","))
        }
        Value::Object(_) => Err(Error::mismatch(op, "scalar or array", value.kind())),
    }
}

// ----------------------------------------------------------------- Comparison

/// `true` iff `b` is greater than `a`, with `b` coerced to `a`'s kind.
///
/// A first operand that is neither a number nor a string is never less.
pub fn less(op: &'static str, a: &Value, b: &Value) -> Result<bool, Error> {
    match a {
        Value::Number(x) => Ok(number_operand(op, b)? > *x),
        Value::String(s) => Ok(string_operand(op, b)?.as_ref() > s.as_str()),
        _ => Ok(false),
    }
}

/// Loose equality, with `b` coerced to `a`'s kind.
///
/// Strings only equal strings; a string compared against anything else is a
/// mismatch. Arrays and objects never compare equal.
pub fn equals(op: &'static str, a: &Value, b: &Value) -> Result<bool, Error> {
    match a {
        Value::Number(x) => Ok(number_operand(op, b)? == *x),
        Value::String(s) => match b {
            Value::String(t) => Ok(s == t),
            other => Err(Error::mismatch(op, "string", other.kind())),
        },
        Value::Bool(x) => Ok(b.as_bool() == Some(*x)),
        Value::Null => Ok(b.is_null()),
        Value::Array(_) | Value::Object(_) => Ok(false),
    }
}

/// Equality that first requires both operands to share a kind.
pub fn hard_equals(op: &'static str, a: &Value, b: &Value) -> Result<bool, Error> {
    if a.kind() != b.kind() {
        return Ok(false);
    }
    equals(op, a, b)
}

/// `a <= b` under the `less`/`equals` rules.
pub fn less_or_equal(op: &'static str, a: &Value, b: &Value) -> Result<bool, Error> {
    Ok(less(op, a, b)? || equals(op, a, b)?)
}

/// Orders `candidate` against `needle`, coercing the needle into the
/// candidate's kind. `None` when the two cannot be ordered: NaN, or a
/// candidate that is neither a number nor a string.
pub fn compare_to(
    op: &'static str,
    candidate: &Value,
    needle: &Value,
) -> Result<Option<Ordering>, Error> {
    match candidate {
        Value::Number(c) => Ok(c.partial_cmp(&number_operand(op, needle)?)),
        Value::String(c) => Ok(Some(c.as_str().cmp(string_operand(op, needle)?.as_ref()))),
        _ => Ok(None),
    }
}
