use crate::error::{Error, ValidationError};
use crate::eval_ctx::EvalCtx;
use crate::value::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Operator arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Any number of operands, including none.
    Any,
    /// Exactly `n` operands.
    Fixed(usize),
    /// Between `min` and `max` operands. `None` for max = unlimited.
    Range(usize, Option<usize>),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Any => true,
            Arity::Fixed(n) => count == n,
            Arity::Range(min, max) => count >= min && max.map_or(true, |max| count <= max),
        }
    }

    /// Whether the operator can take more than one operand.
    ///
    /// A sequence produced by a single rule operand is spread into the
    /// operand list only for such operators.
    pub fn takes_list(&self) -> bool {
        match *self {
            Arity::Any => true,
            Arity::Fixed(n) => n > 1,
            Arity::Range(_, max) => max.map_or(true, |max| max > 1),
        }
    }
}

fn operands(n: usize) -> &'static str {
    if n == 1 {
        "operand"
    } else {
        "operands"
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arity::Any => f.write_str("any number of operands"),
            Arity::Fixed(n) => write!(f, "{n} {}", operands(n)),
            Arity::Range(min, None) => write!(f, "at least {min} {}", operands(min)),
            Arity::Range(min, Some(max)) => write!(f, "{min} to {max} operands"),
        }
    }
}

/// The type of an operator evaluation function.
///
/// Eager operators receive evaluated operands; lazy ones receive the operand
/// rules as written and evaluate them through `ctx`.
pub type EvalFn = for<'a> fn(&[Value], &EvalCtx<'a>) -> Result<Value, Error>;

/// Static operand check run by the validator over literal operand lists.
/// Returns the reason the operands are malformed.
pub type CheckFn = fn(&[Value]) -> Result<(), &'static str>;

/// An operator definition.
pub struct OperatorDefinition {
    pub name: &'static str,
    pub arity: Arity,
    pub eval_fn: EvalFn,
    /// Operands are handed over unevaluated.
    pub lazy: bool,
    pub check: Option<CheckFn>,
}

impl fmt::Debug for OperatorDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorDefinition")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("lazy", &self.lazy)
            .finish()
    }
}

/// Map of operator name -> definition.
pub type OperatorMap = HashMap<String, Arc<OperatorDefinition>>;

/// Asserts that an operator received an acceptable number of operands.
pub fn assert_arity(def: &OperatorDefinition, count: usize) -> Result<(), ValidationError> {
    if def.arity.accepts(count) {
        Ok(())
    } else {
        Err(ValidationError::Arity {
            operator: def.name.to_string(),
            expected: def.arity,
            found: count,
        })
    }
}

/// Builds an `OperatorMap` from a list of operator definitions.
pub fn operators_to_map(operators: Vec<Arc<OperatorDefinition>>) -> OperatorMap {
    operators
        .into_iter()
        .map(|op| (op.name.to_string(), op))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_bounds() {
        assert!(Arity::Any.accepts(0));
        assert!(Arity::Fixed(3).accepts(3));
        assert!(!Arity::Fixed(3).accepts(2));
        assert!(Arity::Range(1, Some(3)).accepts(3));
        assert!(!Arity::Range(1, Some(3)).accepts(0));
        assert!(Arity::Range(1, None).accepts(50));
    }

    #[test]
    fn list_spreading_follows_max_arity() {
        assert!(!Arity::Fixed(1).takes_list());
        assert!(Arity::Fixed(2).takes_list());
        assert!(Arity::Range(1, None).takes_list());
        assert!(!Arity::Range(0, Some(1)).takes_list());
    }

    #[test]
    fn arity_messages() {
        assert_eq!(Arity::Fixed(1).to_string(), "1 operand");
        assert_eq!(Arity::Range(1, Some(3)).to_string(), "1 to 3 operands");
        assert_eq!(Arity::Range(2, None).to_string(), "at least 2 operands");
    }
}
