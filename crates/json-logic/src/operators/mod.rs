//! Operator definitions, one module per family.

pub mod arithmetic;
pub mod array;
pub mod branching;
pub mod comparison;
pub mod input;
pub mod log;
pub mod logical;
pub mod object;
pub mod string;

use crate::types::{operators_to_map, OperatorDefinition, OperatorMap};
use std::sync::Arc;

/// Every built-in operator.
pub fn all_operators() -> Vec<Arc<OperatorDefinition>> {
    let mut ops = Vec::new();
    ops.extend(input::operators());
    ops.extend(log::operators());
    ops.extend(logical::operators());
    ops.extend(branching::operators());
    ops.extend(comparison::operators());
    ops.extend(arithmetic::operators());
    ops.extend(string::operators());
    ops.extend(array::operators());
    ops.extend(object::operators());
    ops
}

/// Builds the operator map from all built-in operators.
pub fn operators_map() -> OperatorMap {
    operators_to_map(all_operators())
}
