//! Static rule validation.
//!
//! Checks what can be known without data: rule shape, operator names,
//! operand counts of literal operand lists and the per-operator operand
//! checks. A rule that passes can still fail on data it is applied to.

use crate::error::ValidationError;
use crate::evaluate::operand_rules;
use crate::types::{assert_arity, OperatorMap};
use crate::value::Value;

/// Validates `rule` against the operators in `operators`.
pub fn validate(rule: &Value, operators: &OperatorMap) -> Result<(), ValidationError> {
    let Value::Object(map) = rule else {
        return Ok(());
    };
    let (name, operand) = match map.len() {
        0 => return Ok(()),
        1 => match map.get_index(0) {
            Some((name, operand)) => (name, operand),
            None => return Ok(()),
        },
        keys => return Err(ValidationError::AmbiguousRule { keys }),
    };
    let def = operators
        .get(name)
        .ok_or_else(|| ValidationError::UnknownOperator(name.clone()))?;

    // An eager operator's lone rule operand may spread into any number of
    // operands, so only the rule itself can be checked.
    if !def.lazy && operand.as_operation().is_some() {
        return validate(operand, operators);
    }

    let operands = operand_rules(operand);
    assert_arity(def, operands.len())?;
    if let Some(check) = def.check {
        check(&operands).map_err(|reason| ValidationError::InvalidOperand {
            operator: name.clone(),
            reason,
        })?;
    }
    operands
        .iter()
        .filter(|operand| matches!(operand, Value::Object(_)))
        .try_for_each(|operand| validate(operand, operators))
}
