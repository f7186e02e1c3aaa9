//! The configured rule engine.

use crate::error::{Error, ValidationError};
use crate::eval_ctx::EvalCtx;
use crate::evaluate::evaluate;
use crate::operators::operators_map;
use crate::types::OperatorMap;
use crate::validate;
use crate::value::Value;
use std::sync::Arc;
use tracing::debug;

/// Options for [`JsonLogic`].
#[derive(Debug, Clone)]
pub struct JsonLogicOptions {
    /// Operators the engine dispatches to.
    pub operators: Arc<OperatorMap>,
    /// Reject structurally invalid rules before touching the data.
    pub validate_before_apply: bool,
}

impl Default for JsonLogicOptions {
    fn default() -> Self {
        JsonLogicOptions {
            operators: Arc::new(operators_map()),
            validate_before_apply: false,
        }
    }
}

/// Applies rules against data with a fixed operator registry.
///
/// The engine holds no per-call state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct JsonLogic {
    options: JsonLogicOptions,
}

impl JsonLogic {
    pub fn new(options: JsonLogicOptions) -> Self {
        JsonLogic { options }
    }

    pub fn operators(&self) -> &OperatorMap {
        &self.options.operators
    }

    /// Evaluates `rule` against `data`. `Value::Null` data is the empty
    /// context.
    pub fn apply(&self, rule: &Value, data: &Value) -> Result<Value, Error> {
        if self.options.validate_before_apply {
            self.validate(rule)?;
        }
        let ctx = EvalCtx::new(data, &self.options.operators);
        evaluate(rule, &ctx)
    }

    pub fn validate(&self, rule: &Value) -> Result<(), ValidationError> {
        validate::validate(rule, &self.options.operators).inspect_err(|err| {
            debug!(error = %err, "rule rejected");
        })
    }

    pub fn is_valid(&self, rule: &Value) -> bool {
        self.validate(rule).is_ok()
    }
}
