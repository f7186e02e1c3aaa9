use crate::error::Error;
use crate::eval_ctx::EvalCtx;
use crate::types::{Arity, OperatorDefinition};
use crate::value::Value;
use std::sync::Arc;
use tracing::info;

fn log_eval(args: &[Value], _ctx: &EvalCtx<'_>) -> Result<Value, Error> {
    info!(target: "json_logic::log", value = %args[0]);
    Ok(args[0].clone())
}

pub fn operators() -> Vec<Arc<OperatorDefinition>> {
    vec![Arc::new(OperatorDefinition {
        name: "log",
        arity: Arity::Fixed(1),
        eval_fn: log_eval,
        lazy: false,
        check: None,
    })]
}
