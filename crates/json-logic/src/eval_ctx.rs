use crate::types::OperatorMap;
use crate::value::Value;

/// The execution context passed to every operator eval function.
///
/// Scopes are replaced, not chained: a collection operator swaps `scope`
/// for each element and only the data root stays reachable behind it.
#[derive(Debug, Clone, Copy)]
pub struct EvalCtx<'a> {
    /// The data document of the call. Plain `var` paths the element lacks
    /// resolve here.
    pub data: &'a Value,
    /// The current element. Every `var` path is tried here first.
    pub scope: &'a Value,
    /// The operator map used for recursive evaluation.
    pub operators: &'a OperatorMap,
}

impl<'a> EvalCtx<'a> {
    pub fn new(data: &'a Value, operators: &'a OperatorMap) -> Self {
        EvalCtx {
            data,
            scope: data,
            operators,
        }
    }

    /// Context for a predicate evaluated against `scope`.
    pub fn with_scope<'b>(&self, scope: &'b Value) -> EvalCtx<'b>
    where
        'a: 'b,
    {
        EvalCtx {
            data: self.data,
            scope,
            operators: self.operators,
        }
    }
}
