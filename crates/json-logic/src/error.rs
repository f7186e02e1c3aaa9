use crate::types::Arity;
use crate::value::Kind;
use thiserror::Error;

/// A structural problem with a rule, detectable without data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown operator \"{0}\".")]
    UnknownOperator(String),

    #[error("\"{operator}\" operator expects {expected}, got {found}.")]
    Arity {
        operator: String,
        expected: Arity,
        found: usize,
    },

    #[error("Ambiguous rule: an operator object must have exactly one key, found {keys}.")]
    AmbiguousRule { keys: usize },

    #[error("Invalid operand for \"{operator}\": {reason}.")]
    InvalidOperand {
        operator: String,
        reason: &'static str,
    },
}

/// Everything that can go wrong between rule text and a bound result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid {input} JSON: {message}")]
    Decode {
        input: &'static str,
        message: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Type mismatch in \"{operator}\": expected {expected}, found {found}.")]
    TypeMismatch {
        operator: &'static str,
        expected: &'static str,
        found: Kind,
    },

    #[error("Division by zero in \"{operator}\".")]
    DivisionByZero { operator: &'static str },

    #[error("Cannot bind result: {0}")]
    Binding(String),
}

impl Error {
    pub(crate) fn mismatch(operator: &'static str, expected: &'static str, found: Kind) -> Self {
        Error::TypeMismatch {
            operator,
            expected,
            found,
        }
    }
}
