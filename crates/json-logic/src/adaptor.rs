//! JSON text boundary: decoding rule and data text, and binding results.

use crate::engine::JsonLogic;
use crate::error::Error;
use crate::value::Value;
use serde::de::DeserializeOwned;

fn decode(input: &'static str, text: &str) -> Result<Value, Error> {
    serde_json::from_str::<serde_json::Value>(text)
        .map(Value::from)
        .map_err(|err| Error::Decode {
            input,
            message: err.to_string(),
        })
}

/// Decodes rule text.
pub fn parse_rule(text: &str) -> Result<Value, Error> {
    decode("rule", text)
}

/// Decodes data text. Absent data is the empty context.
pub fn parse_data(text: Option<&str>) -> Result<Value, Error> {
    match text {
        Some(text) => decode("data", text),
        None => Ok(Value::Null),
    }
}

impl JsonLogic {
    /// Applies rule text to data text and returns the result as JSON.
    pub fn apply_json(&self, rule: &str, data: Option<&str>) -> Result<serde_json::Value, Error> {
        let rule = parse_rule(rule)?;
        let data = parse_data(data)?;
        self.apply(&rule, &data).map(serde_json::Value::from)
    }

    /// Like [`JsonLogic::apply_json`], binding the result to `T`.
    pub fn apply_into<T: DeserializeOwned>(
        &self,
        rule: &str,
        data: Option<&str>,
    ) -> Result<T, Error> {
        let result = self.apply_json(rule, data)?;
        serde_json::from_value(result).map_err(|err| Error::Binding(err.to_string()))
    }

    /// Whether rule text decodes and passes validation.
    pub fn is_valid_json(&self, rule: &str) -> bool {
        parse_rule(rule).is_ok_and(|rule| self.is_valid(&rule))
    }
}
