//! Loosely-typed passenger record as it arrives at the boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LbError, Result};

/// Every field is optional and may be a string, a number or anything else.
/// Coercion happens later, in [`crate::features::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassengerInput {
    pub pclass: Option<Value>,
    pub sex: Option<Value>,
    pub age: Option<Value>,
    pub sibsp: Option<Value>,
    pub parch: Option<Value>,
    pub fare: Option<Value>,
    pub embarked: Option<Value>,
    pub name: Option<Value>,
    pub ticket: Option<Value>,
    pub cabin: Option<Value>,
}

impl PassengerInput {
    /// Parse a request body. Anything other than a JSON object is rejected.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|e| LbError::MalformedBody(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(LbError::MalformedBody(format!("expected a JSON object, got {}", kind(&value))));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn sex_str(&self) -> Option<&str> {
        self.sex.as_ref().and_then(Value::as_str)
    }

    pub fn embarked_str(&self) -> Option<&str> {
        self.embarked.as_ref().and_then(Value::as_str)
    }

    pub fn name_text(&self) -> String {
        text(self.name.as_ref())
    }

    pub fn ticket_text(&self) -> String {
        text(self.ticket.as_ref())
    }

    pub fn cabin_text(&self) -> String {
        text(self.cabin.as_ref())
    }
}

fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
