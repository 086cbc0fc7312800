//! Typed access to tool input.

use serde::de::DeserializeOwned;

use crate::error::SyllabusError;
use crate::types::ToolInput;

/// Borrowed view over a tool's input object.
#[derive(Debug, Clone, Copy)]
pub struct ToolArguments<'a> {
    input: &'a ToolInput,
}

impl<'a> ToolArguments<'a> {
    pub fn new(input: &'a ToolInput) -> Self {
        Self { input }
    }

    /// A required string argument.
    pub fn get_str(&self, key: &str) -> Result<&'a str, SyllabusError> {
        self.get_str_opt(key).ok_or_else(|| {
            SyllabusError::InvalidArgument(format!("missing string argument '{key}'"))
        })
    }

    pub fn get_str_opt(&self, key: &str) -> Option<&'a str> {
        self.input.get(key).and_then(|v| v.as_str())
    }

    pub fn get_i64_opt(&self, key: &str) -> Option<i64> {
        self.input.get(key).and_then(|v| v.as_i64())
    }

    pub fn get_bool_opt(&self, key: &str) -> Option<bool> {
        self.input.get(key).and_then(|v| v.as_bool())
    }

    /// Deserialize the whole input into a parameter struct.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, SyllabusError> {
        let value = serde_json::Value::Object(self.input.clone());
        Ok(serde_json::from_value(value)?)
    }
}
