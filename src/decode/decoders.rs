//! Envelope-aware JSON decoding

use crate::error::{Error, Result};
use crate::types::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// JSON decoder that unwraps named envelopes before decoding a shape
///
/// ```rust,ignore
/// let detail: EnergyDetail = JsonDecoder::with_envelope("energyDetails").decode(&body)?;
/// let list: Vec<Component> = JsonDecoder::with_envelope("reporters.list").decode(&body)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder {
    /// Keys to descend through, outermost first
    envelope: Vec<String>,
}

impl JsonDecoder {
    /// Create a decoder for bare (unwrapped) bodies
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder that unwraps a dot-separated envelope path
    pub fn with_envelope(path: &str) -> Self {
        Self {
            envelope: path
                .split('.')
                .filter(|key| !key.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Decode the body into `T`
    pub fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T> {
        let value = self.unwrap(parse(body)?)?;
        serde_json::from_value(value).map_err(|e| Error::decoding(e.to_string()))
    }

    /// Decode the body into a raw JSON object
    pub fn decode_object(&self, body: &[u8]) -> Result<JsonObject> {
        match self.unwrap(parse(body)?)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::decoding(format!(
                "expected a JSON object, found {}",
                kind_of(&other)
            ))),
        }
    }

    fn unwrap(&self, mut value: Value) -> Result<Value> {
        for key in &self.envelope {
            value = match value {
                Value::Object(mut map) => map.remove(key),
                _ => None,
            }
            .ok_or_else(|| Error::decoding(format!("missing '{key}' envelope")))?;
        }
        Ok(value)
    }
}

fn parse(body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body).map_err(|e| Error::decoding(format!("Failed to parse JSON: {e}")))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
