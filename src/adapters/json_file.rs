// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON document parser.

use crate::domain::{ConfigError, ConfigFormat, RawValue, Result};
use crate::ports::ConfigParser;

/// JSON parser implementation.
///
/// Object keys keep their document order. Numbers that fit an `i64` become integers,
/// everything else becomes a float.
///
/// # Examples
///
/// ```rust
/// use flowerpower::adapters::JsonParser;
/// use flowerpower::domain::RawValue;
/// use flowerpower::ports::ConfigParser;
///
/// let tree = JsonParser::new().parse(r#"{"db": {"port": 5432}}"#).unwrap();
/// assert_eq!(tree.get("db").and_then(|db| db.get("port")), Some(&RawValue::Integer(5432)));
/// ```
#[derive(Debug, Clone)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }

    fn convert(value: serde_json::Value) -> Result<RawValue> {
        Ok(match value {
            serde_json::Value::Null => RawValue::Null,
            serde_json::Value::Bool(b) => RawValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => RawValue::Integer(i),
                None => n
                    .as_f64()
                    .map(RawValue::Float)
                    .ok_or_else(|| ConfigError::parse(format!("Unrepresentable number: {}", n)))?,
            },
            serde_json::Value::String(s) => RawValue::String(s),
            serde_json::Value::Array(items) => RawValue::Sequence(
                items
                    .into_iter()
                    .map(Self::convert)
                    .collect::<Result<Vec<_>>>()?,
            ),
            serde_json::Value::Object(map) => RawValue::Mapping(
                map.into_iter()
                    .map(|(key, val)| Self::convert(val).map(|v| (key, v)))
                    .collect::<Result<Vec<_>>>()?,
            ),
        })
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for JsonParser {
    fn parse(&self, content: &str) -> Result<RawValue> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
                source: Some(Box::new(e)),
            })?;

        Self::convert(value)
    }

    fn supported_extensions(&self) -> &[&str] {
        ConfigFormat::Json.extensions()
    }
}
