// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document parser.
//!
//! Only plain YAML is accepted: tagged values are rejected rather than interpreted.

use crate::domain::{ConfigError, ConfigFormat, RawMapping, RawValue, Result};
use crate::ports::ConfigParser;
use std::collections::HashSet;

/// YAML parser implementation.
///
/// # Examples
///
/// ```rust
/// use flowerpower::adapters::YamlParser;
/// use flowerpower::domain::RawValue;
/// use flowerpower::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let tree = parser.parse("database:\n  host: localhost\n  port: 5432").unwrap();
/// let database = tree.get("database").unwrap();
/// assert_eq!(database.get("port"), Some(&RawValue::Integer(5432)));
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    fn convert(value: serde_yaml::Value) -> Result<RawValue> {
        Ok(match value {
            serde_yaml::Value::Null => RawValue::Null,
            serde_yaml::Value::Bool(b) => RawValue::Bool(b),
            serde_yaml::Value::Number(n) => match n.as_i64() {
                Some(i) => RawValue::Integer(i),
                None => n
                    .as_f64()
                    .map(RawValue::Float)
                    .ok_or_else(|| ConfigError::parse(format!("Unrepresentable number: {}", n)))?,
            },
            serde_yaml::Value::String(s) => RawValue::String(s),
            serde_yaml::Value::Sequence(seq) => RawValue::Sequence(
                seq.into_iter()
                    .map(Self::convert)
                    .collect::<Result<Vec<_>>>()?,
            ),
            serde_yaml::Value::Mapping(map) => {
                let mut seen = HashSet::with_capacity(map.len());
                let mut entries = RawMapping::with_capacity(map.len());
                for (key, val) in map {
                    let key = Self::key_string(key)?;
                    // `1` and `"1"` are distinct YAML keys but name the same field
                    if !seen.insert(key.clone()) {
                        return Err(ConfigError::parse(format!(
                            "duplicate mapping key '{}'",
                            key
                        )));
                    }
                    entries.push((key, Self::convert(val)?));
                }
                RawValue::Mapping(entries)
            }
            serde_yaml::Value::Tagged(tagged) => {
                return Err(ConfigError::parse(format!(
                    "YAML tags are not supported: {}",
                    tagged.tag
                )))
            }
        })
    }

    /// Scalar keys are stringified; anything else cannot name a field.
    fn key_string(key: serde_yaml::Value) -> Result<String> {
        match key {
            serde_yaml::Value::String(s) => Ok(s),
            serde_yaml::Value::Number(n) => Ok(n.to_string()),
            serde_yaml::Value::Bool(b) => Ok(b.to_string()),
            other => Err(ConfigError::parse(format!(
                "Unsupported YAML mapping key: {:?}",
                other
            ))),
        }
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<RawValue> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        Self::convert(value)
    }

    fn supported_extensions(&self) -> &[&str] {
        ConfigFormat::Yaml.extensions()
    }
}
