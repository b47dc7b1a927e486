// SPDX-License-Identifier: MIT OR Apache-2.0

//! TOML document parser.

use crate::domain::{ConfigError, ConfigFormat, RawValue, Result};
use crate::ports::ConfigParser;

/// TOML parser implementation.
///
/// Tables keep their document order. Datetimes are kept as strings in their TOML
/// form, since the raw tree has no datetime type.
///
/// # Examples
///
/// ```rust
/// use flowerpower::adapters::TomlParser;
/// use flowerpower::domain::RawValue;
/// use flowerpower::ports::ConfigParser;
///
/// let tree = TomlParser::new().parse("[db]\nhost = \"x\"\nport = 5432\n").unwrap();
/// assert_eq!(tree.get("db").and_then(|db| db.get("host")), Some(&RawValue::from("x")));
/// ```
#[derive(Debug, Clone)]
pub struct TomlParser;

impl TomlParser {
    /// Creates a new TOML parser.
    pub fn new() -> Self {
        TomlParser
    }

    fn convert(value: toml::Value) -> RawValue {
        match value {
            toml::Value::String(s) => RawValue::String(s),
            toml::Value::Integer(i) => RawValue::Integer(i),
            toml::Value::Float(f) => RawValue::Float(f),
            toml::Value::Boolean(b) => RawValue::Bool(b),
            toml::Value::Datetime(dt) => RawValue::String(dt.to_string()),
            toml::Value::Array(items) => {
                RawValue::Sequence(items.into_iter().map(Self::convert).collect())
            }
            toml::Value::Table(table) => Self::convert_table(table),
        }
    }

    fn convert_table(table: toml::Table) -> RawValue {
        RawValue::Mapping(
            table
                .into_iter()
                .map(|(key, value)| (key, Self::convert(value)))
                .collect(),
        )
    }
}

impl Default for TomlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for TomlParser {
    fn parse(&self, content: &str) -> Result<RawValue> {
        let table: toml::Table = content.parse().map_err(|e: toml::de::Error| {
            ConfigError::ParseError {
                message: format!("Failed to parse TOML: {}", e),
                source: Some(Box::new(e)),
            }
        })?;

        Ok(Self::convert_table(table))
    }

    fn supported_extensions(&self) -> &[&str] {
        ConfigFormat::Toml.extensions()
    }
}
