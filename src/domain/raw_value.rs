// SPDX-License-Identifier: MIT OR Apache-2.0

//! Format-agnostic parsed configuration values.
//!
//! Every decoder turns its document into a [`RawValue`] tree before any record
//! conversion happens. Mappings keep the key order of the source document.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

/// An ordered list of key-value pairs, as found in the source document.
pub type RawMapping = Vec<(String, RawValue)>;

/// A parsed configuration value.
///
/// `RawValue` is the intermediate tree that TOML, YAML and JSON documents all decode
/// into. Integers that do not fit in an `i64` are stored as floats.
///
/// # Examples
///
/// ```
/// use flowerpower::domain::RawValue;
///
/// let value = RawValue::mapping([("host", RawValue::from("x")), ("port", RawValue::from(5432))]);
/// assert_eq!(value.get("port"), Some(&RawValue::Integer(5432)));
/// assert_eq!(value.kind(), "mapping");
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum RawValue {
    /// An explicit null (YAML `~`, JSON `null`).
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string. TOML datetimes are kept in their textual form.
    String(String),
    /// A sequence of values. Mappings inside sequences stay raw.
    Sequence(Vec<RawValue>),
    /// An ordered mapping of string keys.
    Mapping(RawMapping),
}

impl RawValue {
    /// Builds a mapping value from key-value pairs, keeping their order.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, RawValue)>,
    {
        RawValue::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns a short name for the kind of value, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "boolean",
            RawValue::Integer(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::String(_) => "string",
            RawValue::Sequence(_) => "sequence",
            RawValue::Mapping(_) => "mapping",
        }
    }

    /// Looks up a key if this value is a mapping.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        match self {
            RawValue::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Returns the string slice if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this value is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RawValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as a float. Integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Float(f) => Some(*f),
            RawValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Returns the boolean if this value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RawValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the items if this value is a sequence.
    pub fn as_sequence(&self) -> Option<&[RawValue]> {
        match self {
            RawValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this value is a mapping.
    pub fn as_mapping(&self) -> Option<&RawMapping> {
        match self {
            RawValue::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns `true` if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Integer(n)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Integer(n.into())
    }
}

impl From<f64> for RawValue {
    fn from(f: f64) -> Self {
        RawValue::Float(f)
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::String(s)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::String(s.to_string())
    }
}

impl From<Vec<RawValue>> for RawValue {
    fn from(items: Vec<RawValue>) -> Self {
        RawValue::Sequence(items)
    }
}

impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            RawValue::Null => serializer.serialize_unit(),
            RawValue::Bool(b) => serializer.serialize_bool(*b),
            RawValue::Integer(n) => serializer.serialize_i64(*n),
            RawValue::Float(f) => serializer.serialize_f64(*f),
            RawValue::String(s) => serializer.serialize_str(s),
            RawValue::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            RawValue::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => write!(f, "null"),
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Integer(n) => write!(f, "{}", n),
            RawValue::Float(x) => write!(f, "{}", x),
            RawValue::String(s) => write!(f, "{}", s),
            RawValue::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            RawValue::Mapping(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_keeps_order() {
        let value = RawValue::mapping([
            ("c", RawValue::from(1)),
            ("a", RawValue::from(2)),
            ("b", RawValue::from(3)),
        ]);
        let keys: Vec<&str> = value
            .as_mapping()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_get_on_non_mapping() {
        assert_eq!(RawValue::from("x").get("x"), None);
        assert_eq!(RawValue::Null.get("x"), None);
    }

    #[test]
    fn test_scalar_accessors() {
        assert_eq!(RawValue::from("x").as_str(), Some("x"));
        assert_eq!(RawValue::from(5432).as_i64(), Some(5432));
        assert_eq!(RawValue::from(2).as_f64(), Some(2.0));
        assert_eq!(RawValue::from(1.5).as_f64(), Some(1.5));
        assert_eq!(RawValue::from(true).as_bool(), Some(true));
        assert_eq!(RawValue::from(1.5).as_i64(), None);
        assert!(RawValue::Null.is_null());
        assert!(RawValue::default().is_null());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(RawValue::Null.kind(), "null");
        assert_eq!(RawValue::from(vec![RawValue::from(1)]).kind(), "sequence");
        assert_eq!(RawValue::mapping::<&str, _>([]).kind(), "mapping");
    }

    #[test]
    fn test_display() {
        let value = RawValue::mapping([
            ("name", RawValue::from("x")),
            ("ports", RawValue::from(vec![RawValue::from(1), RawValue::from(2)])),
        ]);
        assert_eq!(value.to_string(), "{name: x, ports: [1, 2]}");
    }

    #[test]
    fn test_serialize_keeps_order() {
        let value = RawValue::mapping([
            ("b", RawValue::from(1)),
            ("a", RawValue::Null),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"b":1,"a":null}"#);
    }
}
