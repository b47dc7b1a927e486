// SPDX-License-Identifier: MIT OR Apache-2.0

//! Attribute-addressable records built from parsed configuration mappings.
//!
//! A [`Record`] is an ordered set of named fields discovered at runtime. Fields hold
//! either a [`RawValue`] leaf (scalars and sequences, passed through unchanged) or a
//! nested [`Record`].

use crate::domain::errors::{join_key, ConfigError, Result};
use crate::domain::raw_value::{RawMapping, RawValue};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::ops::Index;

/// The value stored in a record field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// A scalar or sequence leaf. Sequences are never converted, so any mappings
    /// inside them stay raw.
    Value(RawValue),
    /// A nested record, converted from a mapping.
    Record(Record),
}

impl FieldValue {
    /// Returns the nested record, if this field is one.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            FieldValue::Record(record) => Some(record),
            FieldValue::Value(_) => None,
        }
    }

    /// Returns the raw leaf value, if this field is not a record.
    pub fn as_value(&self) -> Option<&RawValue> {
        match self {
            FieldValue::Value(value) => Some(value),
            FieldValue::Record(_) => None,
        }
    }

    /// Returns the string slice if this field is a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(RawValue::as_str)
    }

    /// Returns the integer if this field is an integer leaf.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_value().and_then(RawValue::as_i64)
    }

    /// Returns the number if this field is a numeric leaf.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_value().and_then(RawValue::as_f64)
    }

    /// Returns the boolean if this field is a boolean leaf.
    pub fn as_bool(&self) -> Option<bool> {
        self.as_value().and_then(RawValue::as_bool)
    }

    /// Returns the items if this field is a sequence leaf.
    pub fn as_sequence(&self) -> Option<&[RawValue]> {
        self.as_value().and_then(RawValue::as_sequence)
    }

    /// Returns a short name for the kind of field, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Record(_) => "record",
            FieldValue::Value(value) => value.kind(),
        }
    }

    /// Converts the field back into a raw value. Nested records become mappings.
    pub fn to_raw(&self) -> RawValue {
        match self {
            FieldValue::Record(record) => record.to_raw(),
            FieldValue::Value(value) => value.clone(),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FieldValue::Record(record) => record.serialize(serializer),
            FieldValue::Value(value) => value.serialize(serializer),
        }
    }
}

/// An ordered, read-only set of named fields.
///
/// Records are produced from a parsed mapping and never mutated afterwards. Each
/// record remembers its dotted key below the document root so that lookup errors can
/// name the full path of the missing field.
///
/// # Examples
///
/// ```
/// use flowerpower::domain::{RawValue, Record};
///
/// let record = Record::from_mapping(vec![(
///     "db".to_string(),
///     RawValue::mapping([("host", RawValue::from("x")), ("port", RawValue::from(5432))]),
/// )]);
///
/// let db = record.get_record("db").unwrap();
/// assert_eq!(db.get_str("host").unwrap(), "x");
/// assert_eq!(db.attrs(), vec!["host", "port"]);
/// assert_eq!(record.lookup("db.port").unwrap().as_i64(), Some(5432));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Record {
    /// Dotted key of this record below the root; empty for the root itself
    key: String,
    /// Fields in document order
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Creates an empty root record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a mapping into a root record, recursively.
    ///
    /// Every value that is itself a mapping becomes a nested record. All other values,
    /// including sequences that contain mappings, are kept as they are.
    pub fn from_mapping(mapping: RawMapping) -> Self {
        Self::convert(String::new(), mapping)
    }

    fn convert(key: String, mapping: RawMapping) -> Self {
        let fields = mapping
            .into_iter()
            .map(|(name, value)| {
                let field = match value {
                    RawValue::Mapping(nested) => {
                        FieldValue::Record(Self::convert(join_key(&key, &name), nested))
                    }
                    other => FieldValue::Value(other),
                };
                (name, field)
            })
            .collect();
        Self { key, fields }
    }

    /// Creates a record from leaf values without converting nested mappings.
    pub fn shallow(key: impl Into<String>, fields: RawMapping) -> Self {
        Self {
            key: key.into(),
            fields: fields
                .into_iter()
                .map(|(name, value)| (name, FieldValue::Value(value)))
                .collect(),
        }
    }

    /// Creates a root record whose fields are the given records, in order.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            key: String::new(),
            fields: records
                .into_iter()
                .map(|record| (record.key.clone(), FieldValue::Record(record)))
                .collect(),
        }
    }

    /// Returns the dotted key of this record; empty for a root record.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the named field.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::FieldNotFound` if the record has no such field.
    pub fn get(&self, name: &str) -> Result<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
            .ok_or_else(|| ConfigError::field_not_found(&self.key, name))
    }

    /// Returns `true` if the record has a field with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(field, _)| field == name)
    }

    /// Follows a dotted path such as `db.primary.host` through nested records.
    pub fn lookup(&self, path: &str) -> Result<&FieldValue> {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or_default();
        let mut current = self.get(first)?;
        for segment in segments {
            current = match current {
                FieldValue::Record(record) => record.get(segment)?,
                FieldValue::Value(value) => {
                    return Err(ConfigError::TypeConversionError {
                        key: path.to_string(),
                        target_type: "record".to_string(),
                        found: value.kind().to_string(),
                    })
                }
            };
        }
        Ok(current)
    }

    /// Returns the field names in document order.
    pub fn attrs(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Iterates over the fields in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serializes the record into a raw mapping, recursively.
    pub fn to_raw(&self) -> RawValue {
        RawValue::Mapping(
            self.fields
                .iter()
                .map(|(name, value)| (name.clone(), value.to_raw()))
                .collect(),
        )
    }

    /// Returns the named nested record.
    pub fn get_record(&self, name: &str) -> Result<&Record> {
        let field = self.get(name)?;
        field
            .as_record()
            .ok_or_else(|| self.mismatch(name, "record", field))
    }

    /// Returns the named field as a string.
    pub fn get_str(&self, name: &str) -> Result<&str> {
        let field = self.get(name)?;
        field
            .as_str()
            .ok_or_else(|| self.mismatch(name, "string", field))
    }

    /// Returns the named field as an integer.
    pub fn get_i64(&self, name: &str) -> Result<i64> {
        let field = self.get(name)?;
        field
            .as_i64()
            .ok_or_else(|| self.mismatch(name, "integer", field))
    }

    /// Returns the named field as a float. Integer fields are widened.
    pub fn get_f64(&self, name: &str) -> Result<f64> {
        let field = self.get(name)?;
        field
            .as_f64()
            .ok_or_else(|| self.mismatch(name, "float", field))
    }

    /// Returns the named field as a boolean.
    pub fn get_bool(&self, name: &str) -> Result<bool> {
        let field = self.get(name)?;
        field
            .as_bool()
            .ok_or_else(|| self.mismatch(name, "boolean", field))
    }

    /// Returns the named field as a sequence.
    pub fn get_sequence(&self, name: &str) -> Result<&[RawValue]> {
        let field = self.get(name)?;
        field
            .as_sequence()
            .ok_or_else(|| self.mismatch(name, "sequence", field))
    }

    fn mismatch(&self, name: &str, target_type: &str, field: &FieldValue) -> ConfigError {
        ConfigError::TypeConversionError {
            key: join_key(&self.key, name),
            target_type: target_type.to_string(),
            found: field.kind().to_string(),
        }
    }
}

/// Indexes a field by name.
///
/// # Panics
///
/// Panics if the field does not exist. Use [`Record::get`] for a fallible lookup.
impl Index<&str> for Record {
    type Output = FieldValue;

    fn index(&self, name: &str) -> &FieldValue {
        match self.get(name) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

/// Indexes into a nested record field.
///
/// # Panics
///
/// Panics if the field is not a record or has no such nested field.
impl Index<&str> for FieldValue {
    type Output = FieldValue;

    fn index(&self, name: &str) -> &FieldValue {
        match self {
            FieldValue::Record(record) => &record[name],
            FieldValue::Value(value) => {
                panic!("cannot index {} field with '{}'", value.kind(), name)
            }
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
