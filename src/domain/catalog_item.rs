// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed-shape catalog entry.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::raw_value::RawValue;
use crate::domain::record::Record;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Field name holding the dataset type.
pub const TYPE_FIELD: &str = "type";
/// Field name holding the dataset location.
pub const PATH_FIELD: &str = "path";

/// A named dataset entry of a catalog: exactly a `type` and a `path`.
///
/// # Examples
///
/// ```
/// use flowerpower::domain::{CatalogItem, RawValue};
///
/// let raw = RawValue::mapping([("type", RawValue::from("csv")), ("path", RawValue::from("data/sales.csv"))]);
/// let item = CatalogItem::from_raw("sales", &raw).unwrap();
/// assert_eq!(item.kind, "csv");
///
/// let missing = RawValue::mapping([("type", RawValue::from("csv"))]);
/// assert!(CatalogItem::from_raw("sales", &missing).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// The dataset type, e.g. `csv` or `parquet`
    #[serde(rename = "type")]
    pub kind: String,
    /// Where the dataset lives
    pub path: String,
}

impl CatalogItem {
    /// Validates a raw catalog entry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MalformedCatalogItem` unless `raw` is a mapping with exactly
    /// the string fields `type` and `path`.
    pub fn from_raw(name: &str, raw: &RawValue) -> Result<Self> {
        let entries = raw.as_mapping().ok_or_else(|| {
            ConfigError::malformed_item(name, format!("expected a mapping, found {}", raw.kind()))
        })?;

        if let Some((unexpected, _)) = entries
            .iter()
            .find(|(key, _)| key != TYPE_FIELD && key != PATH_FIELD)
        {
            return Err(ConfigError::malformed_item(
                name,
                format!("unexpected field '{}'", unexpected),
            ));
        }

        Ok(Self {
            kind: Self::string_field(name, raw, TYPE_FIELD)?,
            path: Self::string_field(name, raw, PATH_FIELD)?,
        })
    }

    fn string_field(name: &str, raw: &RawValue, field: &str) -> Result<String> {
        match raw.get(field) {
            Some(RawValue::String(s)) => Ok(s.clone()),
            Some(other) => Err(ConfigError::malformed_item(
                name,
                format!("field '{}' must be a string, found {}", field, other.kind()),
            )),
            None => Err(ConfigError::malformed_item(
                name,
                format!("missing field '{}'", field),
            )),
        }
    }

    /// Returns the location as a filesystem path.
    pub fn path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// Builds the flat two-field record for this item.
    pub fn to_record(&self, name: &str) -> Record {
        Record::shallow(
            name,
            vec![
                (TYPE_FIELD.to_string(), RawValue::from(self.kind.as_str())),
                (PATH_FIELD.to_string(), RawValue::from(self.path.as_str())),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(entries: Vec<(&str, RawValue)>) -> RawValue {
        RawValue::mapping(entries)
    }

    #[test]
    fn test_valid_item() {
        let item = CatalogItem::from_raw(
            "sales",
            &raw(vec![("path", RawValue::from("s3://b/sales")), ("type", RawValue::from("parquet"))]),
        )
        .unwrap();
        assert_eq!(item.kind, "parquet");
        assert_eq!(item.path(), Path::new("s3://b/sales"));
    }

    #[test]
    fn test_missing_path() {
        let err = CatalogItem::from_raw("sales", &raw(vec![("type", RawValue::from("csv"))]))
            .unwrap_err();
        match err {
            ConfigError::MalformedCatalogItem { name, reason } => {
                assert_eq!(name, "sales");
                assert_eq!(reason, "missing field 'path'");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extra_field() {
        let err = CatalogItem::from_raw(
            "sales",
            &raw(vec![
                ("type", RawValue::from("csv")),
                ("path", RawValue::from("a.csv")),
                ("sep", RawValue::from(";")),
            ]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("unexpected field 'sep'"));
    }

    #[test]
    fn test_non_string_field() {
        let err = CatalogItem::from_raw(
            "sales",
            &raw(vec![("type", RawValue::from("csv")), ("path", RawValue::from(3))]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("must be a string"));
    }

    #[test]
    fn test_not_a_mapping() {
        let err = CatalogItem::from_raw("sales", &RawValue::from("a.csv")).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedCatalogItem { .. }));
    }

    #[test]
    fn test_to_record_is_flat() {
        let item = CatalogItem {
            kind: "csv".to_string(),
            path: "a.csv".to_string(),
        };
        let record = item.to_record("sales");
        assert_eq!(record.key(), "sales");
        assert_eq!(record.attrs(), vec!["type", "path"]);
        assert_eq!(record.get_str("type").unwrap(), "csv");
    }
}
