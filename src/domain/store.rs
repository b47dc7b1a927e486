// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only record store trait definition.
//!
//! This module defines the `ConfigStore` trait, the shared access surface of the
//! parameter and catalog stores. Implementors only provide the root record and the
//! document it was loaded from; every accessor is derived from those.

use crate::domain::{ConfigFormat, FieldValue, RawValue, Record, Result};
use std::path::{Path, PathBuf};

/// The document a store was loaded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigDocument {
    path: PathBuf,
    format: ConfigFormat,
}

impl ConfigDocument {
    /// Creates a document descriptor for a resolved file and its format.
    pub fn new(path: PathBuf, format: ConfigFormat) -> Self {
        Self { path, format }
    }

    /// Returns the path of the resolved file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the format the file was decoded with.
    pub fn format(&self) -> ConfigFormat {
        self.format
    }
}

/// The main record store trait.
///
/// A store owns one root [`Record`] built once at construction. Everything else is
/// a view over that record.
///
/// # Examples
///
/// ```rust
/// use flowerpower::domain::{ConfigDocument, ConfigStore, RawValue, Record};
///
/// struct InMemory(Record);
///
/// impl ConfigStore for InMemory {
///     fn root(&self) -> &Record {
///         &self.0
///     }
///
///     fn document(&self) -> Option<&ConfigDocument> {
///         None
///     }
/// }
///
/// let store = InMemory(Record::from_mapping(vec![("a".to_string(), RawValue::from(1))]));
/// assert_eq!(store.get("a").unwrap().as_i64(), Some(1));
/// assert_eq!(store.attrs(None).unwrap(), vec!["a"]);
/// ```
pub trait ConfigStore {
    /// Returns the root record. This is what a lookup without a name yields.
    fn root(&self) -> &Record;

    /// Returns the document the store was loaded from, if it came from a file.
    fn document(&self) -> Option<&ConfigDocument>;

    /// Returns the named top-level field.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::FieldNotFound` if the root record has no such field.
    fn get(&self, name: &str) -> Result<&FieldValue> {
        self.root().get(name)
    }

    /// Returns the named top-level field as a record.
    fn record(&self, name: &str) -> Result<&Record> {
        self.root().get_record(name)
    }

    /// Follows a dotted path from the root record.
    fn lookup(&self, path: &str) -> Result<&FieldValue> {
        self.root().lookup(path)
    }

    /// Serializes the root record, or the named field, into raw values.
    ///
    /// Nested records become mappings; scalars and sequences are returned unchanged.
    fn asdict(&self, name: Option<&str>) -> Result<RawValue> {
        match name {
            None => Ok(self.root().to_raw()),
            Some(name) => Ok(self.get(name)?.to_raw()),
        }
    }

    /// Returns the field names of the root record, or of the named nested record.
    fn attrs(&self, name: Option<&str>) -> Result<Vec<&str>> {
        match name {
            None => Ok(self.root().attrs()),
            Some(name) => Ok(self.record(name)?.attrs()),
        }
    }

    /// Returns `true` if the root record has a field with this name.
    fn contains(&self, name: &str) -> bool {
        self.root().contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;

    struct TestStore {
        root: Record,
        document: ConfigDocument,
    }

    impl ConfigStore for TestStore {
        fn root(&self) -> &Record {
            &self.root
        }

        fn document(&self) -> Option<&ConfigDocument> {
            Some(&self.document)
        }
    }

    fn store() -> TestStore {
        TestStore {
            root: Record::from_mapping(vec![
                ("a".to_string(), RawValue::from(1)),
                (
                    "b".to_string(),
                    RawValue::mapping([("x", RawValue::from("y")), ("z", RawValue::Null)]),
                ),
                ("c".to_string(), RawValue::from(vec![RawValue::from(true)])),
            ]),
            document: ConfigDocument::new(PathBuf::from("conf/params.toml"), ConfigFormat::Toml),
        }
    }

    #[test]
    fn test_get_matches_root_field() {
        let store = store();
        assert_eq!(store.get("a").unwrap(), store.root().get("a").unwrap());
        assert!(matches!(store.get("nope"), Err(ConfigError::FieldNotFound { .. })));
    }

    #[test]
    fn test_asdict_root_and_field() {
        let store = store();
        assert_eq!(store.asdict(None).unwrap(), store.root().to_raw());
        assert_eq!(
            store.asdict(Some("b")).unwrap(),
            RawValue::mapping([("x", RawValue::from("y")), ("z", RawValue::Null)])
        );
        assert_eq!(store.asdict(Some("a")).unwrap(), RawValue::from(1));
        assert!(store.asdict(Some("nope")).is_err());
    }

    #[test]
    fn test_attrs_root_and_nested() {
        let store = store();
        assert_eq!(store.attrs(None).unwrap(), vec!["a", "b", "c"]);
        assert_eq!(store.attrs(Some("b")).unwrap(), vec!["x", "z"]);
        assert!(matches!(
            store.attrs(Some("a")),
            Err(ConfigError::TypeConversionError { .. })
        ));
        assert!(matches!(
            store.attrs(Some("nope")),
            Err(ConfigError::FieldNotFound { .. })
        ));
    }

    #[test]
    fn test_document() {
        let store = store();
        let document = store.document().unwrap();
        assert_eq!(document.path(), Path::new("conf/params.toml"));
        assert_eq!(document.format(), ConfigFormat::Toml);
        assert!(store.contains("c"));
        assert!(!store.contains("d"));
    }

    #[test]
    fn test_lookup() {
        let store = store();
        assert_eq!(store.lookup("b.x").unwrap().as_str(), Some("y"));
    }
}
