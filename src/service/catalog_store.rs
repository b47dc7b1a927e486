// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog store implementation.
//!
//! This module provides the `CatalogStore`, which loads a `catalog` document whose
//! top-level entries each describe one dataset by `type` and `path`.

use crate::adapters::{ConfigFileResolver, DEFAULT_CONFIG_DIR};
use crate::domain::{
    CatalogItem, ConfigDocument, ConfigError, ConfigStore, FieldValue, RawMapping, Record, Result,
};
use std::ops::Index;
use std::path::Path;

/// Read-only store of catalog entries.
///
/// Only the top level of the document is converted: each entry becomes a flat record
/// with exactly the `type` and `path` fields. Entries of any other shape fail the
/// whole construction.
///
/// # Examples
///
/// ```rust,no_run
/// use flowerpower::prelude::*;
///
/// # fn main() -> Result<()> {
/// // conf/catalog.yaml:
/// //   sales:
/// //     type: csv
/// //     path: data/sales.csv
/// let catalog = CatalogStore::new("conf")?;
///
/// assert_eq!(catalog.item("sales")?.kind, "csv");
/// assert_eq!(catalog["sales"]["path"].as_str(), Some("data/sales.csv"));
/// assert_eq!(catalog.items(), vec!["sales"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogStore {
    /// Where the catalog was loaded from; `None` for in-memory stores
    document: Option<ConfigDocument>,
    /// Validated entries in document order
    entries: Vec<(String, CatalogItem)>,
    /// One flat record per entry
    root: Record,
}

impl CatalogStore {
    /// Logical name of the catalog document.
    pub const BASENAME: &'static str = "catalog";

    /// Loads `<cfg_path>/catalog.{toml,yaml,yml,json}`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::ConfigNotFound` if no candidate exists
    /// - `ConfigError::MalformedCatalogItem` if any entry is not `{type, path}`
    /// - any read or decoding error of the resolved file
    pub fn new<P: AsRef<Path>>(cfg_path: P) -> Result<Self> {
        let (document, tree) = ConfigFileResolver::new(cfg_path).load(Self::BASENAME)?;
        let mut store = Self::build(tree)?;
        tracing::debug!(
            "Built catalog store from {} with {} items",
            document.path().display(),
            store.entries.len()
        );
        store.document = Some(document);
        Ok(store)
    }

    /// Loads `conf/catalog.*` relative to the working directory.
    pub fn from_default_dir() -> Result<Self> {
        Self::new(DEFAULT_CONFIG_DIR)
    }

    /// Builds a store from an already parsed tree, without touching the filesystem.
    pub fn from_raw(tree: RawMapping) -> Result<Self> {
        Self::build(tree)
    }

    fn build(tree: RawMapping) -> Result<Self> {
        let entries = tree
            .into_iter()
            .map(|(name, raw)| {
                CatalogItem::from_raw(&name, &raw)
                    .map(|item| (name, item))
                    .map_err(|e| {
                        tracing::warn!("Rejecting catalog entry: {}", e);
                        e
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let root = Record::from_records(
            entries
                .iter()
                .map(|(name, item)| item.to_record(name))
                .collect(),
        );

        Ok(Self {
            document: None,
            entries,
            root,
        })
    }

    /// Returns the entry names in document order. Same as `attrs(None)`.
    pub fn items(&self) -> Vec<&str> {
        self.root.attrs()
    }

    /// Returns the typed entry with this name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::FieldNotFound` if the catalog has no such entry.
    pub fn item(&self, name: &str) -> Result<&CatalogItem> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, item)| item)
            .ok_or_else(|| ConfigError::field_not_found("", name))
    }

    /// Iterates over the typed entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogItem)> {
        self.entries.iter().map(|(name, item)| (name.as_str(), item))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigStore for CatalogStore {
    fn root(&self) -> &Record {
        &self.root
    }

    fn document(&self) -> Option<&ConfigDocument> {
        self.document.as_ref()
    }
}

/// Indexes an entry record by name.
///
/// # Panics
///
/// Panics if the entry does not exist. Use [`ConfigStore::get`] for a fallible lookup.
impl Index<&str> for CatalogStore {
    type Output = FieldValue;

    fn index(&self, name: &str) -> &FieldValue {
        &self.root[name]
    }
}
