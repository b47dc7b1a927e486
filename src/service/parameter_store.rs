// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter store implementation.
//!
//! This module provides the `ParameterStore`, which loads a `params` document and
//! converts it into a tree of records that mirrors the document's nesting.

use crate::adapters::{ConfigFileResolver, DEFAULT_CONFIG_DIR};
use crate::domain::{ConfigDocument, ConfigStore, FieldValue, RawMapping, Record, Result};
use std::ops::Index;
use std::path::{Path, PathBuf};

/// Read-only store of nested parameters.
///
/// The document is resolved and converted once, at construction. Every nested mapping
/// of the document becomes a nested [`Record`]; scalars and sequences are kept as
/// they are, including sequences of mappings.
///
/// # Examples
///
/// ```rust,no_run
/// use flowerpower::prelude::*;
///
/// # fn main() -> Result<()> {
/// // conf/params.toml:
/// //   [db]
/// //   host = "x"
/// //   port = 5432
/// let params = ParameterStore::new("conf")?;
///
/// assert_eq!(params.record("db")?.get_str("host")?, "x");
/// assert_eq!(params["db"]["port"].as_i64(), Some(5432));
/// assert_eq!(params.attrs(Some("db"))?, vec!["host", "port"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterStore {
    /// Where the parameters were loaded from; `None` for in-memory stores
    document: Option<ConfigDocument>,
    /// The converted document
    root: Record,
}

impl ParameterStore {
    /// Logical name of the parameter document.
    pub const BASENAME: &'static str = "params";

    /// Loads `<cfg_path>/params.{toml,yaml,yml,json}`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigNotFound` if no candidate exists, or any read or
    /// decoding error of the resolved file.
    pub fn new<P: AsRef<Path>>(cfg_path: P) -> Result<Self> {
        Self::with_basename(cfg_path, Self::BASENAME)
    }

    /// Loads `conf/params.*` relative to the working directory.
    pub fn from_default_dir() -> Result<Self> {
        Self::new(DEFAULT_CONFIG_DIR)
    }

    /// Loads `<cfg_path>/<basename>.{toml,yaml,yml,json}`.
    pub fn with_basename<P: AsRef<Path>>(cfg_path: P, basename: &str) -> Result<Self> {
        let (document, tree) = ConfigFileResolver::new(cfg_path).load(basename)?;
        let root = Record::from_mapping(tree);
        tracing::debug!(
            "Built parameter store from {} with fields {:?}",
            document.path().display(),
            root.attrs()
        );
        Ok(Self {
            document: Some(document),
            root,
        })
    }

    /// Builds a store from an already parsed tree, without touching the filesystem.
    pub fn from_raw(tree: RawMapping) -> Self {
        Self {
            document: None,
            root: Record::from_mapping(tree),
        }
    }

    /// Creates a new parameter store builder.
    pub fn builder() -> ParameterStoreBuilder {
        ParameterStoreBuilder::new()
    }
}

impl ConfigStore for ParameterStore {
    fn root(&self) -> &Record {
        &self.root
    }

    fn document(&self) -> Option<&ConfigDocument> {
        self.document.as_ref()
    }
}

/// Indexes a top-level field by name.
///
/// # Panics
///
/// Panics if the field does not exist. Use [`ConfigStore::get`] for a fallible lookup.
impl Index<&str> for ParameterStore {
    type Output = FieldValue;

    fn index(&self, name: &str) -> &FieldValue {
        &self.root[name]
    }
}

/// Builder for constructing a `ParameterStore`.
///
/// # Examples
///
/// ```rust,no_run
/// use flowerpower::service::ParameterStoreBuilder;
///
/// # fn main() -> flowerpower::domain::Result<()> {
/// let params = ParameterStoreBuilder::new()
///     .cfg_path("/etc/pipeline")
///     .basename("settings")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ParameterStoreBuilder {
    cfg_path: PathBuf,
    basename: String,
}

impl ParameterStoreBuilder {
    /// Creates a new builder for `conf/params.*`.
    pub fn new() -> Self {
        Self {
            cfg_path: PathBuf::from(DEFAULT_CONFIG_DIR),
            basename: ParameterStore::BASENAME.to_string(),
        }
    }

    /// Sets the directory to search.
    pub fn cfg_path<P: AsRef<Path>>(mut self, cfg_path: P) -> Self {
        self.cfg_path = cfg_path.as_ref().to_path_buf();
        self
    }

    /// Sets the logical document name.
    pub fn basename(mut self, basename: impl Into<String>) -> Self {
        self.basename = basename.into();
        self
    }

    /// Loads the store.
    pub fn build(self) -> Result<ParameterStore> {
        ParameterStore::with_basename(self.cfg_path, &self.basename)
    }
}

impl Default for ParameterStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
