// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parameter and catalog loading for transformer plugins.
//!
//! This crate reads parameter and catalog definitions from TOML, YAML or JSON files,
//! converts nested mappings into attribute-addressable records, and hands them to
//! user-defined transformers.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`RawValue`, `Record`, `CatalogItem`, errors) and the
//!   `ConfigStore` access surface
//! - **Ports**: Trait definitions at the seams (`ConfigParser`, `Transformer`)
//! - **Adapters**: Format parsers and the on-disk file resolver
//! - **Service**: The `ParameterStore` and `CatalogStore`
//!
//! # File Resolution
//!
//! A document such as `params` is looked up as `<dir>/params.toml`, `.yaml`, `.yml`
//! and `.json`, in that order. The first file that exists is the only one read. If
//! none exists, construction fails with `ConfigError::ConfigNotFound`.
//!
//! # Feature Flags
//!
//! - `toml`: Enable TOML documents (default)
//! - `yaml`: Enable YAML documents (default)
//! - `json`: Enable JSON documents (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use flowerpower::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let params = ParameterStore::new("conf")?;
//! let catalog = CatalogStore::new("conf")?;
//!
//! for name in params.attrs(None)? {
//!     println!("{} = {}", name, params.asdict(Some(name))?);
//! }
//! for (name, item) in catalog.iter() {
//!     println!("{}: {} at {}", name, item.kind, item.path);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{ConfigFileResolver, DEFAULT_CONFIG_DIR};
    pub use crate::domain::{
        CatalogItem, ConfigDocument, ConfigError, ConfigFormat, ConfigStore, FieldValue, RawMapping,
        RawValue, Record, Result,
    };
    pub use crate::ports::{ConfigParser, Transformer};
    pub use crate::service::{CatalogStore, ParameterStore, ParameterStoreBuilder};

    // Re-export parsers based on feature flags
    #[cfg(feature = "json")]
    pub use crate::adapters::JsonParser;
    #[cfg(feature = "toml")]
    pub use crate::adapters::TomlParser;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
