// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! This module contains the parsed value tree, the records built from it, the catalog
//! entry shape, the error type, the set of document formats and the store trait. It
//! does not parse documents or touch the filesystem.

pub mod catalog_item;
pub mod errors;
pub mod format;
pub mod raw_value;
pub mod record;
pub mod store;

// Re-export commonly used types
pub use catalog_item::CatalogItem;
pub use errors::{ConfigError, Result};
pub use format::ConfigFormat;
pub use raw_value::{RawMapping, RawValue};
pub use record::{FieldValue, Record};
pub use store::{ConfigDocument, ConfigStore};
