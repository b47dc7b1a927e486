// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which provides an interface for
//! decoding configuration files in different formats (TOML, YAML, JSON) into the
//! format-agnostic [`RawValue`] tree.

use crate::domain::{ConfigError, RawMapping, RawValue, Result};

/// A trait for parsing configuration files.
///
/// Parsers turn the raw text of a document into a [`RawValue`] tree, keeping mapping
/// keys in document order. Unlike a flattening parser, nesting is preserved: a
/// document like
///
/// ```yaml
/// database:
///   host: localhost
///   port: 5432
/// ```
///
/// decodes into a mapping with one `database` key whose value is itself a mapping.
///
/// # Examples
///
/// ```rust
/// use flowerpower::ports::ConfigParser;
/// use flowerpower::domain::{RawValue, Result};
///
/// struct KeyValueParser;
///
/// impl ConfigParser for KeyValueParser {
///     fn parse(&self, content: &str) -> Result<RawValue> {
///         Ok(RawValue::mapping(content.lines().filter_map(|line| {
///             line.split_once('=').map(|(k, v)| (k.trim(), RawValue::from(v.trim())))
///         })))
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["kv"]
///     }
/// }
///
/// let tree = KeyValueParser.parse_document("host = x").unwrap();
/// assert_eq!(tree, vec![("host".to_string(), RawValue::from("x"))]);
/// ```
pub trait ConfigParser {
    /// Parses document content into a raw value tree.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw content of the configuration file
    ///
    /// # Returns
    ///
    /// * `Ok(RawValue)` - The decoded document
    /// * `Err(ConfigError::ParseError)` - The content is not valid for this format
    fn parse(&self, content: &str) -> Result<RawValue>;

    /// Returns the file extensions supported by this parser, without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Parses a whole document, requiring a mapping at the top level.
    ///
    /// An empty document (null at the top level) decodes to an empty mapping.
    fn parse_document(&self, content: &str) -> Result<RawMapping> {
        match self.parse(content)? {
            RawValue::Mapping(entries) => Ok(entries),
            RawValue::Null => Ok(RawMapping::new()),
            other => Err(ConfigError::parse(format!(
                "expected a mapping at the top level, found {}",
                other.kind()
            ))),
        }
    }
}
