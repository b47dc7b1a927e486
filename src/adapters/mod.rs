// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing file format and filesystem implementations.
//!
//! This module contains the concrete document parsers implementing the
//! `ConfigParser` port, the decoding dispatch over `ConfigFormat`, and the resolver
//! that locates documents on disk.

pub mod format;
#[cfg(feature = "json")]
pub mod json_file;
pub mod resolver;
#[cfg(feature = "toml")]
pub mod toml_file;
#[cfg(feature = "yaml")]
pub mod yaml_file;

pub use crate::domain::ConfigFormat;
pub use resolver::{ConfigFileResolver, DEFAULT_CONFIG_DIR};

// Re-export parsers based on feature flags
#[cfg(feature = "json")]
pub use json_file::JsonParser;
#[cfg(feature = "toml")]
pub use toml_file::TomlParser;
#[cfg(feature = "yaml")]
pub use yaml_file::YamlParser;
