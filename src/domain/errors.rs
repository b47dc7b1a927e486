// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur while resolving, decoding and
//! accessing configuration documents. All errors use `thiserror` for proper error
//! handling and conversion.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// Every variant is raised at the point of failure and returned to the caller. Stores
/// never hold partial state: a failed construction produces no store at all. The enum
/// is marked `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use flowerpower::domain::errors::ConfigError;
///
/// fn get_field() -> Result<String, ConfigError> {
///     Err(ConfigError::FieldNotFound {
///         field: "db.host".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// No candidate file exists for the basename in the directory.
    #[error("Could not find {basename} in {}", .directory.display())]
    ConfigNotFound {
        /// The logical file name that was probed (e.g. `params`)
        basename: String,
        /// The directory that was searched
        directory: PathBuf,
    },

    /// The requested field is not present on the record.
    #[error("No such field: {field}")]
    FieldNotFound {
        /// Dotted path of the missing field
        field: String,
    },

    /// A catalog entry does not have exactly the `type` and `path` string fields.
    #[error("Malformed catalog item '{name}': {reason}")]
    MalformedCatalogItem {
        /// The top-level catalog key of the entry
        name: String,
        /// What is wrong with the entry
        reason: String,
    },

    /// The document's format was compiled out of this build.
    #[error("Unsupported format '{format}' for {}", .path.display())]
    UnsupportedFormat {
        /// The document that was found
        path: PathBuf,
        /// The format name (e.g. `yaml`)
        format: String,
    },

    /// Failed to convert a field to the requested type.
    #[error("Field '{key}' is {found}, not {target_type}")]
    TypeConversionError {
        /// The field being converted
        key: String,
        /// The requested type name
        target_type: String,
        /// The kind of value actually stored
        found: String,
    },

    /// The document content could not be decoded.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error occurred while reading a configuration document.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the file that failed
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a `FieldNotFound` for `name` below the dotted `prefix`.
    pub fn field_not_found(prefix: &str, name: &str) -> Self {
        ConfigError::FieldNotFound {
            field: join_key(prefix, name),
        }
    }

    /// Creates a `ParseError` without an underlying source.
    pub fn parse(message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a `MalformedCatalogItem` error.
    pub fn malformed_item(name: &str, reason: impl Into<String>) -> Self {
        ConfigError::MalformedCatalogItem {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Joins a dotted key prefix and a field name.
pub(crate) fn join_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_error() {
        let error = ConfigError::ConfigNotFound {
            basename: "params".to_string(),
            directory: PathBuf::from("conf"),
        };
        assert_eq!(error.to_string(), "Could not find params in conf");
    }

    #[test]
    fn test_field_not_found_error() {
        let error = ConfigError::field_not_found("db", "host");
        assert_eq!(error.to_string(), "No such field: db.host");

        let error = ConfigError::field_not_found("", "db");
        assert_eq!(error.to_string(), "No such field: db");
    }

    #[test]
    fn test_malformed_catalog_item_error() {
        let error = ConfigError::malformed_item("sales", "missing field 'path'");
        assert_eq!(
            error.to_string(),
            "Malformed catalog item 'sales': missing field 'path'"
        );
    }

    #[test]
    fn test_unsupported_format_error() {
        let error = ConfigError::UnsupportedFormat {
            path: PathBuf::from("conf/params.yaml"),
            format: "yaml".to_string(),
        };
        assert!(error.to_string().contains("yaml"));
        assert!(error.to_string().contains("conf/params.yaml"));
    }

    #[test]
    fn test_type_conversion_error() {
        let error = ConfigError::TypeConversionError {
            key: "db.port".to_string(),
            target_type: "string".to_string(),
            found: "integer".to_string(),
        };
        assert_eq!(error.to_string(), "Field 'db.port' is integer, not string");
    }

    #[test]
    fn test_parse_error() {
        let error = ConfigError::parse("Invalid YAML");
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: Invalid YAML"
        );
    }

    #[test]
    fn test_source_error_keeps_io_cause() {
        use std::error::Error as _;

        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::SourceError {
            source_name: "params.yaml".to_string(),
            message: "Failed to read configuration file".to_string(),
            source: Some(Box::new(io_error)),
        };
        assert_eq!(error.source().unwrap().to_string(), "file not found");
    }

    #[test]
    fn test_source_error() {
        let error = ConfigError::SourceError {
            source_name: "params.toml".to_string(),
            message: "Failed to read configuration file".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'params.toml' error: Failed to read configuration file"
        );
    }
}
