// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file resolution.
//!
//! A logical document such as `params` is looked up in a directory by trying each
//! supported extension in a fixed order. Exactly one file is read: the first match.

use crate::domain::{ConfigDocument, ConfigError, ConfigFormat, RawMapping, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory searched when no other is given.
pub const DEFAULT_CONFIG_DIR: &str = "conf";

/// Maximum allowed file size for configuration documents (10MB)
const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Finds and decodes configuration documents in one directory.
///
/// # Examples
///
/// ```rust,no_run
/// use flowerpower::adapters::ConfigFileResolver;
///
/// let resolver = ConfigFileResolver::new("conf");
/// // Reads the first of conf/params.toml, .yaml, .yml, .json that exists
/// let (document, tree) = resolver.load("params").unwrap();
/// println!("{} has {} top-level keys", document.path().display(), tree.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigFileResolver {
    directory: PathBuf,
}

impl ConfigFileResolver {
    /// Creates a resolver for the given directory.
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// Returns the directory being searched.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Finds the first existing `<basename>.<ext>` without reading it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigNotFound` if no candidate file exists.
    pub fn locate(&self, basename: &str) -> Result<(PathBuf, ConfigFormat)> {
        for (extension, format) in ConfigFormat::candidates() {
            let candidate = self.directory.join(format!("{}.{}", basename, extension));
            tracing::debug!("Probing configuration candidate {}", candidate.display());
            if candidate.is_file() {
                return Ok((candidate, format));
            }
        }

        Err(ConfigError::ConfigNotFound {
            basename: basename.to_string(),
            directory: self.directory.clone(),
        })
    }

    /// Finds, reads and decodes `<basename>.<ext>`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::ConfigNotFound` if no candidate file exists
    /// - `ConfigError::UnsupportedFormat` if the file's format is compiled out
    /// - `ConfigError::SourceError` if the file is too large or cannot be read
    /// - `ConfigError::ParseError` if the content does not decode
    pub fn load(&self, basename: &str) -> Result<(ConfigDocument, RawMapping)> {
        let (path, format) = self.locate(basename)?;

        if !format.is_enabled() {
            return Err(ConfigError::UnsupportedFormat {
                path,
                format: format.name().to_string(),
            });
        }

        let content = read_document(&path)?;
        let tree = format.decode(&content).map_err(|e| match e {
            ConfigError::ParseError { message, source } => ConfigError::ParseError {
                message: format!("{}: {}", display_name(&path), message),
                source,
            },
            other => other,
        })?;

        tracing::debug!(
            "Loaded {} ({}) with {} top-level keys",
            path.display(),
            format,
            tree.len()
        );

        Ok((ConfigDocument::new(path, format), tree))
    }
}

impl Default for ConfigFileResolver {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_DIR)
    }
}

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

fn read_document(path: &Path) -> Result<String> {
    // Size is checked before anything is read
    let metadata = fs::metadata(path).map_err(|e| ConfigError::SourceError {
        source_name: display_name(path).to_string(),
        message: "Failed to read file metadata".to_string(),
        source: Some(Box::new(e)),
    })?;

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::SourceError {
            source_name: display_name(path).to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            ),
            source: None,
        });
    }

    fs::read_to_string(path).map_err(|e| ConfigError::SourceError {
        source_name: display_name(path).to_string(),
        message: "Failed to read configuration file".to_string(),
        source: Some(Box::new(e)),
    })
}
