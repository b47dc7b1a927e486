// SPDX-License-Identifier: MIT OR Apache-2.0

//! The closed set of supported document formats.
//!
//! Each format owns its file extensions. The probe order over all of them is derived
//! from [`ConfigFormat::PROBE_ORDER`].

use std::fmt;

/// A supported configuration document format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// TOML (`.toml`)
    Toml,
    /// YAML (`.yaml`, `.yml`)
    Yaml,
    /// JSON (`.json`)
    Json,
}

impl ConfigFormat {
    /// Formats in the order their files are probed.
    pub const PROBE_ORDER: [ConfigFormat; 3] =
        [ConfigFormat::Toml, ConfigFormat::Yaml, ConfigFormat::Json];

    /// Returns the lower-case format name.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Json => "json",
        }
    }

    /// Returns the file extensions of this format, preferred first.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ConfigFormat::Toml => &["toml"],
            ConfigFormat::Yaml => &["yaml", "yml"],
            ConfigFormat::Json => &["json"],
        }
    }

    /// Iterates over every `(extension, format)` pair in probe order.
    pub fn candidates() -> impl Iterator<Item = (&'static str, ConfigFormat)> {
        Self::PROBE_ORDER.into_iter().flat_map(|format| {
            format
                .extensions()
                .iter()
                .map(move |extension| (*extension, format))
        })
    }

    /// Maps a file extension (without the dot) to its format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::candidates()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, format)| format)
    }

    /// Returns `true` if support for this format is compiled in.
    pub fn is_enabled(&self) -> bool {
        match self {
            ConfigFormat::Toml => cfg!(feature = "toml"),
            ConfigFormat::Yaml => cfg!(feature = "yaml"),
            ConfigFormat::Json => cfg!(feature = "json"),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_order() {
        let extensions: Vec<&str> = ConfigFormat::candidates().map(|(ext, _)| ext).collect();
        assert_eq!(extensions, vec!["toml", "yaml", "yml", "json"]);
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(ConfigFormat::from_extension("yml"), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_extension("json"), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_extension("ini"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfigFormat::Toml.to_string(), "toml");
    }
}
