// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decoding dispatch from a [`ConfigFormat`] to its parser.

use crate::domain::{ConfigError, ConfigFormat, RawMapping, Result};
#[cfg(any(feature = "toml", feature = "yaml", feature = "json"))]
use crate::ports::ConfigParser;

impl ConfigFormat {
    /// Decodes a whole document into its top-level mapping.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the content is invalid for this format,
    /// is not a mapping at the top level, or the format is compiled out.
    pub fn decode(&self, content: &str) -> Result<RawMapping> {
        match self {
            #[cfg(feature = "toml")]
            ConfigFormat::Toml => crate::adapters::TomlParser::new().parse_document(content),
            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml => crate::adapters::YamlParser::new().parse_document(content),
            #[cfg(feature = "json")]
            ConfigFormat::Json => crate::adapters::JsonParser::new().parse_document(content),
            #[allow(unreachable_patterns)]
            other => Err(ConfigError::parse(format!(
                "{} support is not compiled in",
                other.name()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawValue;

    #[cfg(all(feature = "toml", feature = "yaml", feature = "json"))]
    #[test]
    fn test_decode_each_format() {
        let expected = vec![("a".to_string(), RawValue::from(1))];
        assert!(ConfigFormat::Toml.is_enabled());
        assert_eq!(ConfigFormat::Toml.decode("a = 1").unwrap(), expected);
        assert_eq!(ConfigFormat::Yaml.decode("a: 1").unwrap(), expected);
        assert_eq!(ConfigFormat::Json.decode(r#"{"a": 1}"#).unwrap(), expected);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_decode_does_not_guess() {
        assert!(matches!(
            ConfigFormat::Yaml.decode("a = 1"),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[cfg(not(feature = "json"))]
    #[test]
    fn test_decode_compiled_out_format() {
        let err = ConfigFormat::Json.decode("{}").unwrap_err();
        assert!(err.to_string().contains("json support is not compiled in"));
    }

    #[test]
    fn test_decode_empty_mapping_when_enabled() {
        for format in ConfigFormat::PROBE_ORDER {
            let content = if format == ConfigFormat::Json { "{}" } else { "" };
            if format.is_enabled() {
                assert_eq!(format.decode(content).unwrap(), Vec::<(String, RawValue)>::new());
            } else {
                assert!(format.decode(content).is_err());
            }
        }
    }
}
