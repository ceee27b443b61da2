//! TOML configuration for processing pipelines.
//!
//! Option sets can live in a file instead of being assembled in code:
//!
//! ```toml
//! # lumispec.toml
//! [join]
//! r = 50
//! scale = true
//! average = false
//! kind = "slinear"
//!
//! [conversion]
//! jacobian = true
//! laser_wavelength = 244.0
//! ```
//!
//! Every section and field is optional and falls back to its default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::conversion::ConversionOptions;
use crate::join::JoinOptions;

/// Root configuration structure for lumispec.toml files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Spectrum joining settings.
    #[serde(default)]
    pub join: JoinOptions,

    /// Axis conversion settings.
    #[serde(default)]
    pub conversion: ConversionOptions,
}

impl ProcessingConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize configuration")
    }
}

/// Initialise `env_logger`: 0 → warn, 1 → info, otherwise debug.
///
/// `RUST_LOG` takes precedence. Repeated calls are ignored.
pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolate::InterpolationKind;
    use std::io::Write;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [join]
            r = 20
            scale = false
            average = true
            kind = "nearest"

            [conversion]
            jacobian = false
            laser_wavelength = 244.0
        "#;

        let config = ProcessingConfig::from_str(toml).unwrap();
        assert_eq!(config.join.r, 20);
        assert!(!config.join.scale);
        assert!(config.join.average);
        assert_eq!(config.join.kind, InterpolationKind::Nearest);
        assert!(!config.conversion.jacobian);
        assert_eq!(config.conversion.laser_wavelength, Some(244.0));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [join]
            r = 10
        "#;

        let config = ProcessingConfig::from_str(toml).unwrap();
        assert_eq!(config.join.r, 10);
        assert!(config.join.scale);
        assert!(!config.join.average);
        assert_eq!(config.join.kind, InterpolationKind::Slinear);
        assert_eq!(config.conversion, ConversionOptions::default());
    }

    #[test]
    fn test_empty_config() {
        let config = ProcessingConfig::from_str("").unwrap();
        assert_eq!(config, ProcessingConfig::default());
        assert_eq!(config.join.r, 50);
    }

    #[test]
    fn test_invalid_config() {
        assert!(ProcessingConfig::from_str("[join]\nkind = \"cubic\"").is_err());
        assert!(ProcessingConfig::from_str("[join]\nr = -1").is_err());
    }

    #[test]
    fn test_from_file_and_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[conversion]\nlaser_wavelength = 532.0").unwrap();

        let config = ProcessingConfig::from_file(file.path()).unwrap();
        assert_eq!(config.conversion.laser_wavelength, Some(532.0));

        let rendered = config.to_toml().unwrap();
        assert_eq!(ProcessingConfig::from_str(&rendered).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = ProcessingConfig::from_file(Path::new("/nonexistent/lumispec.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(0);
        init_logging(2);
    }
}
