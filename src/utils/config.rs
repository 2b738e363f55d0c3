//! Guidance engine configuration

use crate::core::types::GeoPoint;
use crate::sensors::FixOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Engine configuration: the fixed target plus acquisition hints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceConfig {
    /// The stationary target coordinate the indicator points toward
    pub target: GeoPoint,
    /// Request the platform's high-accuracy positioning mode
    pub high_accuracy: bool,
    /// Maximum time the platform may spend on the first fix (milliseconds)
    pub fix_timeout_ms: u32,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            target: GeoPoint::new(37.551447, 127.047016),
            high_accuracy: true,
            fix_timeout_ms: 10_000,
        }
    }
}

impl GuidanceConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            details: e.to_string(),
        })?;

        let config: GuidanceConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                details: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        self.validate()?;

        let content = serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            details: e.to_string(),
        })?;

        fs::write(path, content).map_err(|e| ConfigError::Io {
            details: e.to_string(),
        })
    }

    /// Check the target coordinate and acquisition hints for sanity
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.target.latitude.is_finite() || self.target.latitude.abs() > 90.0 {
            return Err(ConfigError::Invalid {
                parameter: "target.latitude".to_string(),
                value: self.target.latitude.to_string(),
            });
        }

        if !self.target.longitude.is_finite() || self.target.longitude.abs() > 180.0 {
            return Err(ConfigError::Invalid {
                parameter: "target.longitude".to_string(),
                value: self.target.longitude.to_string(),
            });
        }

        if self.fix_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                parameter: "fix_timeout_ms".to_string(),
                value: self.fix_timeout_ms.to_string(),
            });
        }

        Ok(())
    }

    /// Acquisition options derived from this configuration
    pub fn fix_options(&self) -> FixOptions {
        FixOptions {
            high_accuracy: self.high_accuracy,
            timeout_ms: self.fix_timeout_ms,
        }
    }
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// File could not be read or written
    Io { details: String },
    /// JSON content could not be parsed or serialized
    Parse { details: String },
    /// A parameter value is out of range
    Invalid { parameter: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { details } => write!(f, "config I/O error: {}", details),
            ConfigError::Parse { details } => write!(f, "config parse error: {}", details),
            ConfigError::Invalid { parameter, value } => {
                write!(f, "invalid config: {} = {}", parameter, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GuidanceConfig::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_target_is_rejected() {
        let mut config = GuidanceConfig::default();
        config.target.latitude = 123.0;

        match config.validate() {
            Err(ConfigError::Invalid { parameter, .. }) => {
                assert_eq!(parameter, "target.latitude");
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let config = GuidanceConfig {
            target: GeoPoint::new(-33.8688, 151.2093),
            high_accuracy: false,
            fix_timeout_ms: 5_000,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: GuidanceConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn missing_file_reports_io_error() {
        let result = GuidanceConfig::load_from_file("/nonexistent/guidance.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
