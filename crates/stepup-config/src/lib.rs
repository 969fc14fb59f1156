//! Configuration management for stepup
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the binary)
//! 2. Environment variables (STEPUP_* prefix)
//! 3. stepup.local.toml (gitignored, local overrides)
//! 4. stepup.toml (git-tracked, project config)
//! 5. ~/.config/stepup/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use serde::{Deserialize, Serialize};
use stepup_types::Sequence;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Log filter levels accepted in `[logging] level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Main stepup configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepupConfig {
    pub sequence: SequenceConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Sequence used when no values are given on the command line.
    pub default: Sequence,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            default: Sequence::from(vec![0, 1, 2, 3, 4]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl StepupConfig {
    /// Checks values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.separator.is_empty() {
            return Err(ConfigError::ValidationError(
                "output.separator must not be empty".to_string(),
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "unknown logging.level {:?} (expected one of: {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StepupConfig::default();
        assert_eq!(config.sequence.default.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(config.output.separator, " ");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_separator_rejected() {
        let mut config = StepupConfig::default();
        config.output.separator = String::new();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_log_level_checked_case_insensitively() {
        let mut config = StepupConfig::default();

        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());

        config.logging.level = "loud".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("loud"));
    }
}
