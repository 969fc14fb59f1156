//! Configuration loader with multi-source merging

use crate::{Paths, StepupConfig};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Prefix for environment variable overrides (`STEPUP_OUTPUT_SEPARATOR`, ...).
const ENV_PREFIX: &str = "STEPUP";

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<StepupConfig> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = StepupConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/stepup/config.toml)
        let paths = Paths::new();
        if let Ok(user_config_file) = paths.user_config_file() {
            builder = add_toml_file(builder, user_config_file);
        }

        // 3. Project config (stepup.toml)
        builder = add_toml_file(builder, Paths::project_config_file(&self.project_dir));

        // 4. Local config (stepup.local.toml, gitignored)
        builder = add_toml_file(builder, Paths::local_config_file(&self.project_dir));

        // 5. Environment variables (STEPUP_*)
        //
        // Values stay strings; deserialization converts them. `try_parsing`
        // would turn a one-element list like "7" into a bare integer.
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("_")
                .list_separator(",")
                .with_list_parse_key("sequence.default"),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let stepup_config: StepupConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        stepup_config.validate()?;

        Ok(stepup_config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn add_toml_file(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    path: PathBuf,
) -> config::ConfigBuilder<config::builder::DefaultState> {
    if !path.exists() {
        return builder;
    }

    tracing::debug!(path = %path.display(), "merging config file");
    builder.add_source(
        config::File::from(path)
            .required(false)
            .format(config::FileFormat::Toml),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = ConfigLoader::new()
            .with_project_dir(temp_dir.path())
            .load()
            .expect("Failed to load config");

        assert_eq!(config.sequence.default.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(config.output.separator, " ");
    }

    #[test]
    fn test_load_project_config() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        let config_content = r#"
[sequence]
default = [10, 20, 30]

[output]
separator = ", "

[logging]
level = "debug"
"#;
        fs::write(project_dir.join("stepup.toml"), config_content)
            .expect("Failed to write config");

        let config = ConfigLoader::new()
            .with_project_dir(project_dir)
            .load()
            .expect("Failed to load config");

        assert_eq!(config.sequence.default.as_slice(), &[10, 20, 30]);
        assert_eq!(config.output.separator, ", ");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_local_overrides() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("stepup.toml"),
            r#"
[output]
separator = ","
"#,
        )
        .expect("Failed to write project config");

        fs::write(
            project_dir.join("stepup.local.toml"),
            r#"
[output]
separator = ";"
"#,
        )
        .expect("Failed to write local config");

        let config = ConfigLoader::new()
            .with_project_dir(project_dir)
            .load()
            .expect("Failed to load config");

        // Local config should override project config
        assert_eq!(config.output.separator, ";");
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        fs::write(
            project_dir.join("stepup.toml"),
            r#"
[logging]
level = "chatty"
"#,
        )
        .expect("Failed to write config");

        let result = ConfigLoader::new().with_project_dir(project_dir).load();
        assert!(result.is_err());
    }

    #[test]
    fn test_serialized_config_loads_back() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        let mut written = StepupConfig::default();
        written.sequence.default = vec![-1, 0, 1].into();
        written.output.separator = "|".to_string();

        let toml_str = toml::to_string_pretty(&written).expect("Failed to serialize");
        fs::write(project_dir.join("stepup.toml"), toml_str).expect("Failed to write config");

        let loaded = ConfigLoader::new()
            .with_project_dir(project_dir)
            .load()
            .expect("Failed to load config");

        assert_eq!(loaded, written);
    }

    // Environment overrides are covered by the binary tests in
    // stepup-cli/tests/argument_parsing.rs, which set them on the child
    // process instead of mutating this process's environment.
}
