//! Path utilities and XDG directory discovery

use crate::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILE: &str = "stepup.toml";
const LOCAL_CONFIG_FILE: &str = "stepup.local.toml";

/// XDG-compliant paths for stepup
pub struct Paths {
    project_dirs: Option<ProjectDirs>,
}

impl Paths {
    pub fn new() -> Self {
        Self {
            project_dirs: ProjectDirs::from("rs", "stepup", "stepup"),
        }
    }

    /// Get user config directory (~/.config/stepup/)
    pub fn user_config_dir(&self) -> Result<PathBuf, ConfigError> {
        self.project_dirs
            .as_ref()
            .map(|p| p.config_dir().to_path_buf())
            .ok_or_else(|| {
                ConfigError::XdgError("Failed to determine user config directory".to_string())
            })
    }

    /// Get user config file path (~/.config/stepup/config.toml)
    pub fn user_config_file(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.user_config_dir()?.join("config.toml"))
    }

    pub fn project_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(PROJECT_CONFIG_FILE)
    }

    pub fn local_config_file(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(LOCAL_CONFIG_FILE)
    }

    /// Check if a project has a stepup.toml
    pub fn is_initialized(project_dir: impl AsRef<Path>) -> bool {
        Self::project_config_file(project_dir).exists()
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_xdg_paths() {
        let paths = Paths::new();

        // May be unavailable on exotic platforms, but must not panic
        if let Ok(config_file) = paths.user_config_file() {
            assert!(config_file.to_string_lossy().contains("stepup"));
            assert!(config_file.ends_with("config.toml"));
        }
    }

    #[test]
    fn test_project_paths() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path();

        let config_file = Paths::project_config_file(project_dir);
        assert_eq!(config_file, project_dir.join("stepup.toml"));

        let local_file = Paths::local_config_file(project_dir);
        assert_eq!(local_file, project_dir.join("stepup.local.toml"));

        assert!(!Paths::is_initialized(project_dir));

        std::fs::write(&config_file, "[output]\nseparator = \",\"\n").unwrap();
        assert!(Paths::is_initialized(project_dir));
    }
}
