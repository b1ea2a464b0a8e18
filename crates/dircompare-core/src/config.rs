//! Configuration file parsing, merging, and validation
//!
//! This module handles:
//! - Config file discovery from the CLI flag, the project tree, and the user config directory
//! - TOML parsing with serde
//! - Config merging with precedence rules
//! - Validation and error reporting

mod discovery;
mod merge;
mod types;
mod validation;

use std::path::Path;

pub use discovery::{ConfigDiscovery, ConfigFiles, PROJECT_CONFIG_FILE};
pub use merge::ConfigMerger;
pub use types::Config;
pub use validation::ConfigValidator;

use crate::error::Result;

/// Configuration manager that coordinates discovery, parsing, merging, and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load and merge configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if config files are invalid or cannot be read.
    pub fn load(cli_config_path: Option<&Path>) -> Result<Config> {
        let config_files = ConfigDiscovery::discover(cli_config_path);
        Self::load_files(&config_files)
    }

    /// Merge and validate an already discovered set of files
    ///
    /// # Errors
    ///
    /// Returns an error if config files are invalid or cannot be read.
    pub fn load_files(config_files: &ConfigFiles) -> Result<Config> {
        let merged = ConfigMerger::merge(&config_files.in_merge_order())?;
        ConfigValidator::validate(&merged)?;
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_load_files_cli_overrides_project() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join(PROJECT_CONFIG_FILE);
        let cli = tmp.path().join("cli.toml");
        fs::write(&project, "report-path = \"project.txt\"\nprogress = false\n").unwrap();
        fs::write(&cli, "report-path = \"cli.txt\"\n").unwrap();

        let config = ConfigManager::load_files(&ConfigFiles {
            cli: Some(cli),
            project: Some(project),
            global: None,
        })
        .unwrap();

        assert_eq!(config.report_path(), PathBuf::from("cli.txt"));
        assert!(!config.progress());
    }

    #[test]
    fn test_load_nonexistent_cli_config_fails() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");

        assert!(ConfigManager::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_load_files_validates() {
        let tmp = TempDir::new().unwrap();
        let cli = tmp.path().join("cli.toml");
        fs::write(&cli, "report-path = \"\"\n").unwrap();

        let result = ConfigManager::load_files(&ConfigFiles {
            cli: Some(cli),
            ..ConfigFiles::default()
        });

        assert!(result.is_err());
    }
}
