//! Configuration file discovery from multiple locations

use std::path::{Path, PathBuf};

/// Name of the project config file searched in the working directory and its parents
pub const PROJECT_CONFIG_FILE: &str = ".dircompare.toml";

/// Configuration file locations in order of precedence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigFiles {
    /// Config from CLI flag (highest precedence)
    pub cli: Option<PathBuf>,
    /// Project config (.dircompare.toml)
    pub project: Option<PathBuf>,
    /// Global config in the user config directory
    pub global: Option<PathBuf>,
}

impl ConfigFiles {
    /// Existing files from lowest to highest precedence
    #[must_use]
    pub fn in_merge_order(&self) -> Vec<&Path> {
        [&self.global, &self.project, &self.cli]
            .into_iter()
            .filter_map(Option::as_deref)
            .collect()
    }
}

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover all available configuration files
    ///
    /// An explicit path is returned even if it does not exist so that
    /// loading can report it.
    #[must_use]
    pub fn discover(cli_path: Option<&Path>) -> ConfigFiles {
        let start = std::env::current_dir().ok();

        ConfigFiles {
            cli: cli_path.map(Path::to_path_buf),
            project: start.and_then(|dir| Self::find_upwards(&dir, PROJECT_CONFIG_FILE)),
            global: Self::find_global_config(),
        }
    }

    /// Find a file in `start` or one of its parent directories
    #[must_use]
    pub fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }

            // Move to parent directory
            if !current.pop() {
                return None;
            }
        }
    }

    /// Find global config in the platform config directory
    fn find_global_config() -> Option<PathBuf> {
        let config_dir = dirs::config_dir()?;
        let global_config = config_dir.join("dircompare").join("config.toml");

        global_config.is_file().then_some(global_config)
    }
}
