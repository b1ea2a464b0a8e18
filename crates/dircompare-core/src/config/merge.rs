//! Config parsing and field-by-field merging

use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::Config;
use crate::error::{Error, Result};

/// Config merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Parse and merge config files given from lowest to highest precedence
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a file cannot be read or parsed.
    pub fn merge(files: &[&Path]) -> Result<Config> {
        let mut merged = Config::default();

        for path in files {
            let layer = Self::parse(path)?;
            debug!(path = %path.display(), "loaded config");
            merged = Self::overlay(merged, layer);
        }

        Ok(merged)
    }

    /// Parse a single config file
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file cannot be read or is not valid TOML.
    pub fn parse(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| Error::Config {
            path: Some(path.to_path_buf()),
            message: e.message().to_string(),
        })
    }

    /// Fields set in `higher` win over `lower`
    #[must_use]
    pub fn overlay(lower: Config, higher: Config) -> Config {
        Config {
            report_path: higher.report_path.or(lower.report_path),
            follow_symlinks: higher.follow_symlinks.or(lower.follow_symlinks),
            progress: higher.progress.or(lower.progress),
        }
    }
}
