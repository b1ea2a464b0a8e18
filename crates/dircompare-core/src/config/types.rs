//! Configuration types and structures

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::report::DEFAULT_REPORT_FILE;
use crate::scanner::SymlinkPolicy;

/// Settings read from a config file; unset fields fall through to defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// Where the report is written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<PathBuf>,

    /// Follow symlinks while walking trees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_symlinks: Option<bool>,

    /// Show comparison progress on the terminal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<bool>,
}

impl Config {
    /// Report destination, falling back to `comparison_report.txt`
    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        self.report_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_FILE))
    }

    /// Symlink policy for traversal
    #[must_use]
    pub fn symlink_policy(&self) -> SymlinkPolicy {
        SymlinkPolicy::from_follow(self.follow_symlinks.unwrap_or(false))
    }

    /// Whether progress output is enabled
    #[must_use]
    pub fn progress(&self) -> bool {
        self.progress.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.report_path(), PathBuf::from("comparison_report.txt"));
        assert_eq!(config.symlink_policy(), SymlinkPolicy::Opaque);
        assert!(config.progress());
    }

    #[test]
    fn test_config_parse_kebab_case() {
        let config: Config = toml::from_str(
            r#"
report-path = "out/report.txt"
follow-symlinks = true
progress = false
"#,
        )
        .unwrap();

        assert_eq!(config.report_path(), PathBuf::from("out/report.txt"));
        assert_eq!(config.symlink_policy(), SymlinkPolicy::Follow);
        assert!(!config.progress());
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        let parsed: Result<Config, _> = toml::from_str("colour = true");

        assert!(parsed.is_err());
    }
}
