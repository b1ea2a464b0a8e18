//! Configuration validation

use super::types::Config;
use crate::error::{Error, Result};

/// Config validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a merged configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the report path is empty or names a directory.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(report_path) = &config.report_path {
            if report_path.as_os_str().is_empty() {
                return Err(Error::Config {
                    path: None,
                    message: "report-path must not be empty".to_string(),
                });
            }

            if report_path.is_dir() {
                return Err(Error::Config {
                    path: None,
                    message: format!("report-path {} is a directory", report_path.display()),
                });
            }
        }

        Ok(())
    }
}
