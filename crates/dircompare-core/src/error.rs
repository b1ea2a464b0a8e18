use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using the crate [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while comparing directory trees
///
/// `DirectoryRead` and `FileCompare` describe per-item failures that never
/// abort a run. The remaining variants are fatal and propagate to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// A root path is missing, not a directory, or cannot be listed
    #[error("Not a valid directory: {}: {reason}", .path.display())]
    InvalidRoot {
        /// Root path as given by the caller
        path: PathBuf,
        /// Why the root was rejected
        reason: String,
    },

    /// Part of a tree could not be traversed
    #[error("Failed to read directory {}: {source}", display_optional(.path.as_deref()))]
    DirectoryRead {
        /// Path that failed, when the walker knows it
        path: Option<PathBuf>,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// A matched file could not be opened or read on one side
    #[error("Failed to compare {path}: {reason}")]
    FileCompare {
        /// Relative path of the matched file
        path: String,
        /// Which side failed and why
        reason: String,
    },

    /// The report could not be written to its destination
    #[error("Failed to write report to {}: {source}", .path.display())]
    ReportWrite {
        /// Destination of the report
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// A configuration file is unreadable or invalid
    #[error("Invalid configuration{}: {message}", config_location(.path.as_deref()))]
    Config {
        /// Offending config file, if the problem is tied to one
        path: Option<PathBuf>,
        /// Description of the problem
        message: String,
    },
}

fn display_optional(path: Option<&Path>) -> String {
    path.map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string())
}

fn config_location(path: Option<&Path>) -> String {
    path.map_or_else(String::new, |p| format!(" in {}", p.display()))
}
