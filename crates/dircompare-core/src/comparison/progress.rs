//! Progress reporting hooks for the content comparison

use super::content::FileOutcome;
use crate::scanner::RelativePath;

/// Observer notified while matched files are compared
///
/// Observers only see events; they cannot influence the result.
pub trait ProgressObserver {
    /// Comparison of `total` matched files is about to start
    fn on_start(&mut self, _total: usize) {}

    /// One matched file has been classified
    fn on_file(&mut self, _path: &RelativePath, _outcome: &FileOutcome) {}

    /// All matched files have been processed
    fn on_finish(&mut self) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {}
