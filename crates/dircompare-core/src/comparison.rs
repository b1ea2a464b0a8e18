//! Directory comparison pipeline
//!
//! This module provides read-only analysis of two trees:
//! - Set reconciliation into matched, missing-in-B, and extra-in-B paths
//! - Byte-exact content comparison of matched paths
//! - Progress hooks for presentation layers

mod content;
mod progress;
mod reconcile;


use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

pub use content::{ContentComparator, ContentOutcome, FileOutcome};
pub use progress::{NoProgress, ProgressObserver};
pub use reconcile::{Reconciliation, reconcile};

use crate::error::{Error, Result};
use crate::scanner::{FileSet, RelativePath, Scanner, SymlinkPolicy};

/// Headline numbers of a comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryCounts {
    /// Files found under A
    pub files_in_a: usize,
    /// Files found under B
    pub files_in_b: usize,
    /// Paths present under both roots
    pub matched: usize,
    /// Matched paths with identical content
    pub identical: usize,
    /// Matched paths with different content
    pub different: usize,
    /// Paths under A only
    pub missing_in_b: usize,
    /// Paths under B only
    pub extra_in_b: usize,
    /// Matched paths that could not be compared
    pub errored: usize,
}

/// Full outcome of comparing two trees
///
/// `identical`, `different`, and `errored` partition the matched paths.
#[derive(Debug)]
pub struct ComparisonResult {
    /// Reference root as given
    pub root_a: PathBuf,
    /// Comparison root as given
    pub root_b: PathBuf,
    /// Number of files found under A
    pub files_in_a: usize,
    /// Number of files found under B
    pub files_in_b: usize,
    /// Matched paths with identical content
    pub identical: FileSet,
    /// Matched paths with different content
    pub different: FileSet,
    /// Paths under A only
    pub missing_in_b: FileSet,
    /// Paths under B only
    pub extra_in_b: FileSet,
    /// Matched paths that could not be compared, with the reason
    pub errored: BTreeMap<RelativePath, String>,
    /// Subtrees that could not be traversed on either side
    pub scan_errors: Vec<Error>,
}

impl ComparisonResult {
    /// Number of paths present under both roots
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.identical.len() + self.different.len() + self.errored.len()
    }

    /// Whether anything differs between the trees
    #[must_use]
    pub fn has_differences(&self) -> bool {
        !(self.different.is_empty() && self.missing_in_b.is_empty() && self.extra_in_b.is_empty())
    }

    /// Summary numbers for reporting
    #[must_use]
    pub fn counts(&self) -> SummaryCounts {
        SummaryCounts {
            files_in_a: self.files_in_a,
            files_in_b: self.files_in_b,
            matched: self.matched_count(),
            identical: self.identical.len(),
            different: self.different.len(),
            missing_in_b: self.missing_in_b.len(),
            extra_in_b: self.extra_in_b.len(),
            errored: self.errored.len(),
        }
    }
}

/// Runs enumeration, reconciliation, and content comparison
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryComparator {
    scanner: Scanner,
}

impl DirectoryComparator {
    /// Create a comparator with the given symlink policy
    #[must_use]
    pub const fn new(policy: SymlinkPolicy) -> Self {
        Self {
            scanner: Scanner::new(policy),
        }
    }

    /// Check that `root` is an existing, listable directory
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRoot` otherwise.
    pub fn validate_root(root: &Path) -> Result<()> {
        let invalid = |reason: String| Error::InvalidRoot {
            path: root.to_path_buf(),
            reason,
        };

        let metadata = fs::metadata(root).map_err(|e| invalid(e.to_string()))?;
        if !metadata.is_dir() {
            return Err(invalid("not a directory".to_string()));
        }
        fs::read_dir(root).map_err(|e| invalid(format!("cannot be read: {e}")))?;

        Ok(())
    }

    /// Compare two trees
    ///
    /// Per-subtree and per-file failures are recorded in the result.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRoot` before any work if either root is unusable.
    pub fn compare(
        &self,
        root_a: &Path,
        root_b: &Path,
        observer: &mut dyn ProgressObserver,
    ) -> Result<ComparisonResult> {
        Self::validate_root(root_a)?;
        Self::validate_root(root_b)?;

        let scan_a = self.scanner.scan(root_a);
        let scan_b = self.scanner.scan(root_b);

        let Reconciliation {
            matched,
            missing_in_b,
            extra_in_b,
        } = reconcile(&scan_a.files, &scan_b.files);

        let ContentOutcome {
            identical,
            different,
            errored,
        } = ContentComparator::compare(root_a, root_b, &matched, observer);

        let mut scan_errors = scan_a.errors;
        scan_errors.extend(scan_b.errors);

        let result = ComparisonResult {
            root_a: root_a.to_path_buf(),
            root_b: root_b.to_path_buf(),
            files_in_a: scan_a.files.len(),
            files_in_b: scan_b.files.len(),
            identical,
            different,
            missing_in_b,
            extra_in_b,
            errored,
            scan_errors,
        };

        info!(
            matched = result.matched_count(),
            identical = result.identical.len(),
            different = result.different.len(),
            missing_in_b = result.missing_in_b.len(),
            extra_in_b = result.extra_in_b.len(),
            errored = result.errored.len(),
            "comparison finished"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_root_rejects_missing() {
        let tmp = TempDir::new().unwrap();
        let err = DirectoryComparator::validate_root(&tmp.path().join("nope")).unwrap_err();

        assert!(matches!(err, Error::InvalidRoot { .. }));
    }

    #[test]
    fn test_validate_root_rejects_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        let err = DirectoryComparator::validate_root(&file).unwrap_err();

        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_compare_fails_before_work_on_invalid_root() {
        let tmp = TempDir::new().unwrap();
        let result = DirectoryComparator::default().compare(
            tmp.path(),
            &tmp.path().join("missing"),
            &mut NoProgress,
        );

        assert!(matches!(result, Err(Error::InvalidRoot { .. })));
    }

    #[test]
    fn test_summary_counts() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a");
        let b = tmp.path().join("b");
        fs::create_dir_all(&a).unwrap();
        fs::create_dir_all(&b).unwrap();
        fs::write(a.join("same"), "s").unwrap();
        fs::write(b.join("same"), "s").unwrap();
        fs::write(a.join("changed"), "1").unwrap();
        fs::write(b.join("changed"), "2").unwrap();
        fs::write(a.join("gone"), "g").unwrap();

        let result = DirectoryComparator::default()
            .compare(&a, &b, &mut NoProgress)
            .unwrap();

        assert_eq!(
            result.counts(),
            SummaryCounts {
                files_in_a: 3,
                files_in_b: 2,
                matched: 2,
                identical: 1,
                different: 1,
                missing_in_b: 1,
                extra_in_b: 0,
                errored: 0,
            }
        );
        assert!(result.has_differences());
    }
}
