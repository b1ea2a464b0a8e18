//! Recursive enumeration of the files under a root directory
//!
//! Every regular file reachable from the root is recorded as a
//! [`RelativePath`]. Traversal failures are collected per subtree and
//! never abort the walk; callers get whatever was found.

mod relative_path;
mod symlinks;

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

pub use relative_path::RelativePath;
pub use symlinks::SymlinkPolicy;

use crate::error::Error;

/// Unique set of paths discovered under one root
pub type FileSet = BTreeSet<RelativePath>;

/// Result of a scan: the files found plus non-fatal traversal errors
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files discovered, relative to the root
    pub files: FileSet,
    /// `Error::DirectoryRead` for every subtree that could not be read
    pub errors: Vec<Error>,
}

/// Path enumerator
#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner {
    policy: SymlinkPolicy,
}

impl Scanner {
    /// Create a scanner with the given symlink policy
    #[must_use]
    pub const fn new(policy: SymlinkPolicy) -> Self {
        Self { policy }
    }

    /// Walk `root` and collect every file beneath it
    #[must_use]
    pub fn scan(&self, root: &Path) -> ScanResult {
        let mut result = ScanResult::default();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.policy.follows())
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    // Following a dangling link fails; list it as the opaque walk does
                    if let Some(relative) =
                        dangling_link(&err).and_then(|path| path.strip_prefix(root).ok())
                    {
                        result.files.insert(RelativePath::from_native(relative));
                        continue;
                    }

                    let err = directory_read_error(err);
                    warn!("{err}");
                    result.errors.push(err);
                    continue;
                }
            };

            if !self.is_listed(&entry) {
                continue;
            }

            if let Ok(relative) = entry.path().strip_prefix(root) {
                result.files.insert(RelativePath::from_native(relative));
            }
        }

        debug!(
            root = %root.display(),
            files = result.files.len(),
            errors = result.errors.len(),
            "scan finished"
        );

        result
    }

    fn is_listed(&self, entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        if file_type.is_file() {
            return true;
        }

        // Followed links report their target's type above
        file_type.is_symlink() && !self.policy.follows() && symlinks::lists_link(entry.path())
    }
}

fn dangling_link(err: &walkdir::Error) -> Option<&Path> {
    if err.depth() == 0 || err.loop_ancestor().is_some() {
        return None;
    }

    let path = err.path()?;
    let is_link = fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink());
    (is_link && fs::metadata(path).is_err()).then_some(path)
}

fn directory_read_error(err: walkdir::Error) -> Error {
    let path = err.path().map(Path::to_path_buf);
    Error::DirectoryRead {
        path,
        source: io::Error::from(err),
    }
}
