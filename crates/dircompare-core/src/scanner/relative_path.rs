//! Root-relative file paths used as identity keys across two trees

use std::cmp::Ordering;
use std::ffi::OsString;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Component, Path, PathBuf};

/// A file location relative to its root directory
///
/// Identity is the native name components joined with `/`, so the same
/// file found under two different roots compares equal on every platform
/// and distinct non-UTF-8 names stay distinct. A lossy UTF-8 rendering is
/// kept for display, and the native relative path to re-open the file.
#[derive(Debug, Clone)]
pub struct RelativePath {
    key: OsString,
    display: String,
    native: PathBuf,
}

impl RelativePath {
    /// Build from a path already stripped of its root
    #[must_use]
    pub fn from_native(relative: &Path) -> Self {
        let mut key = OsString::new();
        for part in relative.components().filter_map(|component| match component {
            Component::Normal(part) => Some(part),
            _ => None,
        }) {
            if !key.is_empty() {
                key.push("/");
            }
            key.push(part);
        }

        Self {
            display: key.to_string_lossy().into_owned(),
            key,
            native: relative.to_path_buf(),
        }
    }

    /// `/`-separated display form; non-UTF-8 bytes are replaced
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Native relative path
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.native
    }

    /// Absolute location of this file under `root`
    #[must_use]
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(&self.native)
    }
}

impl From<&str> for RelativePath {
    fn from(value: &str) -> Self {
        Self::from_native(Path::new(value))
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl PartialEq for RelativePath {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for RelativePath {}

impl PartialOrd for RelativePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RelativePath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl Hash for RelativePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}
