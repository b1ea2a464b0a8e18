//! Symlink handling during traversal

use std::fs;
use std::path::Path;

/// How symbolic links are treated while walking a tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SymlinkPolicy {
    /// Never descend through links; linked directories are skipped,
    /// linked files (and broken links) are listed as files
    #[default]
    Opaque,
    /// Follow links; cycles surface as directory read errors and dangling
    /// links are listed as files, as with `Opaque`
    Follow,
}

impl SymlinkPolicy {
    /// Policy for a boolean "follow symlinks" setting
    #[must_use]
    pub const fn from_follow(follow: bool) -> Self {
        if follow { Self::Follow } else { Self::Opaque }
    }

    /// Whether the walker should follow links
    #[must_use]
    pub const fn follows(self) -> bool {
        matches!(self, Self::Follow)
    }
}

/// Whether a link belongs in the file set
///
/// Links to regular files are listed, as are dangling links so that the
/// content comparison reports on them. Links to directories, FIFOs,
/// sockets, and devices are not.
pub(super) fn lists_link(path: &Path) -> bool {
    fs::metadata(path).map_or(true, |meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    use std::os::unix::fs as unix_fs;

    #[test]
    fn test_policy_from_follow() {
        assert_eq!(SymlinkPolicy::from_follow(true), SymlinkPolicy::Follow);
        assert_eq!(SymlinkPolicy::from_follow(false), SymlinkPolicy::Opaque);
        assert!(!SymlinkPolicy::default().follows());
    }

    #[test]
    #[cfg(unix)]
    fn test_link_to_file_is_listed() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target.txt");
        fs::write(&target, "content").unwrap();
        let link = tmp.path().join("link.txt");
        unix_fs::symlink(&target, &link).unwrap();

        assert!(lists_link(&link));
    }

    #[test]
    #[cfg(unix)]
    fn test_link_to_directory_is_opaque() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("dir");
        fs::create_dir(&target).unwrap();
        let link = tmp.path().join("link");
        unix_fs::symlink(&target, &link).unwrap();

        assert!(!lists_link(&link));
    }

    #[test]
    #[cfg(unix)]
    fn test_link_to_fifo_is_not_listed() {
        let tmp = TempDir::new().unwrap();
        let fifo = tmp.path().join("pipe");
        let made = std::process::Command::new("mkfifo").arg(&fifo).status();
        if !made.is_ok_and(|status| status.success()) {
            // No mkfifo on this system
            return;
        }
        let link = tmp.path().join("link");
        unix_fs::symlink(&fifo, &link).unwrap();

        assert!(!lists_link(&link));
    }

    #[test]
    #[cfg(unix)]
    fn test_broken_link_is_listed() {
        let tmp = TempDir::new().unwrap();
        let link = tmp.path().join("broken.txt");
        unix_fs::symlink("/nonexistent/target.txt", &link).unwrap();

        assert!(lists_link(&link));
    }
}
