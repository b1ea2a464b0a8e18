//! Atomic report persistence

use std::io::Write;
use std::path::Path;

use tempfile::Builder;
use tracing::debug;

use crate::error::{Error, Result};

/// Writes rendered reports to disk
pub struct ReportWriter;

impl ReportWriter {
    /// Persist `text` at `destination`
    ///
    /// The report is written to a temporary file beside the destination and
    /// renamed into place, so a failed write never leaves a partial report.
    ///
    /// # Errors
    ///
    /// Returns `Error::ReportWrite` if the file cannot be created, written,
    /// or moved into place.
    pub fn persist(text: &str, destination: &Path) -> Result<()> {
        let write_error = |source| Error::ReportWrite {
            path: destination.to_path_buf(),
            source,
        };

        let parent = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = Builder::new();
        builder.prefix(".comparison_report");
        // Created like a plain new file so the umask applies, not owner-only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }

        let mut staged = builder.tempfile_in(parent).map_err(write_error)?;
        staged.write_all(text.as_bytes()).map_err(write_error)?;
        staged.as_file().sync_all().map_err(write_error)?;
        staged
            .persist(destination)
            .map_err(|err| write_error(err.error))?;

        debug!(path = %destination.display(), bytes = text.len(), "report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_persist_writes_text() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("report.txt");

        ReportWriter::persist("line one\nline two", &dest).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_persist_replaces_existing_report() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("report.txt");
        fs::write(&dest, "stale").unwrap();

        ReportWriter::persist("fresh", &dest).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "fresh");
    }

    #[test]
    #[cfg(unix)]
    fn test_persist_mode_matches_plain_write() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("report.txt");
        let plain = tmp.path().join("plain.txt");

        ReportWriter::persist("text", &dest).unwrap();
        fs::write(&plain, "text").unwrap();

        let mode = |path: &Path| fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&dest), mode(&plain));
    }

    #[test]
    fn test_persist_missing_parent_fails_cleanly() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("no_such_dir").join("report.txt");

        let err = ReportWriter::persist("text", &dest).unwrap_err();

        assert!(matches!(err, Error::ReportWrite { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn test_persist_onto_directory_leaves_no_temp_files() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("occupied");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("keep.txt"), "x").unwrap();

        let result = ReportWriter::persist("text", &dest);

        assert!(result.is_err());
        let leftovers = fs::read_dir(tmp.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
