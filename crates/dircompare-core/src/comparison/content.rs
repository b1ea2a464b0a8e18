//! Byte-exact content comparison of matched files

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use tracing::{trace, warn};

use super::progress::ProgressObserver;
use crate::error::Error;
use crate::scanner::{FileSet, RelativePath};

const CHUNK_SIZE: usize = 8192; // 8KB buffer for streaming

/// Classification of a single matched path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Both files hold the same bytes
    Identical,
    /// The files differ in length or content
    Different,
    /// One side could not be opened or read
    Errored(String),
}

/// Matched paths split by content outcome
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentOutcome {
    /// Same bytes on both sides
    pub identical: FileSet,
    /// Different bytes
    pub different: FileSet,
    /// Could not be compared, with the reason
    pub errored: BTreeMap<RelativePath, String>,
}

#[derive(Debug, Clone, Copy)]
enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("Directory A"),
            Self::B => f.write_str("Directory B"),
        }
    }
}

fn describe(side: Side, path: &Path, err: &io::Error) -> String {
    format!("{side} ({}): {err}", path.display())
}

/// Content comparator
pub struct ContentComparator;

impl ContentComparator {
    /// Compare every matched path under both roots
    ///
    /// A failure on one path is recorded in `errored` and the batch continues.
    pub fn compare(
        root_a: &Path,
        root_b: &Path,
        matched: &FileSet,
        observer: &mut dyn ProgressObserver,
    ) -> ContentOutcome {
        let mut outcome = ContentOutcome::default();
        observer.on_start(matched.len());

        for rel_path in matched {
            let result = Self::compare_path(root_a, root_b, rel_path);
            observer.on_file(rel_path, &result);

            match result {
                FileOutcome::Identical => {
                    outcome.identical.insert(rel_path.clone());
                }
                FileOutcome::Different => {
                    outcome.different.insert(rel_path.clone());
                }
                FileOutcome::Errored(reason) => {
                    let err = Error::FileCompare {
                        path: rel_path.to_string(),
                        reason: reason.clone(),
                    };
                    warn!("{err}");
                    outcome.errored.insert(rel_path.clone(), reason);
                }
            }
        }

        observer.on_finish();
        outcome
    }

    /// Classify one matched path
    #[must_use]
    pub fn compare_path(root_a: &Path, root_b: &Path, rel_path: &RelativePath) -> FileOutcome {
        let file_a = rel_path.under(root_a);
        let file_b = rel_path.under(root_b);

        let outcome = match Self::files_equal(&file_a, &file_b) {
            Ok(true) => FileOutcome::Identical,
            Ok(false) => FileOutcome::Different,
            Err(reason) => FileOutcome::Errored(reason),
        };
        trace!(path = %rel_path, ?outcome, "compared");
        outcome
    }

    /// Compare two files byte for byte by streaming both
    ///
    /// # Errors
    ///
    /// Returns a description naming the failing side if either file cannot
    /// be opened or read.
    pub fn files_equal(a: &Path, b: &Path) -> Result<bool, String> {
        let file_a = File::open(a).map_err(|e| describe(Side::A, a, &e))?;
        let file_b = File::open(b).map_err(|e| describe(Side::B, b, &e))?;

        let len_a = file_a.metadata().map_err(|e| describe(Side::A, a, &e))?.len();
        let len_b = file_b.metadata().map_err(|e| describe(Side::B, b, &e))?.len();
        if len_a != len_b {
            return Ok(false);
        }

        let mut reader_a = BufReader::new(file_a);
        let mut reader_b = BufReader::new(file_b);
        let mut buf_a = [0u8; CHUNK_SIZE];
        let mut buf_b = [0u8; CHUNK_SIZE];

        loop {
            let read_a = fill(&mut reader_a, &mut buf_a).map_err(|e| describe(Side::A, a, &e))?;
            let read_b = fill(&mut reader_b, &mut buf_b).map_err(|e| describe(Side::B, b, &e))?;

            if read_a != read_b || buf_a[..read_a] != buf_b[..read_b] {
                return Ok(false);
            }

            if read_a == 0 {
                return Ok(true);
            }
        }
    }
}

/// Read until `buf` is full or the reader is exhausted
fn fill(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
