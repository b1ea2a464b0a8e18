//! Set algebra over two file sets

use crate::scanner::FileSet;

/// Paths split by which side they were found on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Present under both roots
    pub matched: FileSet,
    /// Present under A only
    pub missing_in_b: FileSet,
    /// Present under B only
    pub extra_in_b: FileSet,
}

/// Split two file sets into matched, A-only, and B-only paths
#[must_use]
pub fn reconcile(a: &FileSet, b: &FileSet) -> Reconciliation {
    Reconciliation {
        matched: a.intersection(b).cloned().collect(),
        missing_in_b: a.difference(b).cloned().collect(),
        extra_in_b: b.difference(a).cloned().collect(),
    }
}
