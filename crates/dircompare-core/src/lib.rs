//! # dircompare-core
//!
//! Core library for comparing two directory trees.
//!
//! A comparison runs as a single pipeline: both roots are enumerated,
//! the two path sets are reconciled into matched / missing / extra,
//! matched files are compared byte for byte, and the outcome is
//! rendered into a plain text report.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error taxonomy shared by every stage
pub mod error;

/// Recursive path enumeration
pub mod scanner;

/// Set reconciliation and content comparison
pub mod comparison;

/// Configuration file discovery, merging, and validation
pub mod config;

/// Report rendering and persistence
pub mod report;

pub use comparison::{
    ComparisonResult, ContentComparator, DirectoryComparator, FileOutcome, NoProgress,
    ProgressObserver, SummaryCounts,
};
pub use error::{Error, Result};
pub use report::{ReportRenderer, ReportWriter};
pub use scanner::{FileSet, RelativePath, Scanner, SymlinkPolicy};
