//! Report rendering and persistence

mod persist;
mod render;

pub use persist::ReportWriter;
pub use render::ReportRenderer;

/// Default report file name, resolved against the working directory
pub const DEFAULT_REPORT_FILE: &str = "comparison_report.txt";
