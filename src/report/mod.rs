pub mod aggregate;
pub mod writer;

// Re-export main types and functions for easier access
pub use aggregate::{compare_names, count_by_name, distinct_by_name, distinct_sorted};
pub use writer::{ReportWriter, ReportPaths, format_counts};
